use serde::{Deserialize, Serialize};

/// A raw headline as normalized by a source adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: Option<String>,
    pub source: Option<String>,
}

impl Headline {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            source: Some(source.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a polarity score by its sign.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// A headline with its lexicon score attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHeadline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub source: String,
    pub score: i32,
    pub comparative: f64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentStats {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentStats {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Majority label; a tie between positive and negative is neutral.
    pub fn overall(&self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub overall: Sentiment,
    pub stats: SentimentStats,
}

impl SentimentSummary {
    /// Compact one-line JSON, e.g. `{"overall":"neutral","stats":{...}}`
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Complete report data for serialization
///
/// Field names are read by the dashboard, keep them stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub date: String,
    pub overall_sentiment: Sentiment,
    pub stats: SentimentStats,
    pub total_headlines: usize,
    pub top_headlines: Vec<ScoredHeadline>,
    pub timestamp: String,
}
