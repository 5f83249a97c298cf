use std::collections::{HashMap, HashSet};

use crate::lexicon::{NEGATORS, VALENCES};

/// Polarity of one piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Sum of word valences
    pub score: i32,
    /// `score` divided by the token count
    pub comparative: f64,
}

/// Text in, polarity out.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Score;
}

/// Word-valence scorer with single-word negation.
pub struct LexiconScorer {
    valences: HashMap<&'static str, i32>,
    negators: HashSet<&'static str>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    /// Lowercase, turn punctuation into spaces, split on whitespace.
    /// Apostrophes and hyphens stay so "don't" and "sell-off" survive.
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .replace('\u{2019}', "'")
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '\'' || c == '-' {
                    c
                } else {
                    ' '
                }
            })
            .collect::<String>()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Score {
        let tokens = Self::tokenize(text);

        let mut score = 0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = self.valences.get(token.as_str()) else {
                continue;
            };
            let negated = i > 0 && self.negators.contains(tokens[i - 1].as_str());
            score += if negated { -valence } else { valence };
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            score as f64 / tokens.len() as f64
        };

        Score { score, comparative }
    }
}
