use crate::models::{Headline, ScoredHeadline, Sentiment, SentimentStats, SentimentSummary};
use crate::scorer::SentimentScorer;

/// Score every headline, keeping input order.
///
/// Nothing is dropped: a missing title is scored as empty text.
pub fn analyze(headlines: &[Headline], scorer: &dyn SentimentScorer) -> Vec<ScoredHeadline> {
    headlines
        .iter()
        .map(|headline| {
            let result = scorer.score(headline.title.as_deref().unwrap_or(""));
            ScoredHeadline {
                title: headline.title.clone(),
                source: headline
                    .source
                    .clone()
                    .filter(|source| !source.is_empty())
                    .unwrap_or_else(|| "unknown".to_string()),
                score: result.score,
                comparative: result.comparative,
                sentiment: Sentiment::from_score(result.score),
            }
        })
        .collect()
}

/// Count labels and pick the overall sentiment.
pub fn summarize(items: &[ScoredHeadline]) -> SentimentSummary {
    let mut stats = SentimentStats::default();
    for item in items {
        stats.record(item.sentiment);
    }

    SentimentSummary {
        stats,
        overall: stats.overall(),
    }
}
