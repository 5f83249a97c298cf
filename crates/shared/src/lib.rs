// Public modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod fallback;
mod lexicon;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod sources;

// Re-export commonly used types
pub use analysis::{analyze, summarize};
pub use config::Config;
pub use error::{NotifyError, SourceError};
pub use fallback::{first_success, FallbackFetcher};
pub use models::{Headline, Report, ScoredHeadline, Sentiment, SentimentStats, SentimentSummary};
pub use notify::WebhookNotifier;
pub use pipeline::{Pipeline, RunError, RunOutcome};
pub use report::ReportGenerator;
pub use scorer::{LexiconScorer, Score, SentimentScorer};
pub use sources::{CoinDeskRss, CryptoPanic, HeadlineSource, NewsApi};
