use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::analysis::{analyze, summarize};
use crate::config::Config;
use crate::error::SourceError;
use crate::fallback::FallbackFetcher;
use crate::models::{Report, SentimentSummary};
use crate::notify::WebhookNotifier;
use crate::report::ReportGenerator;
use crate::scorer::{LexiconScorer, SentimentScorer};

/// Why a run stopped early
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Failed to fetch headlines")]
    Fetch(#[from] SourceError),

    #[error(transparent)]
    Persist(#[from] anyhow::Error),
}

/// Everything a finished run produced
#[derive(Debug)]
pub struct RunOutcome {
    pub report: Report,
    pub summary: SentimentSummary,
    pub json_path: PathBuf,
    pub markdown_path: PathBuf,
    /// `None` when no webhook is configured
    pub delivered: Option<bool>,
}

pub struct Pipeline {
    fetcher: FallbackFetcher,
    scorer: Box<dyn SentimentScorer>,
    notifier: Option<WebhookNotifier>,
    reports_dir: PathBuf,
}

impl Pipeline {
    pub fn new(
        fetcher: FallbackFetcher,
        scorer: Box<dyn SentimentScorer>,
        notifier: Option<WebhookNotifier>,
        reports_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            scorer,
            notifier,
            reports_dir: reports_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = FallbackFetcher::from_config(config)?;
        let notifier = config
            .webhook_url
            .as_deref()
            .map(WebhookNotifier::new)
            .transpose()?;

        Ok(Self::new(
            fetcher,
            Box::new(LexiconScorer::new()),
            notifier,
            config.reports_dir.clone(),
        ))
    }

    /// Fetch, score, aggregate, render, persist, then notify.
    ///
    /// Only fetching and writing can fail; a webhook failure is logged.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunOutcome, RunError> {
        let date = ReportGenerator::report_date(now);

        let headlines = self.fetcher.fetch_headlines().await?;

        let items = analyze(&headlines, self.scorer.as_ref());
        let summary = summarize(&items);

        let report = ReportGenerator::build(&date, &summary, &items, now);
        let markdown = ReportGenerator::generate_markdown(&date, &summary, &items);

        let json_path = ReportGenerator::save_json(&report, &self.reports_dir)
            .context("Failed to save JSON report")?;
        info!(path = %json_path.display(), "wrote report");

        let markdown_path = ReportGenerator::save_markdown(&markdown, &date, &self.reports_dir)
            .context("Failed to save markdown report")?;
        info!(path = %markdown_path.display(), "wrote report");

        let delivered = match &self.notifier {
            Some(notifier) => Some(self.deliver(notifier, &report).await),
            None => None,
        };

        Ok(RunOutcome {
            report,
            summary,
            json_path,
            markdown_path,
            delivered,
        })
    }

    async fn deliver(&self, notifier: &WebhookNotifier, report: &Report) -> bool {
        match notifier.notify(report).await {
            Ok(()) => {
                info!(url = notifier.url(), "posted report to webhook");
                true
            }
            Err(e) => {
                warn!(error = %e, "webhook post failed");
                false
            }
        }
    }
}
