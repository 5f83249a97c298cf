use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Report, ScoredHeadline, Sentiment, SentimentSummary};

/// Headlines kept in the JSON report
pub const JSON_HEADLINE_LIMIT: usize = 20;
/// Headlines listed in the markdown report
pub const MARKDOWN_HEADLINE_LIMIT: usize = 30;

pub struct ReportGenerator;

impl ReportGenerator {
    /// Calendar date used in report titles and file names
    pub fn report_date(now: DateTime<Utc>) -> String {
        now.format("%Y-%m-%d").to_string()
    }

    pub fn build(
        date: &str,
        summary: &SentimentSummary,
        items: &[ScoredHeadline],
        now: DateTime<Utc>,
    ) -> Report {
        Report {
            date: date.to_string(),
            overall_sentiment: summary.overall,
            stats: summary.stats,
            total_headlines: items.len(),
            top_headlines: items.iter().take(JSON_HEADLINE_LIMIT).cloned().collect(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    fn glyph(sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Positive => "👍",
            Sentiment::Negative => "👎",
            Sentiment::Neutral => "😐",
        }
    }

    pub fn generate_markdown(
        date: &str,
        summary: &SentimentSummary,
        items: &[ScoredHeadline],
    ) -> String {
        let mut lines = vec![
            format!("# Crypto News Sentiment Report — {}", date),
            String::new(),
            format!(
                "**Overall sentiment:** **{}**",
                summary.overall.as_str().to_uppercase()
            ),
            String::new(),
            format!(
                "**Stats:** Positive: {} — Negative: {} — Neutral: {}",
                summary.stats.positive, summary.stats.negative, summary.stats.neutral
            ),
            String::new(),
            "## Top headlines".to_string(),
            String::new(),
        ];

        for item in items.iter().take(MARKDOWN_HEADLINE_LIMIT) {
            lines.push(format!(
                "- {} **{}** — {} ({})",
                Self::glyph(item.sentiment),
                item.sentiment.as_str().to_uppercase(),
                item.title.as_deref().unwrap_or(""),
                item.source
            ));
        }

        lines.join("\n")
    }

    fn ensure_dir(reports_dir: &Path) -> Result<()> {
        fs::create_dir_all(reports_dir).with_context(|| {
            format!("Failed to create reports directory: {}", reports_dir.display())
        })
    }

    pub fn save_json(report: &Report, reports_dir: &Path) -> Result<PathBuf> {
        Self::ensure_dir(reports_dir)?;
        let filepath = reports_dir.join(format!("report-{}.json", report.date));

        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        fs::write(&filepath, json)
            .with_context(|| format!("Failed to write report: {}", filepath.display()))?;

        Ok(filepath)
    }

    pub fn save_markdown(content: &str, date: &str, reports_dir: &Path) -> Result<PathBuf> {
        Self::ensure_dir(reports_dir)?;
        let filepath = reports_dir.join(format!("report-{}.md", date));

        fs::write(&filepath, content)
            .with_context(|| format!("Failed to write markdown report: {}", filepath.display()))?;

        Ok(filepath)
    }
}
