use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::error::NotifyError;
use crate::models::Report;

pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts the finished report to a configured endpoint.
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One attempt, no retry.
    pub async fn notify(&self, report: &Report) -> Result<(), NotifyError> {
        let response = self.client.post(&self.url).json(report).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status));
        }
        Ok(())
    }
}
