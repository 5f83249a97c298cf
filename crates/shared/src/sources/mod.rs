//! Headline source adapters.
//!
//! Each adapter talks to one upstream provider and normalizes its response
//! into [`Headline`] records.

mod coindesk;
mod cryptopanic;
mod newsapi;

pub use coindesk::CoinDeskRss;
pub use cryptopanic::CryptoPanic;
pub use newsapi::NewsApi;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::error::SourceError;
use crate::models::Headline;

/// Per-request timeout for every headline source.
pub const SOURCE_TIMEOUT: Duration = Duration::from_secs(15);

#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    async fn fetch(&self) -> Result<Vec<Headline>, SourceError>;
}

fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(SOURCE_TIMEOUT)
        .user_agent("Mozilla/5.0 (compatible; CryptoSentiment/1.0)")
        .build()
        .context("Failed to create HTTP client")
}

/// Reject non-2xx responses, keeping the body in the error.
async fn ensure_success(response: Response, provider: &str) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("unknown error"));
        anyhow::bail!("{} returned error: {} - {}", provider, status, error_text);
    }
    Ok(response)
}
