use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use rss::Channel;

use super::{ensure_success, http_client, HeadlineSource};
use crate::error::SourceError;
use crate::models::Headline;

const NAME: &str = "CoinDesk";
const DEFAULT_ENDPOINT: &str = "https://www.coindesk.com/arc/outboundfeeds/rss/";
const MAX_ITEMS: usize = 50;

/// Public RSS feed. No credential, so it is the last resort.
pub struct CoinDeskRss {
    client: Client,
    endpoint: String,
}

impl CoinDeskRss {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn try_fetch(&self) -> Result<Vec<Headline>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("Failed to fetch CoinDesk RSS feed")?;
        let response = ensure_success(response, "CoinDesk feed").await?;

        let content = response
            .bytes()
            .await
            .context("Failed to read CoinDesk RSS body")?;

        let channel = Channel::read_from(&content[..])
            .map_err(|e| anyhow::anyhow!("Failed to parse CoinDesk RSS feed: {}", e))?;

        Ok(parse_channel(&channel))
    }
}

fn parse_channel(channel: &Channel) -> Vec<Headline> {
    channel
        .items()
        .iter()
        .take(MAX_ITEMS)
        .map(|item| Headline {
            title: item.title().map(str::to_string),
            source: Some(NAME.to_string()),
        })
        .collect()
}

#[async_trait]
impl HeadlineSource for CoinDeskRss {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self) -> Result<Vec<Headline>, SourceError> {
        self.try_fetch()
            .await
            .map_err(|cause| SourceError::upstream(NAME, cause))
    }
}
