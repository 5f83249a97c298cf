use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{ensure_success, http_client, HeadlineSource};
use crate::error::SourceError;
use crate::models::Headline;

const NAME: &str = "NewsAPI";
const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";
const QUERY: &str = "crypto OR bitcoin OR ethereum";
const PAGE_SIZE: &str = "50";

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    articles: Option<Vec<Article>>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    description: Option<String>,
    source: Option<ArticleSource>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

impl Article {
    fn into_headline(self) -> Headline {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .or(self.description.filter(|d| !d.is_empty()))
            .unwrap_or_else(|| "no title".to_string());

        Headline {
            title: Some(title),
            source: self.source.and_then(|s| s.name),
        }
    }
}

/// Search API, needs `NEWSAPI_KEY`.
pub struct NewsApi {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl NewsApi {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn try_fetch(&self, api_key: &str) -> Result<Vec<Headline>> {
        let mut url = Url::parse(&self.endpoint).context("Invalid NewsAPI endpoint")?;
        url.query_pairs_mut()
            .append_pair("q", QUERY)
            .append_pair("language", "en")
            .append_pair("pageSize", PAGE_SIZE)
            .append_pair("apiKey", api_key);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch articles from NewsAPI")?;
        let response = ensure_success(response, "NewsAPI").await?;

        let body = response
            .json::<EverythingResponse>()
            .await
            .context("Failed to parse NewsAPI response")?;

        let articles = body
            .articles
            .context("Invalid NewsAPI response: missing articles")?;

        Ok(articles.into_iter().map(Article::into_headline).collect())
    }
}

#[async_trait]
impl HeadlineSource for NewsApi {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self) -> Result<Vec<Headline>, SourceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredential {
                source_name: NAME,
                variable: "NEWSAPI_KEY",
            })?;

        self.try_fetch(api_key)
            .await
            .map_err(|cause| SourceError::upstream(NAME, cause))
    }
}
