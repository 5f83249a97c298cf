use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{ensure_success, http_client, HeadlineSource};
use crate::error::SourceError;
use crate::models::Headline;

const NAME: &str = "CryptoPanic";
const DEFAULT_ENDPOINT: &str = "https://cryptopanic.com/api/v1/posts/";

#[derive(Debug, Deserialize)]
struct PostsResponse {
    results: Option<Vec<Post>>,
}

#[derive(Debug, Deserialize)]
struct Post {
    title: Option<String>,
    domain: Option<String>,
}

/// Aggregator API, needs `CRYPTOPANIC_KEY`.
pub struct CryptoPanic {
    client: Client,
    auth_token: Option<String>,
    endpoint: String,
}

impl CryptoPanic {
    pub fn new(auth_token: Option<String>) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            auth_token,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn try_fetch(&self, auth_token: &str) -> Result<Vec<Headline>> {
        let mut url = Url::parse(&self.endpoint).context("Invalid CryptoPanic endpoint")?;
        url.query_pairs_mut()
            .append_pair("auth_token", auth_token)
            .append_pair("public", "true");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch posts from CryptoPanic")?;
        let response = ensure_success(response, "CryptoPanic API").await?;

        let posts = response
            .json::<PostsResponse>()
            .await
            .context("Failed to parse CryptoPanic response")?;

        let results = posts
            .results
            .context("Invalid CryptoPanic response: missing results")?;

        Ok(results
            .into_iter()
            .map(|post| Headline {
                title: post.title,
                source: post.domain,
            })
            .collect())
    }
}

#[async_trait]
impl HeadlineSource for CryptoPanic {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(&self) -> Result<Vec<Headline>, SourceError> {
        let auth_token = self
            .auth_token
            .as_deref()
            .ok_or(SourceError::MissingCredential {
                source_name: NAME,
                variable: "CRYPTOPANIC_KEY",
            })?;

        self.try_fetch(auth_token)
            .await
            .map_err(|cause| SourceError::upstream(NAME, cause))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> CryptoPanic {
        CryptoPanic::new(token.map(str::to_string))
            .unwrap()
            .with_endpoint(format!("{}/api/v1/posts/", server.uri()))
    }

    #[tokio::test]
    async fn test_maps_results_to_headlines() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/posts/"))
            .and(query_param("auth_token", "secret"))
            .and(query_param("public", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"title": "Bitcoin rallies", "domain": "coindesk.com"},
                    {"title": "Ether slides", "domain": null}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let headlines = client_for(&server, Some("secret")).fetch().await.unwrap();

        assert_eq!(
            headlines,
            vec![
                Headline::new("Bitcoin rallies", "coindesk.com"),
                Headline {
                    title: Some("Ether slides".to_string()),
                    source: None,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_token_is_config_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server, None).fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn test_missing_results_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"info": "x"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, Some("secret")).fetch().await.unwrap_err();
        assert_eq!(err.to_string(), "CryptoPanic request failed");
        let SourceError::Upstream { cause, .. } = err else {
            panic!("expected upstream error");
        };
        assert!(cause.to_string().contains("missing results"));
    }

    #[tokio::test]
    async fn test_http_error_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("bad token"))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("secret")).fetch().await.unwrap_err();
        let SourceError::Upstream { cause, .. } = err else {
            panic!("expected upstream error");
        };
        assert!(format!("{:#}", cause).contains("403"));
    }
}
