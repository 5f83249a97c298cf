use anyhow::Result;
use std::future::Future;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::SourceError;
use crate::models::Headline;
use crate::sources::{CoinDeskRss, CryptoPanic, HeadlineSource, NewsApi};

/// Await `attempts` in order and return the first `Ok`.
///
/// Errors from `attempts` are passed to `on_failure` and dropped. If none
/// succeeds, `last_resort` is awaited and its result returned untouched.
/// Futures are polled one at a time, so nothing after a success runs.
pub async fn first_success<T, E, I, F>(
    attempts: I,
    last_resort: F,
    mut on_failure: impl FnMut(E),
) -> Result<T, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    for attempt in attempts {
        match attempt.await {
            Ok(value) => return Ok(value),
            Err(e) => on_failure(e),
        }
    }
    last_resort.await
}

/// Fixed-order headline fetch across all configured sources.
pub struct FallbackFetcher {
    primary: Vec<Box<dyn HeadlineSource>>,
    last_resort: Box<dyn HeadlineSource>,
}

impl FallbackFetcher {
    pub fn new(
        primary: Vec<Box<dyn HeadlineSource>>,
        last_resort: Box<dyn HeadlineSource>,
    ) -> Self {
        Self {
            primary,
            last_resort,
        }
    }

    /// CryptoPanic, then NewsAPI, then the CoinDesk feed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let primary: Vec<Box<dyn HeadlineSource>> = vec![
            Box::new(CryptoPanic::new(config.cryptopanic_key.clone())?),
            Box::new(NewsApi::new(config.newsapi_key.clone())?),
        ];
        Ok(Self::new(primary, Box::new(CoinDeskRss::new()?)))
    }

    pub async fn fetch_headlines(&self) -> Result<Vec<Headline>, SourceError> {
        let attempts = self.primary.iter().map(|source| labelled_fetch(source.as_ref()));
        let last_resort = labelled_fetch(self.last_resort.as_ref());

        let (name, headlines) = first_success(attempts, last_resort, |e: SourceError| {
            let source_name = e.source_name();
            let error = anyhow::Error::from(e);
            debug!(
                source = source_name,
                error = %format!("{:#}", error),
                "headline source failed, trying next"
            );
        })
        .await?;

        info!(source = name, count = headlines.len(), "fetched headlines");
        Ok(headlines)
    }
}

async fn labelled_fetch(
    source: &dyn HeadlineSource,
) -> Result<(&'static str, Vec<Headline>), SourceError> {
    let headlines = source.fetch().await?;
    Ok((source.name(), headlines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubSource {
        name: &'static str,
        outcome: Option<Vec<Headline>>,
        calls: Arc<AtomicUsize>,
    }

    impl StubSource {
        fn ok(name: &'static str, titles: &[&str]) -> (Box<dyn HeadlineSource>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let headlines = titles.iter().map(|t| Headline::new(*t, name)).collect();
            let source = StubSource {
                name,
                outcome: Some(headlines),
                calls: calls.clone(),
            };
            (Box::new(source), calls)
        }

        fn failing(name: &'static str) -> (Box<dyn HeadlineSource>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = StubSource {
                name,
                outcome: None,
                calls: calls.clone(),
            };
            (Box::new(source), calls)
        }
    }

    #[async_trait]
    impl HeadlineSource for StubSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn fetch(&self) -> Result<Vec<Headline>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Some(headlines) => Ok(headlines.clone()),
                None => Err(SourceError::upstream(
                    self.name,
                    anyhow::anyhow!("{} is down", self.name),
                )),
            }
        }
    }

    // ==================== Combinator Tests ====================

    type TestAttempt = Pin<Box<dyn Future<Output = Result<u32, String>>>>;

    fn attempt(result: Result<u32, &str>, polled: &Arc<AtomicUsize>) -> TestAttempt {
        let polled = polled.clone();
        let result = result.map_err(str::to_string);
        Box::pin(async move {
            polled.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    #[tokio::test]
    async fn test_first_success_stops_at_first_ok() {
        let polled = Arc::new(AtomicUsize::new(0));
        let untouched = Arc::new(AtomicUsize::new(0));
        let mut failures = Vec::new();

        let result = first_success(
            vec![
                attempt(Err("a"), &polled),
                attempt(Ok(2), &polled),
                attempt(Ok(9), &untouched),
            ],
            attempt(Ok(3), &untouched),
            |e| failures.push(e),
        )
        .await;

        assert_eq!(result, Ok(2));
        assert_eq!(failures, vec!["a".to_string()]);
        assert_eq!(polled.load(Ordering::SeqCst), 2);
        assert_eq!(untouched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_first_success_returns_last_resort_error_as_is() {
        let polled = Arc::new(AtomicUsize::new(0));
        let mut failures = Vec::new();

        let result = first_success(
            vec![attempt(Err("a"), &polled), attempt(Err("b"), &polled)],
            attempt(Err("c"), &polled),
            |e| failures.push(e),
        )
        .await;

        assert_eq!(result, Err("c".to_string()));
        assert_eq!(failures, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(polled.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_first_success_with_no_attempts_uses_last_resort() {
        let polled = Arc::new(AtomicUsize::new(0));
        let result = first_success(Vec::new(), attempt(Ok(7), &polled), |_| {}).await;
        assert_eq!(result, Ok(7));
    }

    // ==================== Coordinator Tests ====================

    #[tokio::test]
    async fn test_primary_success_skips_others() {
        let (a, a_calls) = StubSource::ok("A", &["from a"]);
        let (b, b_calls) = StubSource::ok("B", &["from b"]);
        let (c, c_calls) = StubSource::ok("C", &["from c"]);
        let fetcher = FallbackFetcher::new(vec![a, b], c);

        let headlines = fetcher.fetch_headlines().await.unwrap();

        assert_eq!(headlines, vec![Headline::new("from a", "A")]);
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_a_fails_then_b_is_used() {
        let (a, _) = StubSource::failing("A");
        let (b, b_calls) = StubSource::ok("B", &["from b"]);
        let (c, c_calls) = StubSource::ok("C", &["from c"]);
        let fetcher = FallbackFetcher::new(vec![a, b], c);

        let headlines = fetcher.fetch_headlines().await.unwrap();

        assert_eq!(headlines, vec![Headline::new("from b", "B")]);
        assert_eq!(b_calls.load(Ordering::SeqCst), 1);
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_credentials_fall_through_to_feed() {
        let config = Config::default();
        let fetcher = FallbackFetcher::from_config(&config).unwrap();
        // Only the last resort is real network, so swap it for a stub
        let (c, c_calls) = StubSource::ok("C", &["feed item"]);
        let fetcher = FallbackFetcher::new(fetcher.primary, c);

        let headlines = fetcher.fetch_headlines().await.unwrap();

        assert_eq!(headlines, vec![Headline::new("feed item", "C")]);
        assert_eq!(c_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_sources_fail_returns_last_error() {
        let (a, _) = StubSource::failing("A");
        let (b, _) = StubSource::failing("B");
        let (c, c_calls) = StubSource::failing("C");
        let fetcher = FallbackFetcher::new(vec![a, b], c);

        let err = fetcher.fetch_headlines().await.unwrap_err();

        assert_eq!(err.source_name(), "C");
        assert_eq!(c_calls.load(Ordering::SeqCst), 1);
    }
}
