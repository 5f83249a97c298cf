use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "crypto-sentiment";

/// Runtime settings for one analysis run.
///
/// Every key is optional: missing credentials only disable the source that
/// needs them, and a missing webhook disables notification.
#[derive(Debug, Clone)]
pub struct Config {
    pub cryptopanic_key: Option<String>,
    pub newsapi_key: Option<String>,
    pub webhook_url: Option<String>,
    pub reports_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cryptopanic_key: None,
            newsapi_key: None,
            webhook_url: None,
            reports_dir: PathBuf::from("reports"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        // None found is fine, the variables may be set in the environment
        Self::load_first_dotenv(&Self::dotenv_candidates());

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            cryptopanic_key: read("CRYPTOPANIC_KEY"),
            newsapi_key: read("NEWSAPI_KEY"),
            webhook_url: read("WEBHOOK_URL"),
            reports_dir: read("REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("reports")),
        }
    }

    /// Where a `.env` file may live, most specific first.
    fn dotenv_candidates() -> Vec<PathBuf> {
        [
            env::current_dir().ok(),
            dirs::config_dir().map(|dir| dir.join(APP_DIR)),
            dirs::home_dir(),
        ]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(".env"))
        .collect()
    }

    /// Load the first candidate that parses. Variables already set win.
    fn load_first_dotenv(candidates: &[PathBuf]) -> Option<&Path> {
        let path = candidates
            .iter()
            .find(|path| dotenvy::from_path(path).is_ok())?;
        debug!(path = %path.display(), "loaded .env");
        Some(path)
    }
}
