use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single headline source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{source_name}: {variable} is not set")]
    MissingCredential {
        source_name: &'static str,
        variable: &'static str,
    },

    #[error("{source_name} request failed")]
    Upstream {
        source_name: &'static str,
        #[source]
        cause: anyhow::Error,
    },
}

impl SourceError {
    pub fn upstream(source_name: &'static str, cause: anyhow::Error) -> Self {
        SourceError::Upstream { source_name, cause }
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            SourceError::MissingCredential { source_name, .. }
            | SourceError::Upstream { source_name, .. } => source_name,
        }
    }
}

/// Webhook delivery failure. Never fatal to a run.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook returned {0}")]
    Status(StatusCode),
}
