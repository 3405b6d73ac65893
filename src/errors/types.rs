//! Error types for the Pushwoosh client
//!
//! The taxonomy is deliberately small: invalid caller input is rejected
//! before any I/O, transport failures carry the underlying `reqwest` error,
//! and decode failures carry the underlying `serde_json` error. Remote
//! application-level error payloads are never translated here; they reach
//! the caller as ordinary response data.

use thiserror::Error;

/// Errors surfaced by session construction and message sending
#[derive(Error, Debug)]
pub enum PushError {
    /// Caller supplied invalid or missing data; detected before any network call
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// The session's proxy URL could not be turned into a proxy route
    #[error("Invalid proxy URL: {url}")]
    InvalidProxy {
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The endpoint URL is not parseable
    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network, TLS, proxy, timeout, or HTTP status failure
    #[error("HTTP transport failed: {context}")]
    Transport {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body was not valid JSON
    #[error("Failed to decode response body: {context}")]
    Decode {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Convenience type alias for Results using PushError
pub type PushResult<T> = Result<T, PushError>;

impl PushError {
    /// Create a new InvalidArgument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create a new Transport error without a source
    pub fn transport(context: impl Into<String>) -> Self {
        Self::Transport {
            context: context.into(),
            source: None,
        }
    }

    /// Create a new Transport error with source
    pub fn transport_with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidProxy { .. } | Self::InvalidEndpoint { .. } => {
                "argument"
            }
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
        }
    }
}

impl From<reqwest::Error> for PushError {
    fn from(err: reqwest::Error) -> Self {
        let context = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            match err.url() {
                Some(url) => format!("connection failed for {url}"),
                None => "connection failed".to_string(),
            }
        } else if let Some(status) = err.status() {
            format!("HTTP {status}")
        } else {
            "request failed".to_string()
        };

        Self::Transport {
            context,
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for PushError {
    fn from(err: serde_json::Error) -> Self {
        let context = if err.is_syntax() {
            format!(
                "JSON syntax error at line {} column {}",
                err.line(),
                err.column()
            )
        } else if err.is_eof() {
            "unexpected end of JSON input".to_string()
        } else {
            "JSON error".to_string()
        };

        Self::Decode {
            context,
            source: Some(Box::new(err)),
        }
    }
}
