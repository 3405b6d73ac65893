//! Session descriptor for the Pushwoosh remote API
//!
//! A [`Session`] bundles the API access token, the application code, and an
//! optional proxy server into an immutable value. Both credential fields are
//! validated at construction; nothing mutates afterwards, so a single
//! session can be shared freely across threads and reused for any number of
//! sends.

use crate::errors::{PushError, PushResult};

/// Environment variables consulted for best-effort proxy discovery
const PROXY_ENV_VARS: &[&str] = &["HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"];

/// Immutable bundle of credentials and optional proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    application_code: String,
    proxy: Option<String>,
}

impl Session {
    /// Create a session without a proxy
    ///
    /// Fails with [`PushError::InvalidArgument`] when either credential is
    /// empty. No network access occurs.
    pub fn new(
        access_token: impl Into<String>,
        application_code: impl Into<String>,
    ) -> PushResult<Self> {
        Self::build(access_token.into(), application_code.into(), None)
    }

    /// Create a session routing requests through the given proxy server
    ///
    /// One trailing `/` is stripped from the proxy URL; an empty proxy
    /// string means "no proxy".
    pub fn with_proxy(
        access_token: impl Into<String>,
        application_code: impl Into<String>,
        proxy: impl Into<String>,
    ) -> PushResult<Self> {
        Self::build(
            access_token.into(),
            application_code.into(),
            Some(proxy.into()),
        )
    }

    /// Create a session with the proxy supplied by a resolution strategy
    ///
    /// The resolver is only consulted here, keeping proxy discovery out of
    /// the send path. Pass [`system_proxy`] to pick up the host
    /// environment's configured proxy.
    pub fn with_proxy_from<F>(
        access_token: impl Into<String>,
        application_code: impl Into<String>,
        resolve: F,
    ) -> PushResult<Self>
    where
        F: FnOnce() -> Option<String>,
    {
        Self::build(access_token.into(), application_code.into(), resolve())
    }

    fn build(
        access_token: String,
        application_code: String,
        proxy: Option<String>,
    ) -> PushResult<Self> {
        if access_token.is_empty() {
            return Err(PushError::invalid_argument(
                "access_token",
                "cannot be empty",
            ));
        }
        if application_code.is_empty() {
            return Err(PushError::invalid_argument(
                "application_code",
                "cannot be empty",
            ));
        }

        let proxy = proxy.map(normalize_proxy).filter(|p| !p.is_empty());

        let session = Session {
            access_token,
            application_code,
            proxy,
        };

        tracing::debug!(
            application = %session.application_code,
            token_len = session.access_token.len(),
            proxy = ?session.proxy,
            "session created"
        );

        Ok(session)
    }

    /// API access token credential
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Application code identifying the target application
    pub fn application_code(&self) -> &str {
        &self.application_code
    }

    /// Normalized proxy server URL, if any
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

/// Strip exactly one trailing `/` if present
fn normalize_proxy(proxy: String) -> String {
    match proxy.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => proxy,
    }
}

/// Best-effort lookup of the host environment's configured proxy
///
/// Returns the first non-empty proxy environment variable, or `None` when
/// nothing is configured.
pub fn system_proxy() -> Option<String> {
    for var in PROXY_ENV_VARS {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}
