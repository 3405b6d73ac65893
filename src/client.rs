//! Blocking and async clients for the Pushwoosh createMessage endpoint
//!
//! Each send is a single POST with a JSON body; the parsed response is
//! handed back to the caller untouched. Remote application-level error
//! signaling (status codes embedded in the JSON body) is the caller's
//! concern.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Proxy;
use serde_json::Value;
use url::Url;

use crate::errors::{PushError, PushResult};
use crate::message::{create_message_body, Message};
use crate::session::Session;

/// Fixed createMessage endpoint of the Pushwoosh remote API
pub const CREATE_MESSAGE_ENDPOINT: &str = "https://cp.pushwoosh.com/json/1.3/createMessage";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking client for callers without an async runtime
pub struct PushwooshClient {
    client: reqwest::blocking::Client,
    session: Session,
    endpoint: String,
}

impl PushwooshClient {
    /// Create a client against the fixed createMessage endpoint
    pub fn new(session: Session) -> PushResult<Self> {
        Self::with_endpoint(session, CREATE_MESSAGE_ENDPOINT)
    }

    /// Create a client against a custom endpoint
    pub fn with_endpoint(session: Session, endpoint: impl Into<String>) -> PushResult<Self> {
        Self::with_options(session, endpoint, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with an explicit request timeout
    pub fn with_options(
        session: Session,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> PushResult<Self> {
        let endpoint = endpoint.into();
        validate_endpoint(&endpoint)?;

        let mut builder =
            reqwest::blocking::Client::builder().timeout(Duration::from_secs(timeout_secs));
        builder = match session_proxy(&session)? {
            Some(proxy) => builder.proxy(proxy),
            None => builder.no_proxy(),
        };

        let client = builder
            .build()
            .map_err(|e| PushError::transport_with_source("failed to create HTTP client", e))?;

        Ok(PushwooshClient {
            client,
            session,
            endpoint,
        })
    }

    /// Send a notification and return the parsed JSON response
    pub fn send(&self, message: &Message) -> PushResult<Value> {
        message.validate()?;
        let body = create_message_body(&self.session, message);

        tracing::debug!(endpoint = %self.endpoint, body = %body, "posting createMessage request");

        let response = self
            .client
            .post(&self.endpoint)
            .headers(json_headers())
            .json(&body)
            .send()?
            .error_for_status()?;

        let text = response.text()?;
        let parsed: Value = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Convenience method building the [`Message`] inline
    pub fn send_message(&self, content: &str, devices: &[String]) -> PushResult<Value> {
        self.send(&Message::new(content, devices.to_vec()))
    }

    /// Session this client was built from
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Endpoint URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Async client mirroring [`PushwooshClient`]
pub struct AsyncPushwooshClient {
    client: reqwest::Client,
    session: Session,
    endpoint: String,
}

impl AsyncPushwooshClient {
    /// Create a client against the fixed createMessage endpoint
    pub fn new(session: Session) -> PushResult<Self> {
        Self::with_endpoint(session, CREATE_MESSAGE_ENDPOINT)
    }

    /// Create a client against a custom endpoint
    pub fn with_endpoint(session: Session, endpoint: impl Into<String>) -> PushResult<Self> {
        Self::with_options(session, endpoint, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with an explicit request timeout
    pub fn with_options(
        session: Session,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> PushResult<Self> {
        let endpoint = endpoint.into();
        validate_endpoint(&endpoint)?;

        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs));
        builder = match session_proxy(&session)? {
            Some(proxy) => builder.proxy(proxy),
            None => builder.no_proxy(),
        };

        let client = builder.build().map_err(|e| {
            PushError::transport_with_source("failed to create async HTTP client", e)
        })?;

        Ok(AsyncPushwooshClient {
            client,
            session,
            endpoint,
        })
    }

    /// Send a notification and return the parsed JSON response
    pub async fn send(&self, message: &Message) -> PushResult<Value> {
        message.validate()?;
        let body = create_message_body(&self.session, message);

        tracing::debug!(endpoint = %self.endpoint, body = %body, "posting createMessage request");

        let response = self
            .client
            .post(&self.endpoint)
            .headers(json_headers())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let parsed: Value = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Convenience method building the [`Message`] inline
    pub async fn send_message(&self, content: &str, devices: &[String]) -> PushResult<Value> {
        self.send(&Message::new(content, devices.to_vec())).await
    }

    /// Session this client was built from
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Endpoint URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn validate_endpoint(endpoint: &str) -> PushResult<()> {
    Url::parse(endpoint).map_err(|e| PushError::InvalidEndpoint {
        url: endpoint.to_string(),
        source: Some(Box::new(e)),
    })?;
    Ok(())
}

/// Turn the session's proxy setting into a reqwest proxy route
///
/// A session without a proxy pins the direct path so ambient proxy
/// environment variables cannot reroute it.
fn session_proxy(session: &Session) -> PushResult<Option<Proxy>> {
    match session.proxy() {
        Some(raw) => {
            let proxy = Proxy::all(raw).map_err(|e| PushError::InvalidProxy {
                url: raw.to_string(),
                source: Some(Box::new(e)),
            })?;
            Ok(Some(proxy))
        }
        None => Ok(None),
    }
}
