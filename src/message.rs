//! Notification payload and createMessage wire body

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{PushError, PushResult};
use crate::session::Session;

/// A notification to deliver to a set of device tokens
///
/// Device order is preserved in the outgoing payload; duplicates are
/// permitted and left to the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub devices: Vec<String>,
}

impl Message {
    pub fn new(content: impl Into<String>, devices: Vec<String>) -> Self {
        Self {
            content: content.into(),
            devices,
        }
    }

    /// Check the payload before any network traffic happens
    pub fn validate(&self) -> PushResult<()> {
        if self.content.is_empty() {
            return Err(PushError::invalid_argument("content", "cannot be empty"));
        }
        if self.devices.is_empty() {
            return Err(PushError::invalid_argument(
                "devices",
                "at least one device token is required",
            ));
        }
        if self.devices.iter().any(|token| token.is_empty()) {
            return Err(PushError::invalid_argument(
                "devices",
                "device tokens cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Build the createMessage request body
///
/// The notification is always scheduled immediately (`send_date: "now"`)
/// and ignores user timezones, per the remote API contract for immediate
/// sends.
pub fn create_message_body(session: &Session, message: &Message) -> Value {
    serde_json::json!({
        "request": {
            "application": session.application_code(),
            "auth": session.access_token(),
            "notifications": [{
                "send_date": "now",
                "ignore_user_timezone": true,
                "content": message.content,
                "devices": message.devices,
            }]
        }
    })
}
