//! Thin Rust client for the Pushwoosh `createMessage` remote API
//!
//! This library builds the JSON request describing a notification and its
//! target device tokens, POSTs it over HTTPS to the fixed endpoint, and
//! returns the parsed JSON response to the caller. Credentials and an
//! optional proxy live in an immutable [`Session`] that can be reused
//! across any number of sends.

pub mod client;
pub mod errors;
pub mod message;
pub mod session;

// Re-export commonly used types for convenience
pub use client::{AsyncPushwooshClient, PushwooshClient, CREATE_MESSAGE_ENDPOINT};
pub use errors::{PushError, PushResult};
pub use message::{create_message_body, Message};
pub use session::{system_proxy, Session};
