//! Mail backend trait definition.
//!
//! [`MailApi`] abstracts the REST backend so the UI and service layers never
//! depend on a concrete HTTP client. The production implementation is
//! [`RestMailApi`](super::RestMailApi); tests substitute a mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Email, EmailFilter, EmailId};

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or connection error before a response arrived.
    #[error("connection error: {0}")]
    Connection(String),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend rejected the request with a non-success status.
    #[error("request failed ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Payload for creating a new email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmail {
    /// Recipient display name.
    pub recipient_name: String,
    /// Recipient email address.
    pub recipient_email: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
}

/// Partial update to an email's flags.
///
/// Only the fields that are `Some` are serialized, so the backend sees a
/// genuinely partial body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPatch {
    /// New read state, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    /// New archived state, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

impl EmailPatch {
    /// A patch that only sets the read flag.
    pub fn read(is_read: bool) -> Self {
        Self {
            is_read: Some(is_read),
            is_archived: None,
        }
    }

    /// A patch that only sets the archived flag.
    pub fn archived(is_archived: bool) -> Self {
        Self {
            is_read: None,
            is_archived: Some(is_archived),
        }
    }
}

/// The operations the mail backend exposes.
///
/// `get` and `delete` are part of the backend contract but are not invoked by
/// the current UI.
#[async_trait]
pub trait MailApi: Send + Sync {
    /// Fetches the email collection for a filter, in backend order.
    async fn list(&self, filter: EmailFilter) -> Result<Vec<Email>>;

    /// Fetches a single email by id.
    async fn get(&self, id: EmailId) -> Result<Email>;

    /// Creates a new email and returns the server-assigned record.
    async fn create(&self, draft: &NewEmail) -> Result<Email>;

    /// Applies a partial flag update and returns the full updated record.
    async fn update(&self, id: EmailId, patch: &EmailPatch) -> Result<Email>;

    /// Deletes an email.
    async fn delete(&self, id: EmailId) -> Result<()>;
}
