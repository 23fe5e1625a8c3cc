//! Email domain types.
//!
//! Represents email records exactly as the backend serializes them. These
//! types are the wire format: the client never derives or recomputes fields
//! (previews, sizes) that the backend already supplies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AttachmentId, EmailId};

/// An email record as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    /// Unique identifier assigned by the backend.
    pub id: EmailId,
    /// Sender address and display name.
    pub sender: Sender,
    /// Recipient address and display name.
    pub recipient: Recipient,
    /// Subject line.
    pub subject: String,
    /// Short excerpt of the body shown in list rows, supplied by the backend.
    pub preview: String,
    /// Full body text. Newlines delimit paragraphs.
    pub body: String,
    /// Date and time the email was sent.
    pub date: DateTime<Utc>,
    /// Whether the email has been read.
    pub is_read: bool,
    /// Whether the email is archived.
    pub is_archived: bool,
    /// File attachments, in backend order.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// The originating address of an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Display name (e.g., "Jane Doe").
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar image reference. Present in the wire format but unused by
    /// rendering, which always synthesizes an initials badge.
    pub avatar: Option<String>,
}

/// The destination address of an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl Recipient {
    /// Creates a recipient with a name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<&Sender> for Recipient {
    fn from(sender: &Sender) -> Self {
        Self {
            name: sender.name.clone(),
            email: sender.email.clone(),
        }
    }
}

/// A file attachment on an email. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique identifier assigned by the backend.
    pub id: AttachmentId,
    /// Original filename.
    pub filename: String,
    /// Human-readable size string, supplied by the backend (e.g., "1.2 MB").
    pub size: String,
    /// Download URL.
    pub url: String,
}

/// Returns the ids that appear more than once in a collection.
///
/// Identifier uniqueness is the one invariant the client checks on a loaded
/// collection; violations are logged, never repaired.
pub fn duplicate_ids(emails: &[Email]) -> Vec<EmailId> {
    let mut seen = std::collections::HashSet::new();
    let mut dupes = Vec::new();
    for email in emails {
        if !seen.insert(email.id) && !dupes.contains(&email.id) {
            dupes.push(email.id);
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_email(id: i64) -> Email {
        Email {
            id: EmailId(id),
            sender: Sender {
                name: "Alice Smith".to_string(),
                email: "alice@example.com".to_string(),
                avatar: None,
            },
            recipient: Recipient::new("John Smith", "john@business.com"),
            subject: "Quarterly report".to_string(),
            preview: "Here is the report you asked for...".to_string(),
            body: "Here is the report you asked for.\n\nBest,\nAlice".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 30, 8, 30, 0).unwrap(),
            is_read: false,
            is_archived: false,
            attachments: vec![],
        }
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": 1,
            "sender": {"name": "Alice Smith", "email": "alice@example.com", "avatar": null},
            "recipient": {"name": "John Smith", "email": "john@business.com"},
            "subject": "Quarterly report",
            "preview": "Here is the report...",
            "body": "Here is the report.",
            "date": "2024-05-30T08:30:00Z",
            "is_read": false,
            "is_archived": false,
            "attachments": [
                {"id": 9, "filename": "report.pdf", "size": "2.3 MB", "url": "/files/report.pdf"}
            ]
        }"#;

        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.id, EmailId(1));
        assert_eq!(email.sender.name, "Alice Smith");
        assert_eq!(email.sender.avatar, None);
        assert_eq!(email.attachments.len(), 1);
        assert_eq!(email.attachments[0].size, "2.3 MB");
    }

    #[test]
    fn attachments_default_to_empty() {
        let json = r#"{
            "id": 2,
            "sender": {"name": "Bob", "email": "bob@example.com", "avatar": null},
            "recipient": {"name": "John", "email": "john@business.com"},
            "subject": "Hi",
            "preview": "Hi",
            "body": "Hi",
            "date": "2024-05-30T08:30:00Z",
            "is_read": true,
            "is_archived": false
        }"#;

        let email: Email = serde_json::from_str(json).unwrap();
        assert!(email.attachments.is_empty());
    }

    #[test]
    fn recipient_from_sender() {
        let sender = Sender {
            name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            avatar: Some("avatar.png".to_string()),
        };
        let recipient = Recipient::from(&sender);
        assert_eq!(recipient.name, "Alice Smith");
        assert_eq!(recipient.email, "alice@example.com");
    }

    #[test]
    fn duplicate_ids_reports_repeats_once() {
        let mut emails = vec![sample_email(1), sample_email(2), sample_email(1)];
        emails.push(sample_email(1));

        assert_eq!(duplicate_ids(&emails), vec![EmailId(1)]);
    }

    #[test]
    fn duplicate_ids_empty_for_unique_collection() {
        let emails = vec![sample_email(1), sample_email(2), sample_email(3)];
        assert!(duplicate_ids(&emails).is_empty());
    }
}
