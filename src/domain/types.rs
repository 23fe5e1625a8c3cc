//! Core identifier types for domain entities.
//!
//! These newtype wrappers provide type safety for entity identifiers,
//! preventing accidental mixing of different ID types. The backend assigns
//! numeric row ids, so both wrap an `i64`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an email record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailId(pub i64);

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmailId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentId(pub i64);

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AttachmentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_id_display() {
        let id = EmailId(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn email_id_equality() {
        let id1 = EmailId::from(7);
        let id2 = EmailId(7);
        assert_eq!(id1, id2);
    }

    #[test]
    fn email_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(EmailId(1));
        assert!(set.contains(&EmailId(1)));
        assert!(!set.contains(&EmailId(2)));
    }

    #[test]
    fn attachment_id_serializes_as_number() {
        let json = serde_json::to_string(&AttachmentId(3)).unwrap();
        assert_eq!(json, "3");
    }
}
