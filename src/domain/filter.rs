//! List filter values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The subset of emails the backend should return for a list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailFilter {
    /// Every email.
    #[default]
    All,
    /// Emails not yet read.
    Unread,
    /// Archived emails.
    Archived,
}

impl EmailFilter {
    /// Returns the query-parameter value the backend expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailFilter::All => "all",
            EmailFilter::Unread => "unread",
            EmailFilter::Archived => "archived",
        }
    }
}

impl fmt::Display for EmailFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
