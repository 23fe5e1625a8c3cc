//! Intent events flowing from child views to the root controller.
//!
//! Each view emits a closed set of intent variants; [`MainWindow`] is the
//! single dispatch point that matches on them and performs the corresponding
//! backend call and state update.
//!
//! [`MainWindow`]: crate::ui::MainWindow

use crate::api::NewEmail;
use crate::domain::{EmailFilter, EmailId};

/// Intents emitted by the email list panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// A row was clicked.
    Select(EmailId),
    /// A filter tab was clicked.
    FilterChanged(EmailFilter),
    /// A row's archive control was clicked.
    ToggleArchive(EmailId),
}

/// Intents emitted by the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    /// The mark-read action button was clicked.
    ToggleRead(EmailId),
    /// The archive action button was clicked.
    ToggleArchive(EmailId),
}

/// Intents emitted by the compose modal.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeEvent {
    /// The form was submitted with trimmed, validated fields.
    Submit(NewEmail),
    /// The modal was dismissed without sending.
    Dismiss,
}

/// Intents emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The collapse toggle was clicked.
    ToggleCollapse,
}
