//! Client-side mailbox state.
//!
//! [`InboxState`] is the single owned state object behind the root view: the
//! loaded email collection, the selection, the active filter, and the two UI
//! flags. It is mutated only through the update functions below, and only in
//! response to completed backend calls or local-only UI events.
//!
//! The collection is a transient projection of the last fetch: it is replaced
//! wholesale when a load completes and patched in place when the backend
//! confirms a flag update or creation. Nothing survives a restart.

use crate::domain::{Email, EmailFilter, EmailId};

/// Root view state for the mailbox.
#[derive(Debug, Clone, Default)]
pub struct InboxState {
    /// The loaded email collection, in backend order.
    pub emails: Vec<Email>,
    /// Currently selected email, if any.
    pub selected_id: Option<EmailId>,
    /// Filter the collection was (or is being) loaded for.
    pub active_filter: EmailFilter,
    /// Whether the sidebar is collapsed to a rail.
    pub sidebar_collapsed: bool,
    /// Whether the compose modal is open.
    pub compose_open: bool,
    /// Generation counter for list loads; responses from older generations
    /// are discarded so a slow earlier request cannot overwrite a newer one.
    load_generation: u64,
}

impl InboxState {
    /// Creates an empty state with the default filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load for the given filter and returns its generation token.
    pub fn begin_load(&mut self, filter: EmailFilter) -> u64 {
        self.active_filter = filter;
        self.load_generation += 1;
        self.load_generation
    }

    /// Applies a completed load.
    ///
    /// Returns `false` without touching the collection when the response
    /// belongs to a superseded load. Otherwise the collection is replaced
    /// wholesale (no merge with prior data) and the selection is fixed up:
    /// kept if the selected id is still present, otherwise moved to the first
    /// email, or cleared when the collection is empty.
    pub fn apply_loaded(&mut self, generation: u64, emails: Vec<Email>) -> bool {
        if generation != self.load_generation {
            return false;
        }

        self.emails = emails;

        let selection_valid = self
            .selected_id
            .is_some_and(|id| self.emails.iter().any(|e| e.id == id));
        if !selection_valid {
            self.selected_id = self.emails.first().map(|e| e.id);
        }
        true
    }

    /// Selects an email.
    ///
    /// Returns `true` when the selection should be followed by a mark-read
    /// update, i.e. exactly when the email exists and is unread.
    pub fn select(&mut self, id: EmailId) -> bool {
        let Some(email) = self.email(id) else {
            return false;
        };
        let needs_mark_read = !email.is_read;
        self.selected_id = Some(id);
        needs_mark_read
    }

    /// Replaces a record with its server-confirmed version, preserving order.
    ///
    /// Returns `false` when no record with the updated id is loaded.
    pub fn patch_email(&mut self, updated: Email) -> bool {
        match self.emails.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Prepends a newly created record and selects it.
    pub fn insert_created(&mut self, email: Email) {
        self.selected_id = Some(email.id);
        self.emails.insert(0, email);
        self.compose_open = false;
    }

    /// Looks up a loaded email by id.
    pub fn email(&self, id: EmailId) -> Option<&Email> {
        self.emails.iter().find(|e| e.id == id)
    }

    /// The currently selected email, if it is still loaded.
    pub fn selected_email(&self) -> Option<&Email> {
        self.selected_id.and_then(|id| self.email(id))
    }

    /// Toggles the sidebar between full and rail width.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Opens the compose modal.
    pub fn open_compose(&mut self) {
        self.compose_open = true;
    }

    /// Closes the compose modal.
    pub fn close_compose(&mut self) {
        self.compose_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Recipient, Sender};
    use chrono::{TimeZone, Utc};

    fn email(id: i64, is_read: bool) -> Email {
        Email {
            id: EmailId(id),
            sender: Sender {
                name: "Alice Smith".to_string(),
                email: "alice@example.com".to_string(),
                avatar: None,
            },
            recipient: Recipient::new("John Smith", "john@business.com"),
            subject: format!("Subject {id}"),
            preview: "Preview".to_string(),
            body: "Body".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 30, 8, 30, 0).unwrap(),
            is_read,
            is_archived: false,
            attachments: vec![],
        }
    }

    #[test]
    fn load_replaces_collection_wholesale() {
        let mut state = InboxState::new();
        let gen = state.begin_load(EmailFilter::All);
        assert!(state.apply_loaded(gen, vec![email(1, true), email(2, false)]));

        let gen = state.begin_load(EmailFilter::Unread);
        assert!(state.apply_loaded(gen, vec![email(3, false)]));

        // No merge with prior data.
        assert_eq!(state.emails.len(), 1);
        assert_eq!(state.emails[0].id, EmailId(3));
        assert_eq!(state.active_filter, EmailFilter::Unread);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut state = InboxState::new();
        let slow = state.begin_load(EmailFilter::All);
        let fast = state.begin_load(EmailFilter::Unread);

        assert!(state.apply_loaded(fast, vec![email(2, false)]));
        // The slower earlier response arrives afterwards and must not win.
        assert!(!state.apply_loaded(slow, vec![email(1, true)]));

        assert_eq!(state.emails.len(), 1);
        assert_eq!(state.emails[0].id, EmailId(2));
    }

    #[test]
    fn load_selects_first_when_selection_missing() {
        let mut state = InboxState::new();
        let gen = state.begin_load(EmailFilter::All);
        state.apply_loaded(gen, vec![email(1, true), email(2, true)]);
        assert_eq!(state.selected_id, Some(EmailId(1)));

        state.select(EmailId(2));
        let gen = state.begin_load(EmailFilter::Archived);
        state.apply_loaded(gen, vec![email(2, true), email(3, true)]);

        // Selection survives because the email is still present.
        assert_eq!(state.selected_id, Some(EmailId(2)));

        let gen = state.begin_load(EmailFilter::Unread);
        state.apply_loaded(gen, vec![email(5, false)]);
        assert_eq!(state.selected_id, Some(EmailId(5)));

        let gen = state.begin_load(EmailFilter::Archived);
        state.apply_loaded(gen, vec![]);
        assert_eq!(state.selected_id, None);
    }

    #[test]
    fn select_requests_mark_read_only_when_unread() {
        let mut state = InboxState::new();
        let gen = state.begin_load(EmailFilter::All);
        state.apply_loaded(gen, vec![email(1, false), email(2, true)]);

        assert!(state.select(EmailId(1)));
        assert!(!state.select(EmailId(2)));
        assert!(!state.select(EmailId(99)));
        assert_eq!(state.selected_id, Some(EmailId(2)));
    }

    #[test]
    fn patch_replaces_record_in_place() {
        let mut state = InboxState::new();
        let gen = state.begin_load(EmailFilter::All);
        state.apply_loaded(gen, vec![email(1, false), email(2, false)]);

        let mut updated = email(1, false);
        updated.is_archived = true;
        assert!(state.patch_email(updated));

        assert_eq!(state.emails[0].id, EmailId(1));
        assert!(state.emails[0].is_archived);
        // Other fields and the neighboring record are untouched.
        assert_eq!(state.emails[0].subject, "Subject 1");
        assert!(!state.emails[1].is_archived);
    }

    #[test]
    fn patch_ignores_unknown_ids() {
        let mut state = InboxState::new();
        let gen = state.begin_load(EmailFilter::All);
        state.apply_loaded(gen, vec![email(1, false)]);

        assert!(!state.patch_email(email(7, true)));
        assert_eq!(state.emails.len(), 1);
    }

    #[test]
    fn created_email_is_prepended_and_selected() {
        let mut state = InboxState::new();
        let gen = state.begin_load(EmailFilter::All);
        state.apply_loaded(gen, vec![email(1, true)]);
        state.open_compose();

        state.insert_created(email(9, true));

        assert_eq!(state.emails[0].id, EmailId(9));
        assert_eq!(state.emails.len(), 2);
        assert_eq!(state.selected_id, Some(EmailId(9)));
        assert!(!state.compose_open);
    }

    #[test]
    fn ui_flags_toggle() {
        let mut state = InboxState::new();
        assert!(!state.sidebar_collapsed);
        state.toggle_sidebar();
        assert!(state.sidebar_collapsed);

        state.open_compose();
        assert!(state.compose_open);
        state.close_compose();
        assert!(!state.compose_open);
    }
}
