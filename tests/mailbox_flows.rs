//! Integration tests for the mailbox flows.
//!
//! Drives the service and state layers together through the same sequences
//! the main window dispatches, using a recording backend double to assert
//! exactly which requests each flow issues.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use cusana::api::{ApiError, EmailPatch, MailApi, NewEmail, Result};
use cusana::app::InboxState;
use cusana::domain::{Email, EmailFilter, EmailId, Recipient, Sender};
use cusana::services::MailboxService;

/// One recorded backend request.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    List(EmailFilter),
    Update(EmailId, EmailPatch),
    Create(NewEmail),
}

/// Backend double that records requests and serves from an in-memory table.
struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    emails: Mutex<Vec<Email>>,
}

impl RecordingApi {
    fn with_emails(emails: Vec<Email>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            emails: Mutex::new(emails),
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailApi for RecordingApi {
    async fn list(&self, filter: EmailFilter) -> Result<Vec<Email>> {
        self.calls.lock().unwrap().push(Call::List(filter));
        let emails = self.emails.lock().unwrap();
        let filtered = emails
            .iter()
            .filter(|e| match filter {
                EmailFilter::All => true,
                EmailFilter::Unread => !e.is_read,
                EmailFilter::Archived => e.is_archived,
            })
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn get(&self, id: EmailId) -> Result<Email> {
        let emails = self.emails.lock().unwrap();
        emails
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: &NewEmail) -> Result<Email> {
        self.calls.lock().unwrap().push(Call::Create(draft.clone()));
        let mut emails = self.emails.lock().unwrap();
        let id = emails.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        let created = Email {
            id: EmailId(id),
            sender: Sender {
                name: "Richard Brown".to_string(),
                email: "richard.brown@business.com".to_string(),
                avatar: None,
            },
            recipient: Recipient::new(&draft.recipient_name, &draft.recipient_email),
            subject: draft.subject.clone(),
            preview: draft.body.chars().take(80).collect(),
            body: draft.body.clone(),
            date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            is_read: true,
            is_archived: false,
            attachments: vec![],
        };
        emails.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: EmailId, patch: &EmailPatch) -> Result<Email> {
        self.calls.lock().unwrap().push(Call::Update(id, *patch));
        let mut emails = self.emails.lock().unwrap();
        let email = emails
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        if let Some(is_read) = patch.is_read {
            email.is_read = is_read;
        }
        if let Some(is_archived) = patch.is_archived {
            email.is_archived = is_archived;
        }
        Ok(email.clone())
    }

    async fn delete(&self, id: EmailId) -> Result<()> {
        let mut emails = self.emails.lock().unwrap();
        emails.retain(|e| e.id != id);
        Ok(())
    }
}

fn email(id: i64, is_read: bool, is_archived: bool) -> Email {
    Email {
        id: EmailId(id),
        sender: Sender {
            name: format!("Sender {id}"),
            email: format!("sender{id}@example.com"),
            avatar: None,
        },
        recipient: Recipient::new("John Smith", "john@business.com"),
        subject: format!("Subject {id}"),
        preview: "Preview".to_string(),
        body: "Body".to_string(),
        date: Utc.with_ymd_and_hms(2024, 5, 30, 8, 30, 0).unwrap(),
        is_read,
        is_archived,
        attachments: vec![],
    }
}

/// Runs the load flow the way the main window does: begin, fetch, apply.
async fn load(
    state: &mut InboxState,
    service: &MailboxService,
    filter: EmailFilter,
) -> bool {
    let generation = state.begin_load(filter);
    let emails = service.load(filter).await.unwrap();
    state.apply_loaded(generation, emails)
}

#[tokio::test]
async fn filter_switch_issues_one_list_request_and_replaces_collection() {
    let api = RecordingApi::with_emails(vec![
        email(1, true, false),
        email(2, false, false),
        email(3, true, true),
    ]);
    let service = MailboxService::new(api.clone());
    let mut state = InboxState::new();

    assert!(load(&mut state, &service, EmailFilter::All).await);
    assert_eq!(state.emails.len(), 3);

    assert!(load(&mut state, &service, EmailFilter::Unread).await);

    // Exactly one request per filter change, and the collection is the
    // response alone, not a merge.
    assert_eq!(
        api.calls(),
        vec![Call::List(EmailFilter::All), Call::List(EmailFilter::Unread)]
    );
    assert_eq!(state.emails.len(), 1);
    assert_eq!(state.emails[0].id, EmailId(2));
}

#[tokio::test]
async fn selecting_unread_email_issues_exactly_one_mark_read() {
    let api = RecordingApi::with_emails(vec![email(1, false, false), email(2, true, false)]);
    let service = MailboxService::new(api.clone());
    let mut state = InboxState::new();
    load(&mut state, &service, EmailFilter::All).await;
    let list_calls = api.calls().len();

    // Selecting the unread email issues one update flipping is_read.
    if state.select(EmailId(1)) {
        let updated = service.set_read(EmailId(1), true).await.unwrap();
        assert!(updated.is_read);
        state.patch_email(updated);
    }

    let calls = api.calls();
    assert_eq!(calls.len(), list_calls + 1);
    assert_eq!(
        calls[list_calls],
        Call::Update(EmailId(1), EmailPatch::read(true))
    );
    assert!(state.email(EmailId(1)).unwrap().is_read);

    // Selecting an already-read email issues nothing.
    if state.select(EmailId(2)) {
        panic!("read email must not trigger a mark-read update");
    }
    assert_eq!(api.calls().len(), list_calls + 1);
}

#[tokio::test]
async fn archive_toggle_flips_only_the_archived_flag() {
    let api = RecordingApi::with_emails(vec![email(1, true, false)]);
    let service = MailboxService::new(api.clone());
    let mut state = InboxState::new();
    load(&mut state, &service, EmailFilter::All).await;

    let before = state.email(EmailId(1)).unwrap().clone();
    let target = !before.is_archived;
    let updated = service.set_archived(EmailId(1), target).await.unwrap();
    state.patch_email(updated);

    let after = state.email(EmailId(1)).unwrap().clone();
    assert!(after.is_archived);

    // Every other field is identical to the record before the toggle.
    let mut expected = before;
    expected.is_archived = true;
    assert_eq!(after, expected);
}

#[tokio::test]
async fn created_email_is_prepended_and_selected() {
    let api = RecordingApi::with_emails(vec![email(1, true, false)]);
    let service = MailboxService::new(api.clone());
    let mut state = InboxState::new();
    load(&mut state, &service, EmailFilter::All).await;
    state.open_compose();

    let draft = NewEmail {
        recipient_name: "Jane Doe".to_string(),
        recipient_email: "jane.doe@business.com".to_string(),
        subject: "Partnership".to_string(),
        body: "Hi Jane".to_string(),
    };
    let created = service.send(draft.clone()).await.unwrap();
    let created_id = created.id;
    state.insert_created(created);

    assert_eq!(api.calls().last(), Some(&Call::Create(draft)));
    assert_eq!(state.emails[0].id, created_id);
    assert_eq!(state.selected_id, Some(created_id));
    assert!(!state.compose_open);
}

#[tokio::test]
async fn stale_list_response_does_not_overwrite_newer_one() {
    let api = RecordingApi::with_emails(vec![email(1, true, false), email(2, false, false)]);
    let service = MailboxService::new(api.clone());
    let mut state = InboxState::new();

    // A slow "all" load is superseded by an "unread" load before it lands.
    let slow_generation = state.begin_load(EmailFilter::All);
    let slow_response = service.load(EmailFilter::All).await.unwrap();

    let fast_generation = state.begin_load(EmailFilter::Unread);
    let fast_response = service.load(EmailFilter::Unread).await.unwrap();

    assert!(state.apply_loaded(fast_generation, fast_response));
    assert!(!state.apply_loaded(slow_generation, slow_response));

    assert_eq!(state.active_filter, EmailFilter::Unread);
    assert_eq!(state.emails.len(), 1);
    assert_eq!(state.emails[0].id, EmailId(2));
}

#[tokio::test]
async fn loaded_collections_have_unique_ids() {
    let api = RecordingApi::with_emails(vec![
        email(1, true, false),
        email(2, false, false),
        email(3, true, true),
    ]);
    let service = MailboxService::new(api.clone());

    for filter in [EmailFilter::All, EmailFilter::Unread, EmailFilter::Archived] {
        let emails = service.load(filter).await.unwrap();
        let mut ids: Vec<_> = emails.iter().map(|e| e.id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), emails.len());
    }
}
