//! Mailbox service for orchestrating backend operations.
//!
//! The [`MailboxService`] is the only place that calls the backend. Each
//! method maps one UI intent to exactly one API call and returns the
//! server-confirmed record; local state is updated by the caller only after
//! the response arrives. There are no optimistic updates and no rollback
//! path.

use std::sync::Arc;

use crate::api::{EmailPatch, MailApi, NewEmail, Result};
use crate::domain::{duplicate_ids, Email, EmailFilter, EmailId};

/// Orchestrates mailbox operations against the backend.
pub struct MailboxService {
    /// Backend client.
    api: Arc<dyn MailApi>,
}

impl MailboxService {
    /// Creates a service over the given backend client.
    pub fn new(api: Arc<dyn MailApi>) -> Self {
        Self { api }
    }

    /// Loads the email collection for a filter.
    ///
    /// The collection is returned exactly as the backend delivered it; the
    /// client never re-sorts or re-filters. Duplicate identifiers are logged.
    pub async fn load(&self, filter: EmailFilter) -> Result<Vec<Email>> {
        let emails = self.api.list(filter).await?;

        let dupes = duplicate_ids(&emails);
        if !dupes.is_empty() {
            tracing::warn!(filter = %filter, ?dupes, "backend returned duplicate email ids");
        }

        tracing::debug!(filter = %filter, count = emails.len(), "loaded emails");
        Ok(emails)
    }

    /// Fetches a single email by id.
    pub async fn fetch(&self, id: EmailId) -> Result<Email> {
        self.api.get(id).await
    }

    /// Sets the read flag and returns the updated record.
    pub async fn set_read(&self, id: EmailId, is_read: bool) -> Result<Email> {
        self.api.update(id, &EmailPatch::read(is_read)).await
    }

    /// Sets the archived flag and returns the updated record.
    pub async fn set_archived(&self, id: EmailId, is_archived: bool) -> Result<Email> {
        self.api.update(id, &EmailPatch::archived(is_archived)).await
    }

    /// Creates a new email and returns the server-assigned record.
    pub async fn send(&self, draft: NewEmail) -> Result<Email> {
        self.api.create(&draft).await
    }

    /// Deletes an email.
    pub async fn discard(&self, id: EmailId) -> Result<()> {
        self.api.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::domain::{Recipient, Sender};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Api {}

        #[async_trait]
        impl MailApi for Api {
            async fn list(&self, filter: EmailFilter) -> Result<Vec<Email>>;
            async fn get(&self, id: EmailId) -> Result<Email>;
            async fn create(&self, draft: &NewEmail) -> Result<Email>;
            async fn update(&self, id: EmailId, patch: &EmailPatch) -> Result<Email>;
            async fn delete(&self, id: EmailId) -> Result<()>;
        }
    }

    fn sample_email(id: i64) -> Email {
        Email {
            id: EmailId(id),
            sender: Sender {
                name: "Alice Smith".to_string(),
                email: "alice@example.com".to_string(),
                avatar: None,
            },
            recipient: Recipient::new("John Smith", "john@business.com"),
            subject: "Hello".to_string(),
            preview: "Hello there".to_string(),
            body: "Hello there".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 30, 8, 30, 0).unwrap(),
            is_read: false,
            is_archived: false,
            attachments: vec![],
        }
    }

    #[test]
    fn load_passes_filter_through() {
        let mut api = MockApi::new();
        api.expect_list()
            .with(eq(EmailFilter::Unread))
            .times(1)
            .returning(|_| Ok(vec![sample_email(1)]));

        let service = MailboxService::new(Arc::new(api));
        let emails = tokio_test::block_on(service.load(EmailFilter::Unread)).unwrap();
        assert_eq!(emails.len(), 1);
    }

    #[test]
    fn set_read_sends_partial_patch() {
        let mut api = MockApi::new();
        api.expect_update()
            .withf(|id, patch| {
                *id == EmailId(3) && *patch == EmailPatch::read(true)
            })
            .times(1)
            .returning(|id, _| {
                let mut email = sample_email(id.0);
                email.is_read = true;
                Ok(email)
            });

        let service = MailboxService::new(Arc::new(api));
        let updated = tokio_test::block_on(service.set_read(EmailId(3), true)).unwrap();
        assert!(updated.is_read);
    }

    #[test]
    fn set_archived_sends_partial_patch() {
        let mut api = MockApi::new();
        api.expect_update()
            .withf(|id, patch| {
                *id == EmailId(5) && *patch == EmailPatch::archived(true)
            })
            .times(1)
            .returning(|id, _| {
                let mut email = sample_email(id.0);
                email.is_archived = true;
                Ok(email)
            });

        let service = MailboxService::new(Arc::new(api));
        let updated = tokio_test::block_on(service.set_archived(EmailId(5), true)).unwrap();
        assert!(updated.is_archived);
    }

    #[test]
    fn send_forwards_draft() {
        let draft = NewEmail {
            recipient_name: "Jane Doe".to_string(),
            recipient_email: "jane@business.com".to_string(),
            subject: "Proposal".to_string(),
            body: "Please review".to_string(),
        };

        let mut api = MockApi::new();
        let expected = draft.clone();
        api.expect_create()
            .withf(move |d| *d == expected)
            .times(1)
            .returning(|_| Ok(sample_email(9)));

        let service = MailboxService::new(Arc::new(api));
        let created = tokio_test::block_on(service.send(draft)).unwrap();
        assert_eq!(created.id, EmailId(9));
    }

    #[test]
    fn load_propagates_backend_errors() {
        let mut api = MockApi::new();
        api.expect_list()
            .returning(|_| Err(ApiError::Connection("refused".to_string())));

        let service = MailboxService::new(Arc::new(api));
        let result = tokio_test::block_on(service.load(EmailFilter::All));
        assert!(result.is_err());
    }
}
