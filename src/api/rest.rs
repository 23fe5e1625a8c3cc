//! HTTP implementation of the mail backend client.
//!
//! Talks to the backend's JSON REST interface:
//!
//! - `GET /emails?filter={all|unread|archived}` for listing
//! - `GET /emails/{id}` for a single record
//! - `POST /emails` for creation
//! - `PUT /emails/{id}` for partial flag updates
//! - `DELETE /emails/{id}` for deletion

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ApiError, EmailPatch, MailApi, NewEmail, Result};
use crate::config::Config;
use crate::domain::{Email, EmailFilter, EmailId};

/// List response envelope.
#[derive(Debug, Deserialize)]
struct ListResponse {
    emails: Vec<Email>,
}

/// REST client for the mail backend.
///
/// Each call performs a single request against the configured base URL and
/// decodes the JSON response into domain types.
pub struct RestMailApi {
    /// HTTP client for API requests.
    client: reqwest::Client,
    /// Backend base URL without a trailing slash.
    base_url: String,
}

impl RestMailApi {
    /// Creates a client for the backend named in the configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// Makes a GET request and decodes the JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON response.
    async fn post_json<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Makes a PUT request with a JSON body and decodes the JSON response.
    async fn put_json<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Makes a DELETE request, discarding any response body.
    async fn delete_path(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::handle_error(response).await);
        }
        Ok(())
    }

    /// Handles a response, checking the status before decoding.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::handle_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Maps an error response to an [`ApiError`].
    async fn handle_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            404 => ApiError::NotFound(body),
            _ => ApiError::Status {
                status: status.as_u16(),
                body,
            },
        }
    }
}

#[async_trait]
impl MailApi for RestMailApi {
    async fn list(&self, filter: EmailFilter) -> Result<Vec<Email>> {
        let response: ListResponse = self
            .get_json("/emails", &[("filter", filter.as_str())])
            .await?;
        Ok(response.emails)
    }

    async fn get(&self, id: EmailId) -> Result<Email> {
        self.get_json(&format!("/emails/{id}"), &[]).await
    }

    async fn create(&self, draft: &NewEmail) -> Result<Email> {
        self.post_json("/emails", draft).await
    }

    async fn update(&self, id: EmailId, patch: &EmailPatch) -> Result<Email> {
        self.put_json(&format!("/emails/{id}"), patch).await
    }

    async fn delete(&self, id: EmailId) -> Result<()> {
        self.delete_path(&format!("/emails/{id}")).await
    }
}
