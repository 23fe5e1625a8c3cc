//! Backend REST client.
//!
//! This module contains the [`MailApi`] trait and its HTTP implementation.
//! The trait abstracts the five operations the backend exposes so the service
//! layer and tests can work against a mock instead of a live server.
//!
//! Every operation performs exactly one HTTP round trip: no retries, no
//! timeouts, no caching. Failures surface as [`ApiError`] values; the layers
//! above log them without branching on the variant.

mod rest;
mod traits;

pub use rest::RestMailApi;
pub use traits::{ApiError, EmailPatch, MailApi, NewEmail, Result};
