//! Business services layer.
//!
//! Services sit between the UI layer and the backend client:
//!
//! ```text
//! UI (views, intents)
//!        |
//!        v
//!  Services layer   <-- You are here
//!        |
//!        v
//!  Backend client (MailApi)
//! ```
//!
//! - [`MailboxService`]: performs the mailbox operations the root view
//!   dispatches, one backend call per operation.

mod mailbox_service;

pub use mailbox_service::MailboxService;
