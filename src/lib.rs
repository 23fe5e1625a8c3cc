//! cusana - A desktop client for the Cusana mail service
//!
//! This crate provides the core functionality for the Cusana desktop client,
//! including the REST backend client, the mailbox service layer, and the
//! gpui-based user interface.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod services;
pub mod ui;

pub use app::App;
