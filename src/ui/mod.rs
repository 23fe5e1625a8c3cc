//! UI components and views
//!
//! This module contains the gpui-based user interface for cusana.
//! The UI is organized into:
//! - `theme`: Color palette and styling
//! - `format`: Timestamp formatting shared by the list and detail panes
//! - `components`: Reusable UI primitives
//! - `views`: Full-screen application views

pub mod components;
pub mod format;
pub mod theme;
pub mod views;

pub use theme::ThemeColors;
pub use views::MainWindow;
