//! Reusable UI components.
//!
//! This module contains atomic UI components used throughout the application.
//! Components are designed to be stateless where possible, with styling
//! driven by the theme system.

pub mod avatar;
pub mod badge;
pub mod button;
pub mod icon;
pub mod input;

pub use avatar::{color_for_name, initials, palette_index, Avatar, AvatarSize};
pub use badge::DotIndicator;
pub use button::{Button, ButtonSize, ButtonVariant, IconButton};
pub use icon::{Icon, IconName, IconSize};
pub use input::{KeyInputResult, TextArea, TextBuffer, TextInput};
