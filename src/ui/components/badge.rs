//! Badge component.
//!
//! Small status indicators attached to rows and icons.

use gpui::{div, px, Hsla, IntoElement, RenderOnce, Styled};

use crate::ui::theme::ThemeColors;

/// A small colored dot, used to flag unread rows.
#[derive(IntoElement)]
pub struct DotIndicator {
    color: Option<Hsla>,
    size: f32,
}

impl Default for DotIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl DotIndicator {
    /// Create a dot in the unread accent color.
    pub fn new() -> Self {
        Self {
            color: None,
            size: 8.0,
        }
    }

    /// Set a custom dot color.
    pub fn color(mut self, color: Hsla) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the dot diameter in pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for DotIndicator {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::light();
        let color = self.color.unwrap_or(colors.unread);

        div()
            .size(px(self.size))
            .flex_none()
            .rounded_full()
            .bg(color)
    }
}
