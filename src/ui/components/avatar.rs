//! Avatar component.
//!
//! Every avatar in the product is a synthesized initials badge: the display
//! name determines both the initials and the background color. The list and
//! detail panes render the same name through the same functions, so they
//! always agree.

use gpui::{
    div, px, rgb, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled,
};

use crate::ui::theme::AVATAR_PALETTE;

/// Avatar size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    /// Small (24px).
    Small,
    /// Medium (32px).
    #[default]
    Medium,
    /// Large (40px).
    Large,
    /// Extra large (48px).
    XLarge,
}

impl AvatarSize {
    fn px(self) -> f32 {
        match self {
            AvatarSize::Small => 24.0,
            AvatarSize::Medium => 32.0,
            AvatarSize::Large => 40.0,
            AvatarSize::XLarge => 48.0,
        }
    }

    fn font_size(self) -> f32 {
        match self {
            AvatarSize::Small => 11.0,
            AvatarSize::Medium => 13.0,
            AvatarSize::Large => 15.0,
            AvatarSize::XLarge => 18.0,
        }
    }
}

/// Extracts up to two uppercased initials from a display name.
///
/// Empty tokens from repeated whitespace are skipped; an empty name yields an
/// empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}

/// Hash of a display name over its UTF-16 code units.
///
/// hash = code + hash * 31, with the shifted term coerced through 32 bits.
fn name_hash(name: &str) -> i64 {
    let mut hash: i64 = 0;
    for code in name.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = code as i64 + (shifted - hash);
    }
    hash
}

/// Palette slot assigned to a display name.
pub fn palette_index(name: &str) -> usize {
    (name_hash(name).unsigned_abs() % AVATAR_PALETTE.len() as u64) as usize
}

/// Background color assigned to a display name.
pub fn color_for_name(name: &str) -> Hsla {
    rgb(AVATAR_PALETTE[palette_index(name)]).into()
}

/// A circular initials badge for a display name.
#[derive(IntoElement)]
pub struct Avatar {
    id: ElementId,
    name: SharedString,
    size: AvatarSize,
}

impl Avatar {
    /// Create an avatar for a display name.
    pub fn from_name(id: impl Into<ElementId>, name: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: AvatarSize::Medium,
        }
    }

    /// Set the avatar size.
    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let size = self.size.px();
        let font_size = self.size.font_size();
        let bg = color_for_name(&self.name);

        div()
            .id(self.id)
            .size(px(size))
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(bg)
            .text_color(gpui::white())
            .text_size(px(font_size))
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(SharedString::from(initials(&self.name)))
    }
}
