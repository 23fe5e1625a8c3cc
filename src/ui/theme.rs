//! Theme definitions for cusana

use gpui::{rgb, Hsla};

/// Fixed palette for synthesized avatars.
///
/// The order is part of the avatar color contract: the name hash indexes into
/// this array, so reordering entries reshuffles every avatar in the product.
pub const AVATAR_PALETTE: [u32; 10] = [
    0x6366F1, 0x8B5CF6, 0xEC4899, 0xEF4444, 0xF97316, 0xEAB308, 0x22C55E, 0x14B8A6, 0x06B6D4,
    0x3B82F6,
];

/// Color palette for the application
#[derive(Clone, Debug)]
pub struct ThemeColors {
    // Backgrounds
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_elevated: Hsla,

    // Text
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,

    // Borders
    pub border: Hsla,
    pub border_focused: Hsla,

    // Accents
    pub accent: Hsla,
    pub accent_hover: Hsla,

    // Status colors
    pub success: Hsla,
    pub error: Hsla,

    // Email-specific
    pub unread: Hsla,
}

impl ThemeColors {
    /// Light theme colors
    pub fn light() -> Self {
        Self {
            // Backgrounds
            background: rgb(0xffffff).into(),
            surface: rgb(0xf9fafb).into(),
            surface_elevated: rgb(0xf3f4f6).into(),

            // Text
            text_primary: rgb(0x111827).into(),
            text_secondary: rgb(0x4b5563).into(),
            text_muted: rgb(0x9ca3af).into(),

            // Borders
            border: rgb(0xe5e7eb).into(),
            border_focused: rgb(0xf97316).into(),

            // Accents
            accent: rgb(0xf97316).into(),
            accent_hover: rgb(0xea580c).into(),

            // Status
            success: rgb(0x22c55e).into(),
            error: rgb(0xef4444).into(),

            // Email-specific
            unread: rgb(0x3b82f6).into(),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_ten_entries() {
        assert_eq!(AVATAR_PALETTE.len(), 10);
    }

    #[test]
    fn palette_order_is_stable() {
        assert_eq!(AVATAR_PALETTE[0], 0x6366F1);
        assert_eq!(AVATAR_PALETTE[5], 0xEAB308);
        assert_eq!(AVATAR_PALETTE[9], 0x3B82F6);
    }
}
