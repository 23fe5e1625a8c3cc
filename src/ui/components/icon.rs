//! Icon component.
//!
//! Provides a consistent way to render icons throughout the application.
//! Icons are rendered as text glyphs.

use gpui::{
    div, px, ElementId, Hsla, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled,
};

use crate::ui::theme::ThemeColors;

/// Icon size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSize {
    /// Small (14px).
    Small,
    /// Medium (16px).
    #[default]
    Medium,
    /// Large (20px).
    Large,
}

impl IconSize {
    /// Get the pixel size.
    pub fn px(self) -> f32 {
        match self {
            IconSize::Small => 14.0,
            IconSize::Medium => 16.0,
            IconSize::Large => 20.0,
        }
    }
}

/// Named icons used across the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    // Navigation chrome
    Bell,
    Calendar,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Dashboard,
    Help,
    Package,
    Search,
    Settings,
    Star,
    Tasks,
    Widgets,

    // Actions
    Archive,
    Attachment,
    Clock,
    Close,
    Document,
    Emoji,
    Expand,
    Forward,
    Mail,
    More,
    Template,
}

impl IconName {
    /// Get the glyph for this icon.
    pub fn symbol(self) -> &'static str {
        match self {
            IconName::Bell => "\u{1F514}",
            IconName::Calendar => "\u{1F4C5}",
            IconName::ChevronDown => "\u{2304}",
            IconName::ChevronLeft => "\u{2039}",
            IconName::ChevronRight => "\u{203A}",
            IconName::Dashboard => "\u{25A6}",
            IconName::Help => "?",
            IconName::Package => "\u{25C6}",
            IconName::Search => "\u{26B2}",
            IconName::Settings => "\u{2699}",
            IconName::Star => "\u{2605}",
            IconName::Tasks => "\u{2713}",
            IconName::Widgets => "\u{25A3}",

            IconName::Archive => "\u{2636}",
            IconName::Attachment => "\u{1F4CE}",
            IconName::Clock => "\u{23F0}",
            IconName::Close => "\u{2715}",
            IconName::Document => "\u{1F4C4}",
            IconName::Emoji => "\u{263A}",
            IconName::Expand => "\u{2922}",
            IconName::Forward => "\u{21AA}",
            IconName::Mail => "\u{2709}",
            IconName::More => "\u{22EF}",
            IconName::Template => "\u{25A4}",
        }
    }
}

/// An icon component.
#[derive(IntoElement)]
pub struct Icon {
    id: ElementId,
    icon: SharedString,
    size: IconSize,
    color: Option<Hsla>,
}

impl Icon {
    /// Create an icon from a named icon.
    pub fn named(id: impl Into<ElementId>, name: IconName) -> Self {
        Self {
            id: id.into(),
            icon: name.symbol().into(),
            size: IconSize::Medium,
            color: None,
        }
    }

    /// Set the icon size.
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Set a custom color for the icon.
    pub fn color(mut self, color: Hsla) -> Self {
        self.color = Some(color);
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::light();
        let size = self.size.px();
        let color = self.color.unwrap_or(colors.text_secondary);

        div()
            .id(self.id)
            .size(px(size))
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
            .text_color(color)
            .text_size(px(size))
            .child(self.icon)
    }
}
