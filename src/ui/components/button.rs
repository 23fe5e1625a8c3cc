//! Button component.
//!
//! Provides styled button variants for different use cases.

use gpui::{
    div, px, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled,
};

use crate::ui::theme::ThemeColors;

/// Type alias for button click handlers.
type ClickHandler = Box<dyn Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static>;

/// Button variant styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Ghost/transparent button.
    Ghost,
}

/// Button size options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button (28px height).
    Small,
    /// Medium button (32px height).
    #[default]
    Medium,
    /// Large button (40px height).
    Large,
}

/// A styled button component.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button with the given label.
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Disable the button.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn height(&self) -> f32 {
        match self.size {
            ButtonSize::Small => 28.0,
            ButtonSize::Medium => 32.0,
            ButtonSize::Large => 40.0,
        }
    }

    fn padding_x(&self) -> f32 {
        match self.size {
            ButtonSize::Small => 12.0,
            ButtonSize::Medium => 16.0,
            ButtonSize::Large => 20.0,
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::light();

        let (bg, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (colors.accent, gpui::white(), colors.accent_hover),
            ButtonVariant::Secondary => {
                (colors.surface_elevated, colors.text_primary, colors.border)
            }
            ButtonVariant::Ghost => (
                gpui::Hsla::transparent_black(),
                colors.text_secondary,
                colors.surface_elevated,
            ),
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };
        let height = self.height();
        let padding_x = self.padding_x();

        let mut element = div()
            .id(self.id)
            .h(px(height))
            .px(px(padding_x))
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(6.0))
            .bg(bg)
            .text_color(text_color)
            .text_sm()
            .opacity(opacity)
            .cursor_pointer()
            .child(self.label);

        if !self.disabled {
            element = element.hover(move |style| style.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

/// An icon button (square, typically for toolbar actions).
#[derive(IntoElement)]
pub struct IconButton {
    id: ElementId,
    icon: SharedString,
    tooltip: Option<SharedString>,
    size: ButtonSize,
    on_click: Option<ClickHandler>,
}

impl IconButton {
    /// Create a new icon button.
    pub fn new(id: impl Into<ElementId>, icon: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            tooltip: None,
            size: ButtonSize::Medium,
            on_click: None,
        }
    }

    /// Set a tooltip for the button.
    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the click handler.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn size_px(&self) -> f32 {
        match self.size {
            ButtonSize::Small => 24.0,
            ButtonSize::Medium => 28.0,
            ButtonSize::Large => 32.0,
        }
    }
}

impl RenderOnce for IconButton {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::light();
        let size = self.size_px();

        let mut element = div()
            .id(self.id)
            .size(px(size))
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(4.0))
            .text_color(colors.text_secondary)
            .cursor_pointer()
            .hover(move |style| {
                style
                    .bg(colors.surface_elevated)
                    .text_color(colors.text_primary)
            })
            .child(self.icon);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_builder() {
        let button = Button::new("test", "Send Now")
            .variant(ButtonVariant::Primary)
            .size(ButtonSize::Large)
            .disabled(true);

        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ButtonSize::Large);
        assert!(button.disabled);
    }

    #[test]
    fn button_sizes() {
        assert_eq!(Button::new("s", "S").size(ButtonSize::Small).height(), 28.0);
        assert_eq!(
            Button::new("m", "M").size(ButtonSize::Medium).height(),
            32.0
        );
        assert_eq!(Button::new("l", "L").size(ButtonSize::Large).height(), 40.0);
    }

    #[test]
    fn icon_button_builder() {
        let button = IconButton::new("icon", "\u{2715}")
            .tooltip("Close")
            .size(ButtonSize::Small);

        assert!(button.tooltip.is_some());
        assert_eq!(button.size_px(), 24.0);
    }
}
