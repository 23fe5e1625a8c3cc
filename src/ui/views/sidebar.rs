//! Sidebar view.
//!
//! The navigation shell around the mailbox: logo, search affordance, static
//! navigation sections, and the user profile block. Everything here is inert
//! chrome except the collapse toggle.

use gpui::{
    div, px, relative, ClickEvent, Context, ElementId, EventEmitter, FontWeight, Hsla,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::SidebarEvent;
use crate::ui::components::{Avatar, AvatarSize, Icon, IconName, IconSize};
use crate::ui::theme::ThemeColors;

/// Sidebar view component.
pub struct Sidebar {
    colors: ThemeColors,
    collapsed: bool,
}

impl Sidebar {
    /// Create a new sidebar.
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            colors: ThemeColors::light(),
            collapsed: false,
        }
    }

    /// Set the collapsed state.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let toggle = cx.listener(|_, _: &ClickEvent, _window, cx| {
            cx.emit(SidebarEvent::ToggleCollapse);
        });

        div()
            .px(px(16.0))
            .py(px(14.0))
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        Icon::named("logo", IconName::Star)
                            .size(IconSize::Large)
                            .color(self.colors.accent),
                    )
                    .child(
                        div()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(self.colors.text_primary)
                            .child(SharedString::from("Cusana")),
                    ),
            )
            .child(
                div()
                    .id("sidebar-collapse")
                    .cursor_pointer()
                    .on_click(toggle)
                    .child(Icon::named("collapse-icon", IconName::ChevronLeft)),
            )
    }

    fn render_search(&self) -> impl IntoElement {
        div()
            .mx(px(12.0))
            .mb(px(12.0))
            .px(px(10.0))
            .h(px(32.0))
            .flex()
            .items_center()
            .gap(px(8.0))
            .bg(self.colors.surface)
            .border_1()
            .border_color(self.colors.border)
            .rounded(px(6.0))
            .child(Icon::named("sidebar-search-icon", IconName::Search).size(IconSize::Small))
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(self.colors.text_muted)
                    .child(SharedString::from("Search...")),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(self.colors.text_muted)
                    .child(SharedString::from("\u{2318}K")),
            )
    }

    fn render_nav_item(
        &self,
        id: impl Into<ElementId>,
        icon: IconName,
        label: &str,
        active: bool,
    ) -> impl IntoElement {
        let bg = if active {
            self.colors.surface_elevated
        } else {
            Hsla::transparent_black()
        };
        let text_color = if active {
            self.colors.text_primary
        } else {
            self.colors.text_secondary
        };
        let hover_bg = self.colors.surface;

        div()
            .id(id.into())
            .mx(px(8.0))
            .px(px(10.0))
            .py(px(7.0))
            .rounded(px(6.0))
            .bg(bg)
            .flex()
            .items_center()
            .gap(px(10.0))
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .child(Icon::named(SharedString::from(format!("{label}-icon")), icon))
            .child(
                div()
                    .text_sm()
                    .text_color(text_color)
                    .child(SharedString::from(label.to_string())),
            )
    }

    fn render_favorite(
        &self,
        id: impl Into<ElementId>,
        dot_color: u32,
        label: &str,
    ) -> impl IntoElement {
        let hover_bg = self.colors.surface;

        div()
            .id(id.into())
            .mx(px(8.0))
            .px(px(10.0))
            .py(px(7.0))
            .rounded(px(6.0))
            .flex()
            .items_center()
            .gap(px(10.0))
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .child(
                div()
                    .size(px(8.0))
                    .flex_none()
                    .rounded_full()
                    .bg(gpui::Hsla::from(gpui::rgb(dot_color))),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(self.colors.text_secondary)
                    .child(SharedString::from(label.to_string())),
            )
    }

    fn render_section_label(&self, label: &str) -> impl IntoElement {
        div()
            .px(px(18.0))
            .pt(px(16.0))
            .pb(px(6.0))
            .text_xs()
            .text_color(self.colors.text_muted)
            .child(SharedString::from(label.to_string()))
    }

    fn render_profile(&self) -> impl IntoElement {
        div()
            .p(px(12.0))
            .border_t_1()
            .border_color(self.colors.border)
            .flex()
            .items_center()
            .gap(px(10.0))
            .child(Avatar::from_name("profile-avatar", "Richard Brown").size(AvatarSize::Medium))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(4.0))
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(self.colors.text_primary)
                            .child(SharedString::from("Richard Brown")),
                    )
                    .child(
                        div()
                            .h(px(4.0))
                            .w_full()
                            .rounded_full()
                            .bg(self.colors.surface_elevated)
                            .child(
                                div()
                                    .h_full()
                                    .w(relative(0.62))
                                    .rounded_full()
                                    .bg(self.colors.accent),
                            ),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(self.colors.text_muted)
                            .child(SharedString::from("6.2GB of 10GB has been used")),
                    ),
            )
    }

    fn render_collapsed(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let toggle = cx.listener(|_, _: &ClickEvent, _window, cx| {
            cx.emit(SidebarEvent::ToggleCollapse);
        });

        div()
            .id("sidebar")
            .w(px(48.0))
            .h_full()
            .flex()
            .flex_col()
            .items_center()
            .pt(px(14.0))
            .bg(self.colors.surface)
            .border_r_1()
            .border_color(self.colors.border)
            .child(
                div()
                    .id("sidebar-expand")
                    .cursor_pointer()
                    .on_click(toggle)
                    .child(Icon::named("expand-icon", IconName::ChevronRight)),
            )
    }
}

impl EventEmitter<SidebarEvent> for Sidebar {}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.collapsed {
            return self.render_collapsed(cx).into_any_element();
        }

        div()
            .id("sidebar")
            .w(px(230.0))
            .h_full()
            .flex()
            .flex_col()
            .bg(self.colors.surface)
            .border_r_1()
            .border_color(self.colors.border)
            .child(self.render_header(cx))
            .child(self.render_search())
            .child(self.render_nav_item("nav-dashboard", IconName::Dashboard, "Dashboard", false))
            .child(self.render_nav_item("nav-notifications", IconName::Bell, "Notifications", false))
            .child(self.render_nav_item("nav-tasks", IconName::Tasks, "Tasks", false))
            .child(self.render_nav_item("nav-calendar", IconName::Calendar, "Calendar", false))
            .child(self.render_nav_item("nav-widgets", IconName::Widgets, "Widgets", false))
            .child(self.render_section_label("MARKETING"))
            .child(self.render_nav_item("nav-product", IconName::Package, "Product", false))
            .child(self.render_nav_item("nav-emails", IconName::Mail, "Emails", true))
            .child(self.render_favorite("fav-metrics", 0x22C55E, "Key Metrics"))
            .child(self.render_favorite("fav-plan", 0xF97316, "Product Plan"))
            .child(div().flex_1())
            .child(self.render_nav_item("nav-settings", IconName::Settings, "Settings", false))
            .child(self.render_nav_item("nav-help", IconName::Help, "Help & Center", false))
            .child(self.render_profile())
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_state_toggles() {
        let mut sidebar = Sidebar {
            colors: ThemeColors::light(),
            collapsed: false,
        };

        sidebar.set_collapsed(true);
        assert!(sidebar.collapsed);

        sidebar.set_collapsed(false);
        assert!(!sidebar.collapsed);
    }
}
