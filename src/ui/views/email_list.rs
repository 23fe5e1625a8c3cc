//! Email list view.
//!
//! Displays the filter tabs and one row per email in the loaded collection.
//! Rows emit selection and archive intents; tabs emit filter changes. The
//! reload that follows a filter change is owned by the main window, not this
//! component.

use chrono::Utc;
use gpui::{
    div, prelude::FluentBuilder, px, relative, ClickEvent, Context, EventEmitter, FontWeight,
    Hsla, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::ListEvent;
use crate::domain::{Email, EmailFilter, EmailId};
use crate::ui::components::{Avatar, AvatarSize, ButtonSize, DotIndicator, IconButton, IconName};
use crate::ui::format::list_timestamp;
use crate::ui::theme::ThemeColors;

/// Email list view component.
pub struct EmailList {
    colors: ThemeColors,
    emails: Vec<Email>,
    selected_id: Option<EmailId>,
    active_filter: EmailFilter,
    loading: bool,
}

impl EmailList {
    /// Create a new email list.
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            colors: ThemeColors::light(),
            emails: Vec::new(),
            selected_id: None,
            active_filter: EmailFilter::All,
            loading: false,
        }
    }

    /// Set the displayed collection and selection.
    pub fn set_emails(&mut self, emails: Vec<Email>, selected_id: Option<EmailId>) {
        self.emails = emails;
        self.selected_id = selected_id;
    }

    /// Set the active filter tab.
    pub fn set_active_filter(&mut self, filter: EmailFilter) {
        self.active_filter = filter;
    }

    /// Set loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn tab_label(filter: EmailFilter) -> &'static str {
        match filter {
            EmailFilter::All => "All Mails",
            EmailFilter::Unread => "Unread",
            EmailFilter::Archived => "Archive",
        }
    }

    fn render_tab(&self, filter: EmailFilter, cx: &mut Context<Self>) -> impl IntoElement {
        let is_active = self.active_filter == filter;
        let text_color = if is_active {
            self.colors.text_primary
        } else {
            self.colors.text_secondary
        };
        let border_color = if is_active {
            self.colors.accent
        } else {
            Hsla::transparent_black()
        };
        let weight = if is_active {
            FontWeight::SEMIBOLD
        } else {
            FontWeight::NORMAL
        };

        let click_handler = cx.listener(move |this, _: &ClickEvent, _window, cx| {
            this.active_filter = filter;
            cx.emit(ListEvent::FilterChanged(filter));
            cx.notify();
        });

        div()
            .id(SharedString::from(format!("tab-{filter}")))
            .px(px(12.0))
            .py(px(10.0))
            .border_b_2()
            .border_color(border_color)
            .text_sm()
            .font_weight(weight)
            .text_color(text_color)
            .cursor_pointer()
            .on_click(click_handler)
            .child(SharedString::from(Self::tab_label(filter)))
    }

    fn render_tabs(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px(px(8.0))
            .flex()
            .items_center()
            .border_b_1()
            .border_color(self.colors.border)
            .child(self.render_tab(EmailFilter::All, cx))
            .child(self.render_tab(EmailFilter::Unread, cx))
            .child(self.render_tab(EmailFilter::Archived, cx))
            .child(div().flex_1())
            .child(IconButton::new("tabs-more", IconName::More.symbol()).size(ButtonSize::Small))
    }

    fn render_row(&self, email: &Email, cx: &mut Context<Self>) -> impl IntoElement {
        let id = email.id;
        let is_selected = self.selected_id == Some(id);

        let bg = if is_selected {
            self.colors.surface_elevated
        } else {
            Hsla::transparent_black()
        };
        let hover_bg = self.colors.surface;
        let border_color = self.colors.border;
        let text_primary = self.colors.text_primary;
        let text_secondary = self.colors.text_secondary;
        let text_muted = self.colors.text_muted;

        let sender_weight = if email.is_read {
            FontWeight::NORMAL
        } else {
            FontWeight::SEMIBOLD
        };

        let select_handler = cx.listener(move |_, _: &ClickEvent, _window, cx| {
            cx.emit(ListEvent::Select(id));
        });

        // The archive control must not also trigger the row's select intent.
        let archive_handler = cx.listener(move |_, _: &ClickEvent, _window, cx| {
            cx.stop_propagation();
            cx.emit(ListEvent::ToggleArchive(id));
        });

        div()
            .id(SharedString::from(format!("email-{id}")))
            .px(px(12.0))
            .py(px(12.0))
            .bg(bg)
            .border_b_1()
            .border_color(border_color)
            .flex()
            .items_start()
            .gap(px(10.0))
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .on_click(select_handler)
            .child(
                Avatar::from_name(
                    SharedString::from(format!("avatar-{id}")),
                    email.sender.name.clone(),
                )
                .size(AvatarSize::Large),
            )
            .child(
                div()
                    .flex_1()
                    .min_w(px(0.0))
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(sender_weight)
                                    .text_color(text_primary)
                                    .child(SharedString::from(email.sender.name.clone())),
                            )
                            .child(div().text_xs().text_color(text_muted).child(
                                SharedString::from(list_timestamp(email.date, Utc::now())),
                            )),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(text_primary)
                            .truncate()
                            .child(SharedString::from(email.subject.clone())),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(6.0))
                            .child(
                                div()
                                    .flex_1()
                                    .min_w(px(0.0))
                                    .text_sm()
                                    .text_color(text_secondary)
                                    .truncate()
                                    .child(SharedString::from(email.preview.clone())),
                            )
                            .when(!email.is_read, |this| this.child(DotIndicator::new())),
                    )
                    .child(
                        div()
                            .flex()
                            .gap(px(4.0))
                            .child(
                                IconButton::new(
                                    SharedString::from(format!("archive-{id}")),
                                    IconName::Archive.symbol(),
                                )
                                .size(ButtonSize::Small)
                                .tooltip("Archive")
                                .on_click(archive_handler),
                            )
                            .child(
                                IconButton::new(
                                    SharedString::from(format!("forward-{id}")),
                                    IconName::Forward.symbol(),
                                )
                                .size(ButtonSize::Small)
                                .tooltip("Forward"),
                            )
                            .child(
                                IconButton::new(
                                    SharedString::from(format!("more-{id}")),
                                    IconName::More.symbol(),
                                )
                                .size(ButtonSize::Small)
                                .tooltip("More"),
                            ),
                    ),
            )
    }

    fn render_footer(&self) -> impl IntoElement {
        div()
            .px(px(12.0))
            .py(px(10.0))
            .border_t_1()
            .border_color(self.colors.border)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        div()
                            .w(px(60.0))
                            .h(px(4.0))
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
            .child(
                div()
                    .text_xs()
                    .text_color(self.colors.text_muted)
                    .child(SharedString::from("1-20 of 2,312")),
            )
    }

    fn render_empty_state(&self) -> impl IntoElement {
        div().flex_1().flex().items_center().justify_center().child(
            div()
                .text_sm()
                .text_color(self.colors.text_muted)
                .child(SharedString::from("No emails")),
        )
    }

    fn render_loading_state(&self) -> impl IntoElement {
        div().flex_1().flex().items_center().justify_center().child(
            div()
                .text_sm()
                .text_color(self.colors.text_muted)
                .child(SharedString::from("Loading...")),
        )
    }
}

impl EventEmitter<ListEvent> for EmailList {}

impl Render for EmailList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Collect rows with their click handlers before building the container
        let emails = self.emails.clone();
        let rows: Vec<_> = emails
            .iter()
            .map(|email| self.render_row(email, cx))
            .collect();

        div()
            .id("email-list")
            .w(px(360.0))
            .h_full()
            .flex()
            .flex_col()
            .bg(self.colors.background)
            .border_r_1()
            .border_color(self.colors.border)
            .child(self.render_tabs(cx))
            .when(self.loading, |this| this.child(self.render_loading_state()))
            .when(!self.loading && self.emails.is_empty(), |this| {
                this.child(self.render_empty_state())
            })
            .when(!self.loading && !self.emails.is_empty(), |this| {
                this.child(
                    div()
                        .id("email-items")
                        .flex_1()
                        .overflow_y_scroll()
                        .children(rows),
                )
            })
            .child(self.render_footer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Recipient, Sender};
    use chrono::TimeZone;

    fn email(id: i64, is_read: bool) -> Email {
        Email {
            id: EmailId(id),
            sender: Sender {
                name: "Alice Smith".to_string(),
                email: "alice@example.com".to_string(),
                avatar: None,
            },
            recipient: Recipient::new("John Smith", "john@business.com"),
            subject: "Subject".to_string(),
            preview: "Preview".to_string(),
            body: "Body".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 30, 8, 30, 0).unwrap(),
            is_read,
            is_archived: false,
            attachments: vec![],
        }
    }

    #[test]
    fn tab_labels() {
        assert_eq!(EmailList::tab_label(EmailFilter::All), "All Mails");
        assert_eq!(EmailList::tab_label(EmailFilter::Unread), "Unread");
        assert_eq!(EmailList::tab_label(EmailFilter::Archived), "Archive");
    }

    #[test]
    fn set_emails_replaces_rows() {
        let mut list = EmailList {
            colors: ThemeColors::light(),
            emails: vec![email(1, true)],
            selected_id: Some(EmailId(1)),
            active_filter: EmailFilter::All,
            loading: false,
        };

        list.set_emails(vec![email(2, false), email(3, true)], Some(EmailId(2)));
        assert_eq!(list.emails.len(), 2);
        assert_eq!(list.selected_id, Some(EmailId(2)));
    }

    #[test]
    fn filter_state_updates() {
        let mut list = EmailList {
            colors: ThemeColors::light(),
            emails: Vec::new(),
            selected_id: None,
            active_filter: EmailFilter::All,
            loading: false,
        };

        list.set_active_filter(EmailFilter::Archived);
        assert_eq!(list.active_filter, EmailFilter::Archived);

        list.set_loading(true);
        assert!(list.loading);
    }
}
