//! Email detail view.
//!
//! Renders the selected email: sender header, subject, body paragraphs,
//! attachments, and the inline reply composer. Action buttons emit intents
//! back to the main window.

use gpui::{
    div, prelude::FluentBuilder, px, AppContext, Context, Entity, EventEmitter, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::DetailEvent;
use crate::domain::{Email, EmailId, Recipient};
use crate::ui::components::{Avatar, AvatarSize, Icon, IconButton, IconName, IconSize};
use crate::ui::format::detail_timestamp;
use crate::ui::theme::ThemeColors;
use crate::ui::views::reply_composer::{recipient_candidates, ReplyComposer};

/// Email detail view component.
pub struct EmailDetail {
    colors: ThemeColors,
    email: Option<Email>,
    reply: Option<Entity<ReplyComposer>>,
}

impl EmailDetail {
    /// Create a new detail pane with nothing selected.
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            colors: ThemeColors::light(),
            email: None,
            reply: None,
        }
    }

    /// Set the displayed email and the collection feeding the reply picker.
    ///
    /// The reply composer is re-created (draft reset) whenever the displayed
    /// email id changes; on other updates only its candidate list refreshes.
    pub fn set_content(&mut self, email: Option<Email>, all_emails: &[Email], cx: &mut Context<Self>) {
        let candidates = recipient_candidates(all_emails);

        match (&email, self.email.as_ref()) {
            (Some(new), old) => {
                let changed = old.map(|e| e.id) != Some(new.id) || self.reply.is_none();
                if changed {
                    let reply_to = Recipient::from(&new.sender);
                    self.reply =
                        Some(cx.new(|cx| ReplyComposer::new(reply_to, candidates, cx)));
                } else if let Some(reply) = &self.reply {
                    reply.update(cx, |reply, _| reply.set_candidates(candidates));
                }
            }
            (None, _) => self.reply = None,
        }

        self.email = email;
    }

    /// The id of the displayed email, if any.
    pub fn email_id(&self) -> Option<EmailId> {
        self.email.as_ref().map(|e| e.id)
    }

    fn render_empty_state(&self) -> impl IntoElement {
        div().flex_1().flex().items_center().justify_center().child(
            div()
                .text_color(self.colors.text_muted)
                .child(SharedString::from("Select an email to view")),
        )
    }

    fn render_header(&self, email: &Email, cx: &mut Context<Self>) -> impl IntoElement {
        let id = email.id;

        let mark_read_handler = cx.listener(move |_, _: &gpui::ClickEvent, _window, cx| {
            cx.emit(DetailEvent::ToggleRead(id));
        });
        let archive_handler = cx.listener(move |_, _: &gpui::ClickEvent, _window, cx| {
            cx.emit(DetailEvent::ToggleArchive(id));
        });

        div()
            .px(px(24.0))
            .py(px(16.0))
            .flex()
            .items_start()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(12.0))
                    .child(
                        Avatar::from_name("detail-avatar", email.sender.name.clone())
                            .size(AvatarSize::XLarge),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(2.0))
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap(px(8.0))
                                    .child(
                                        div()
                                            .font_weight(FontWeight::SEMIBOLD)
                                            .text_color(self.colors.text_primary)
                                            .child(SharedString::from(email.sender.name.clone())),
                                    )
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(self.colors.text_muted)
                                            .child(SharedString::from(email.sender.email.clone())),
                                    ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap(px(4.0))
                                    .text_sm()
                                    .text_color(self.colors.text_secondary)
                                    .child(SharedString::from("To:"))
                                    .child(SharedString::from(email.recipient.name.clone()))
                                    .child(
                                        Icon::named("recipient-chevron", IconName::ChevronDown)
                                            .size(IconSize::Small),
                                    ),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_end()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_sm()
                            .text_color(self.colors.text_muted)
                            .child(SharedString::from(detail_timestamp(email.date))),
                    )
                    .child(
                        div()
                            .flex()
                            .gap(px(4.0))
                            .child(
                                IconButton::new("detail-mark-read", IconName::Mail.symbol())
                                    .tooltip("Mark as read")
                                    .on_click(mark_read_handler),
                            )
                            .child(
                                IconButton::new("detail-archive", IconName::Archive.symbol())
                                    .tooltip("Archive")
                                    .on_click(archive_handler),
                            )
                            .child(
                                IconButton::new("detail-forward", IconName::Forward.symbol())
                                    .tooltip("Forward"),
                            )
                            .child(
                                IconButton::new("detail-more", IconName::More.symbol())
                                    .tooltip("More"),
                            ),
                    ),
            )
    }

    fn render_body(&self, email: &Email) -> impl IntoElement {
        // Blank lines become fixed-height spacers so paragraph breaks survive.
        let paragraphs = email
            .body
            .split('\n')
            .enumerate()
            .map(|(index, line)| {
                if line.is_empty() {
                    div().id(index).h(px(14.0))
                } else {
                    div()
                        .id(index)
                        .text_color(self.colors.text_secondary)
                        .child(SharedString::from(line.to_string()))
                }
            })
            .collect::<Vec<_>>();

        div()
            .px(px(24.0))
            .flex()
            .flex_col()
            .gap(px(4.0))
            .children(paragraphs)
    }

    fn render_attachments(&self, email: &Email, cx: &mut Context<Self>) -> impl IntoElement {
        let cards = email
            .attachments
            .iter()
            .map(|attachment| {
                let url = attachment.url.clone();
                let download_handler =
                    cx.listener(move |_, _: &gpui::ClickEvent, _window, cx| {
                        cx.open_url(&url);
                    });

                div()
                    .id(SharedString::from(format!("attachment-{}", attachment.id)))
                    .flex()
                    .items_center()
                    .gap(px(10.0))
                    .px(px(12.0))
                    .py(px(10.0))
                    .bg(self.colors.surface)
                    .border_1()
                    .border_color(self.colors.border)
                    .rounded(px(8.0))
                    .child(
                        Icon::named(
                            SharedString::from(format!("attachment-icon-{}", attachment.id)),
                            IconName::Document,
                        )
                        .size(IconSize::Large)
                        .color(self.colors.error),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(self.colors.text_primary)
                                    .child(SharedString::from(attachment.filename.clone())),
                            )
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap(px(4.0))
                                    .text_xs()
                                    .text_color(self.colors.text_muted)
                                    .child(SharedString::from(attachment.size.clone()))
                                    .child(SharedString::from("\u{00B7}"))
                                    .child(
                                        div()
                                            .id(SharedString::from(format!(
                                                "attachment-download-{}",
                                                attachment.id
                                            )))
                                            .text_color(self.colors.accent)
                                            .cursor_pointer()
                                            .on_click(download_handler)
                                            .child(SharedString::from("Download")),
                                    ),
                            ),
                    )
            })
            .collect::<Vec<_>>();

        div()
            .px(px(24.0))
            .py(px(16.0))
            .flex()
            .flex_wrap()
            .gap(px(8.0))
            .children(cards)
    }
}

impl EventEmitter<DetailEvent> for EmailDetail {}

impl Render for EmailDetail {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let email = self.email.clone();
        let reply = self.reply.clone();

        div()
            .id("email-detail")
            .flex_1()
            .h_full()
            .flex()
            .flex_col()
            .bg(self.colors.background)
            .when(email.is_none(), |this| this.child(self.render_empty_state()))
            .when_some(email, |this, email| {
                this.child(
                    div()
                        .id("detail-scroll")
                        .flex_1()
                        .overflow_y_scroll()
                        .child(self.render_header(&email, cx))
                        .child(
                            div()
                                .px(px(24.0))
                                .pb(px(12.0))
                                .text_lg()
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(self.colors.text_primary)
                                .child(SharedString::from(email.subject.clone())),
                        )
                        .child(self.render_body(&email))
                        .when(!email.attachments.is_empty(), |this| {
                            this.child(self.render_attachments(&email, cx))
                        }),
                )
                .when_some(reply, |this, reply| this.child(reply))
            })
    }
}
