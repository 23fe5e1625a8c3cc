//! Reply composer view.
//!
//! Inline reply box at the bottom of the detail pane: a recipient picker fed
//! by every distinct sender in the loaded collection, and an editable draft
//! body seeded with a template addressed to the current recipient.
//!
//! The send control is presentational only; it issues no backend call.

use gpui::{
    div, prelude::FluentBuilder, px, ClickEvent, Context, FocusHandle, Focusable, FontWeight,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::domain::{Email, Recipient};
use crate::ui::components::{
    Button, ButtonSize, IconButton, IconName, KeyInputResult, TextArea, TextBuffer,
};
use crate::ui::theme::ThemeColors;

/// Derives the recipient candidate list from the loaded collection.
///
/// One entry per distinct sender email address; the first occurrence wins
/// and insertion order is preserved.
pub fn recipient_candidates(emails: &[Email]) -> Vec<Recipient> {
    let mut seen = std::collections::HashSet::new();
    let mut candidates = Vec::new();
    for email in emails {
        if seen.insert(email.sender.email.clone()) {
            candidates.push(Recipient::from(&email.sender));
        }
    }
    candidates
}

/// Builds the seeded draft body for a reply to the given display name.
fn default_reply_body(name: &str) -> String {
    let first_name = name.split_whitespace().next().unwrap_or("");
    format!(
        "Hi {first_name},\n\nThank you for reaching out and for sharing your proposal! \
         \u{1F389} After reviewing the attached document, I'm impressed by the alignment \
         between our companies' strengths, particularly in driving customer retention \
         through innovative solutions.\n\nI'd like to explore this further and discuss how \
         we can tailor the partnership to maximize mutual benefits. Are you available for a \
         call or meeting next week? I'm free on Friday 20 Dec, but I can adjust to fit your \
         schedule if needed. Looking forward to diving deeper into this exciting \
         opportunity!\n\nWarm regards,\nJohn Smith"
    )
}

/// Reply composer view component.
pub struct ReplyComposer {
    colors: ThemeColors,
    focus_handle: FocusHandle,
    recipient: Recipient,
    candidates: Vec<Recipient>,
    dropdown_open: bool,
    body: TextBuffer,
}

impl ReplyComposer {
    /// Create a composer replying to `reply_to`, offering `candidates` in the
    /// recipient picker.
    pub fn new(reply_to: Recipient, candidates: Vec<Recipient>, cx: &mut Context<Self>) -> Self {
        let body = TextBuffer::with_text(default_reply_body(&reply_to.name));
        Self {
            colors: ThemeColors::light(),
            focus_handle: cx.focus_handle(),
            recipient: reply_to,
            candidates,
            dropdown_open: false,
            body,
        }
    }

    /// Refresh the candidate list without resetting the draft.
    pub fn set_candidates(&mut self, candidates: Vec<Recipient>) {
        self.candidates = candidates;
    }

    /// The currently selected recipient.
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    fn select_recipient(&mut self, recipient: Recipient) {
        self.recipient = recipient;
        self.dropdown_open = false;
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let key = event.keystroke.key.as_str();
        let shift = event.keystroke.modifiers.shift;
        let ctrl = event.keystroke.modifiers.control;
        let cmd = event.keystroke.modifiers.platform;

        if key == "enter" {
            self.body.insert_char('\n');
            cx.notify();
            return;
        }

        match self.body.process_key(key, shift, ctrl, cmd) {
            KeyInputResult::TextChanged | KeyInputResult::Consumed => cx.notify(),
            _ => {}
        }
    }

    fn render_dropdown(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let close_handler = cx.listener(|this, _: &gpui::MouseDownEvent, _window, cx| {
            this.dropdown_open = false;
            cx.notify();
        });

        let options = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let is_active = candidate.email == self.recipient.email;
                let bg = if is_active {
                    self.colors.surface_elevated
                } else {
                    gpui::Hsla::transparent_black()
                };
                let hover_bg = self.colors.surface;
                let choice = candidate.clone();
                let select_handler = cx.listener(move |this, _: &ClickEvent, _window, cx| {
                    this.select_recipient(choice.clone());
                    cx.notify();
                });

                div()
                    .id(SharedString::from(format!("recipient-option-{index}")))
                    .px(px(12.0))
                    .py(px(8.0))
                    .bg(bg)
                    .flex()
                    .flex_col()
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .on_click(select_handler)
                    .child(
                        div()
                            .text_sm()
                            .text_color(self.colors.text_primary)
                            .child(SharedString::from(candidate.name.clone())),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(self.colors.text_muted)
                            .child(SharedString::from(candidate.email.clone())),
                    )
            })
            .collect::<Vec<_>>();

        div()
            .id("recipient-dropdown")
            .absolute()
            .top(px(36.0))
            .left(px(0.0))
            .w(px(280.0))
            .max_h(px(220.0))
            .overflow_y_scroll()
            .bg(self.colors.background)
            .border_1()
            .border_color(self.colors.border)
            .rounded(px(8.0))
            .shadow_lg()
            .on_mouse_down_out(close_handler)
            .children(options)
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let toggle_handler = cx.listener(|this, _: &ClickEvent, _window, cx| {
            this.dropdown_open = !this.dropdown_open;
            cx.notify();
        });

        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .relative()
                    .flex()
                    .items_center()
                    .gap(px(6.0))
                    .child(
                        div()
                            .text_sm()
                            .text_color(self.colors.text_muted)
                            .child(SharedString::from("To:")),
                    )
                    .child(
                        div()
                            .id("reply-recipient")
                            .flex()
                            .items_center()
                            .gap(px(4.0))
                            .px(px(8.0))
                            .py(px(4.0))
                            .rounded(px(4.0))
                            .cursor_pointer()
                            .hover(|style| style.bg(ThemeColors::light().surface))
                            .on_click(toggle_handler)
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(self.colors.text_primary)
                                    .child(SharedString::from(self.recipient.name.clone())),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(self.colors.text_muted)
                                    .child(SharedString::from(IconName::ChevronDown.symbol())),
                            ),
                    )
                    .when(self.dropdown_open, |this| {
                        this.child(self.render_dropdown(cx))
                    }),
            )
            .child(
                div()
                    .flex()
                    .gap(px(4.0))
                    .child(
                        IconButton::new("reply-expand", IconName::Expand.symbol())
                            .size(ButtonSize::Small)
                            .tooltip("Expand"),
                    )
                    .child(
                        IconButton::new("reply-close", IconName::Close.symbol())
                            .size(ButtonSize::Small)
                            .tooltip("Close"),
                    ),
            )
    }

    fn render_footer(&self) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(6.0))
                    .child(Button::new("reply-send", "Send Now"))
                    .child(
                        IconButton::new("reply-schedule", IconName::Clock.symbol())
                            .tooltip("Schedule"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap(px(4.0))
                    .child(
                        IconButton::new("reply-attach", IconName::Attachment.symbol())
                            .tooltip("Attach file"),
                    )
                    .child(IconButton::new("reply-emoji", IconName::Emoji.symbol()).tooltip("Emoji"))
                    .child(
                        IconButton::new("reply-template", IconName::Template.symbol())
                            .tooltip("Template"),
                    )
                    .child(IconButton::new("reply-more", IconName::More.symbol()).tooltip("More")),
            )
    }
}

impl Focusable for ReplyComposer {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ReplyComposer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("reply-composer")
            .track_focus(&self.focus_handle)
            .on_click(cx.listener(|this, _: &ClickEvent, window, _cx| {
                window.focus(&this.focus_handle);
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .m(px(16.0))
            .p(px(12.0))
            .flex()
            .flex_col()
            .gap(px(10.0))
            .bg(self.colors.background)
            .border_1()
            .border_color(self.colors.border)
            .rounded(px(8.0))
            .child(self.render_header(cx))
            .child(
                TextArea::new("reply-body")
                    .value(self.body.text().to_string())
                    .rows(8),
            )
            .child(self.render_footer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailId, Sender};
    use chrono::{TimeZone, Utc};

    fn email_from(id: i64, name: &str, address: &str) -> Email {
        Email {
            id: EmailId(id),
            sender: Sender {
                name: name.to_string(),
                email: address.to_string(),
                avatar: None,
            },
            recipient: Recipient::new("John Smith", "john@business.com"),
            subject: "Subject".to_string(),
            preview: "Preview".to_string(),
            body: "Body".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 30, 8, 30, 0).unwrap(),
            is_read: true,
            is_archived: false,
            attachments: vec![],
        }
    }

    #[test]
    fn candidates_dedup_by_address_first_wins() {
        let emails = vec![
            email_from(1, "Alice Smith", "alice@example.com"),
            email_from(2, "Bob Jones", "bob@example.com"),
            email_from(3, "Alice S.", "alice@example.com"),
        ];

        let candidates = recipient_candidates(&emails);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Alice Smith");
        assert_eq!(candidates[0].email, "alice@example.com");
        assert_eq!(candidates[1].email, "bob@example.com");
    }

    #[test]
    fn candidates_preserve_collection_order() {
        let emails = vec![
            email_from(1, "Carol", "carol@example.com"),
            email_from(2, "Alice", "alice@example.com"),
            email_from(3, "Bob", "bob@example.com"),
        ];

        let candidates = recipient_candidates(&emails);
        let addresses: Vec<_> = candidates.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(
            addresses,
            ["carol@example.com", "alice@example.com", "bob@example.com"]
        );
    }

    #[test]
    fn candidates_empty_collection() {
        assert!(recipient_candidates(&[]).is_empty());
    }

    #[test]
    fn reply_body_uses_first_name_token() {
        let body = default_reply_body("Alice Marie Smith");
        assert!(body.starts_with("Hi Alice,"));
    }

    #[test]
    fn reply_body_handles_empty_name() {
        let body = default_reply_body("");
        assert!(body.starts_with("Hi ,"));
    }
}
