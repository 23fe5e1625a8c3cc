//! Compose modal view.
//!
//! Standalone new-message form rendered over a backdrop. The form keeps its
//! own field buffers; on submit it trims everything, falls back to the email
//! address when the name is blank, and emits the draft for the main window
//! to send. Clicking the backdrop or pressing escape dismisses it.

use gpui::{
    div, px, ClickEvent, Context, EventEmitter, FocusHandle, Focusable, FontWeight,
    InteractiveElement, IntoElement, KeyDownEvent, MouseDownEvent, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::api::NewEmail;
use crate::app::ComposeEvent;
use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, IconButton, IconName, KeyInputResult, TextArea, TextBuffer,
    TextInput,
};
use crate::ui::theme::ThemeColors;

/// The form field currently receiving keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ComposeField {
    #[default]
    RecipientName,
    RecipientEmail,
    Subject,
    Body,
}

impl ComposeField {
    fn next(self) -> Self {
        match self {
            ComposeField::RecipientName => ComposeField::RecipientEmail,
            ComposeField::RecipientEmail => ComposeField::Subject,
            ComposeField::Subject => ComposeField::Body,
            ComposeField::Body => ComposeField::RecipientName,
        }
    }

    fn previous(self) -> Self {
        match self {
            ComposeField::RecipientName => ComposeField::Body,
            ComposeField::RecipientEmail => ComposeField::RecipientName,
            ComposeField::Subject => ComposeField::RecipientEmail,
            ComposeField::Body => ComposeField::Subject,
        }
    }
}

/// Whether a submit is allowed for the given required fields and state.
fn submit_allowed(recipient_email: &str, subject: &str, sending: bool) -> bool {
    !recipient_email.trim().is_empty() && !subject.trim().is_empty() && !sending
}

/// Builds the outgoing draft, trimming fields and defaulting the name to the
/// trimmed email address when blank.
fn build_draft(name: &str, email: &str, subject: &str, body: &str) -> NewEmail {
    let email = email.trim();
    let name = name.trim();
    NewEmail {
        recipient_name: if name.is_empty() {
            email.to_string()
        } else {
            name.to_string()
        },
        recipient_email: email.to_string(),
        subject: subject.trim().to_string(),
        body: body.trim().to_string(),
    }
}

/// Compose modal view component.
pub struct ComposeModal {
    colors: ThemeColors,
    focus_handle: FocusHandle,
    recipient_name: TextBuffer,
    recipient_email: TextBuffer,
    subject: TextBuffer,
    body: TextBuffer,
    active_field: ComposeField,
    sending: bool,
}

impl ComposeModal {
    /// Create an empty compose form.
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            colors: ThemeColors::light(),
            focus_handle: cx.focus_handle(),
            recipient_name: TextBuffer::new(),
            recipient_email: TextBuffer::new(),
            subject: TextBuffer::new(),
            body: TextBuffer::new(),
            active_field: ComposeField::default(),
            sending: false,
        }
    }

    /// Mark a send as in flight, disabling further submits.
    pub fn set_sending(&mut self, sending: bool) {
        self.sending = sending;
    }

    /// Whether the form can currently be submitted.
    pub fn can_submit(&self) -> bool {
        submit_allowed(
            self.recipient_email.text(),
            self.subject.text(),
            self.sending,
        )
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        if !self.can_submit() {
            return;
        }
        self.sending = true;
        let draft = build_draft(
            self.recipient_name.text(),
            self.recipient_email.text(),
            self.subject.text(),
            self.body.text(),
        );
        cx.emit(ComposeEvent::Submit(draft));
        cx.notify();
    }

    fn active_buffer(&mut self) -> &mut TextBuffer {
        match self.active_field {
            ComposeField::RecipientName => &mut self.recipient_name,
            ComposeField::RecipientEmail => &mut self.recipient_email,
            ComposeField::Subject => &mut self.subject,
            ComposeField::Body => &mut self.body,
        }
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let key = event.keystroke.key.as_str();
        let shift = event.keystroke.modifiers.shift;
        let ctrl = event.keystroke.modifiers.control;
        let cmd = event.keystroke.modifiers.platform;

        if key == "tab" {
            self.active_field = if shift {
                self.active_field.previous()
            } else {
                self.active_field.next()
            };
            cx.notify();
            return;
        }

        if key == "enter" && cmd {
            self.submit(cx);
            return;
        }

        if key == "enter" && self.active_field == ComposeField::Body {
            self.active_buffer().insert_char('\n');
            cx.notify();
            return;
        }

        match self.active_buffer().process_key(key, shift, ctrl, cmd) {
            KeyInputResult::TextChanged | KeyInputResult::Consumed => cx.notify(),
            KeyInputResult::Submit => self.submit(cx),
            KeyInputResult::Cancel => cx.emit(ComposeEvent::Dismiss),
            KeyInputResult::Ignored => {}
        }
    }

    fn render_field(
        &self,
        label: &str,
        placeholder: &str,
        field: ComposeField,
        value: &str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let focus_handler = cx.listener(move |this, _: &ClickEvent, _window, cx| {
            this.active_field = field;
            cx.notify();
        });

        div()
            .flex()
            .flex_col()
            .gap(px(4.0))
            .child(
                div()
                    .text_xs()
                    .text_color(self.colors.text_muted)
                    .child(SharedString::from(label.to_string())),
            )
            .child(
                div()
                    .id(SharedString::from(format!("field-{label}")))
                    .on_click(focus_handler)
                    .child(
                        TextInput::new(SharedString::from(format!("input-{label}")))
                            .value(value.to_string())
                            .placeholder(placeholder.to_string())
                            .focused(self.active_field == field),
                    ),
            )
    }

    fn render_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let body_focus = cx.listener(|this, _: &ClickEvent, _window, cx| {
            this.active_field = ComposeField::Body;
            cx.notify();
        });

        div()
            .p(px(16.0))
            .flex()
            .flex_col()
            .gap(px(12.0))
            .child(self.render_field(
                "To (name)",
                "Jane Doe",
                ComposeField::RecipientName,
                self.recipient_name.text(),
                cx,
            ))
            .child(self.render_field(
                "To (email)",
                "jane.doe@business.com",
                ComposeField::RecipientEmail,
                self.recipient_email.text(),
                cx,
            ))
            .child(self.render_field(
                "Subject",
                "Subject",
                ComposeField::Subject,
                self.subject.text(),
                cx,
            ))
            .child(
                div().id("field-body").on_click(body_focus).child(
                    TextArea::new("input-body")
                        .value(self.body.text().to_string())
                        .placeholder("Write your message...")
                        .rows(10)
                        .focused(self.active_field == ComposeField::Body),
                ),
            )
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let send_handler = cx.listener(|this, _: &ClickEvent, _window, cx| {
            this.submit(cx);
        });
        let discard_handler = cx.listener(|_, _: &ClickEvent, _window, cx| {
            cx.emit(ComposeEvent::Dismiss);
        });

        let send_label = if self.sending { "Sending..." } else { "Send Now" };

        div()
            .px(px(16.0))
            .py(px(12.0))
            .border_t_1()
            .border_color(self.colors.border)
            .flex()
            .items_center()
            .gap(px(8.0))
            .child(
                Button::new("compose-send", send_label)
                    .disabled(!self.can_submit())
                    .on_click(send_handler),
            )
            .child(
                Button::new("compose-discard", "Discard")
                    .variant(ButtonVariant::Ghost)
                    .on_click(discard_handler),
            )
    }
}

impl EventEmitter<ComposeEvent> for ComposeModal {}

impl Focusable for ComposeModal {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ComposeModal {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let backdrop_handler = cx.listener(|_, _: &ClickEvent, _window, cx| {
            cx.emit(ComposeEvent::Dismiss);
        });
        let content_click = cx.listener(|_, _: &ClickEvent, _window, cx| {
            cx.stop_propagation();
        });
        // Block mouse events from passing through the backdrop
        let block_mouse_down = cx.listener(|_, _: &MouseDownEvent, _window, cx| {
            cx.stop_propagation();
        });

        let close_handler = cx.listener(|_, _: &ClickEvent, _window, cx| {
            cx.emit(ComposeEvent::Dismiss);
        });

        div()
            .id("compose-backdrop")
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .bg(gpui::Hsla {
                h: 0.0,
                s: 0.0,
                l: 0.0,
                a: 0.5,
            })
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .on_click(backdrop_handler)
            .child(
                div()
                    .id("compose-modal")
                    .w(px(520.0))
                    .bg(self.colors.background)
                    .rounded(px(12.0))
                    .border_1()
                    .border_color(self.colors.border)
                    .shadow_lg()
                    .overflow_hidden()
                    .on_click(content_click)
                    .on_mouse_down(gpui::MouseButton::Left, block_mouse_down)
                    .child(
                        div()
                            .px(px(16.0))
                            .py(px(12.0))
                            .border_b_1()
                            .border_color(self.colors.border)
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(self.colors.text_primary)
                                    .child(SharedString::from("New Message")),
                            )
                            .child(
                                IconButton::new("compose-close", IconName::Close.symbol())
                                    .size(ButtonSize::Small)
                                    .tooltip("Close")
                                    .on_click(close_handler),
                            ),
                    )
                    .child(self.render_form(cx))
                    .child(self.render_footer(cx)),
            )
    }
}
