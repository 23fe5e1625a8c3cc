//! Input components.
//!
//! Text fields are rendered as display components while the actual keyboard
//! capture happens at the owning view level: each view keeps a [`TextBuffer`]
//! per field and routes key events into the buffer for the active field.

use gpui::{
    div, px, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled,
};

use crate::ui::theme::ThemeColors;

/// A text buffer with cursor position tracking.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// The text content.
    text: String,
    /// Cursor position in bytes.
    cursor: usize,
}

impl TextBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the buffer contains only whitespace (or nothing).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor (backspace).
    pub fn backspace(&mut self) -> bool {
        if self.cursor > 0 {
            let prev = self.prev_char_boundary();
            self.text.remove(prev);
            self.cursor = prev;
            true
        } else {
            false
        }
    }

    /// Delete character at cursor (delete key).
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Move cursor left by one character.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary();
        }
    }

    /// Move cursor right by one character.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_char_boundary();
        }
    }

    /// Move cursor to the start.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Delete the word before the cursor.
    pub fn delete_word_backward(&mut self) {
        while self.cursor > 0
            && self
                .char_before_cursor()
                .map(|c| c.is_whitespace())
                .unwrap_or(false)
        {
            self.backspace();
        }
        while self.cursor > 0
            && self
                .char_before_cursor()
                .map(|c| !c.is_whitespace())
                .unwrap_or(false)
        {
            self.backspace();
        }
    }

    fn char_before_cursor(&self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        self.text[..self.cursor].chars().last()
    }

    fn prev_char_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

/// Result of processing a key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInputResult {
    /// The key was consumed and the text changed.
    TextChanged,
    /// The key was consumed but text didn't change.
    Consumed,
    /// The key should trigger submit (Enter).
    Submit,
    /// The key should trigger cancel (Escape).
    Cancel,
    /// The key was not handled.
    Ignored,
}

impl TextBuffer {
    /// Process a key input. Returns how the key was handled.
    ///
    /// Designed to be called from the owning view's key handler.
    pub fn process_key(&mut self, key: &str, shift: bool, ctrl: bool, cmd: bool) -> KeyInputResult {
        match key {
            "backspace" => {
                if ctrl || cmd {
                    self.delete_word_backward();
                } else {
                    self.backspace();
                }
                KeyInputResult::TextChanged
            }
            "delete" => {
                self.delete();
                KeyInputResult::TextChanged
            }
            "left" => {
                self.move_left();
                KeyInputResult::Consumed
            }
            "right" => {
                self.move_right();
                KeyInputResult::Consumed
            }
            "home" => {
                self.move_to_start();
                KeyInputResult::Consumed
            }
            "end" => {
                self.move_to_end();
                KeyInputResult::Consumed
            }
            "enter" => KeyInputResult::Submit,
            "escape" => KeyInputResult::Cancel,
            "tab" => KeyInputResult::Ignored, // Let the view handle tab
            "space" => {
                self.insert_char(' ');
                KeyInputResult::TextChanged
            }
            _ => {
                if key.len() == 1 {
                    if let Some(c) = key.chars().next() {
                        if c.is_ascii_graphic() {
                            let c = if shift { c.to_ascii_uppercase() } else { c };
                            self.insert_char(c);
                            return KeyInputResult::TextChanged;
                        }
                    }
                }
                KeyInputResult::Ignored
            }
        }
    }
}

/// A single-line text input field.
#[derive(IntoElement)]
pub struct TextInput {
    id: ElementId,
    value: SharedString,
    placeholder: SharedString,
    focused: bool,
}

impl TextInput {
    /// Create a new text input.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            placeholder: SharedString::default(),
            focused: false,
        }
    }

    /// Set the current value.
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mark this input as the active field.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::light();

        let is_empty = self.value.is_empty();
        let display_text = if is_empty { self.placeholder } else { self.value };
        let text_color = if is_empty {
            colors.text_muted
        } else {
            colors.text_primary
        };
        let border_color = if self.focused {
            colors.border_focused
        } else {
            colors.border
        };

        div()
            .id(self.id)
            .h(px(32.0))
            .w_full()
            .px(px(12.0))
            .flex()
            .items_center()
            .bg(colors.background)
            .border_1()
            .border_color(border_color)
            .rounded(px(6.0))
            .text_sm()
            .text_color(text_color)
            .cursor_text()
            .child(display_text)
    }
}

/// A multiline text area.
#[derive(IntoElement)]
pub struct TextArea {
    id: ElementId,
    value: SharedString,
    placeholder: SharedString,
    rows: u32,
    focused: bool,
}

impl TextArea {
    /// Create a new text area.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            placeholder: SharedString::default(),
            rows: 4,
            focused: false,
        }
    }

    /// Set the current value.
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the number of visible rows.
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Mark this area as the active field.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl RenderOnce for TextArea {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::light();
        let line_height = 20.0;
        let height = (self.rows as f32 * line_height) + 16.0;

        let is_empty = self.value.is_empty();
        let display_text = if is_empty { self.placeholder } else { self.value };
        let text_color = if is_empty {
            colors.text_muted
        } else {
            colors.text_primary
        };
        let border_color = if self.focused {
            colors.border_focused
        } else {
            colors.border
        };

        div()
            .id(self.id)
            .min_h(px(height))
            .w_full()
            .p(px(12.0))
            .bg(colors.background)
            .border_1()
            .border_color(border_color)
            .rounded(px(6.0))
            .text_sm()
            .text_color(text_color)
            .cursor_text()
            .child(display_text)
    }
}
