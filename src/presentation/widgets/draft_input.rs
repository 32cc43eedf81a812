//! Draft input widget.
//!
//! The single-line editor for not-yet-submitted todo text. The draft buffer
//! is local to this widget; it never belongs to the todo store. Submitting
//! a blank draft is silently ignored and leaves the buffer as typed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::domain::keybinding::{Action, Keybind, find_action};
use crate::presentation::theme::Theme;

const PLACEHOLDER_TEXT: &str = "What needs doing?";

/// Outcome of a key handled by the draft input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    /// Submit the draft as a new todo. Carries the buffer verbatim,
    /// untrimmed; the trim check is a validity gate only.
    Submit {
        /// Raw draft text.
        text: String,
    },
    /// Clear the whole list. The draft buffer is left untouched.
    ClearAll,
    /// Hand focus back to the list pane.
    ExitInput,
}

/// State of the draft editor.
pub struct DraftInput<'a> {
    textarea: TextArea<'a>,
    focused: bool,
}

impl DraftInput<'_> {
    #[must_use]
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PLACEHOLDER_TEXT);
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            focused: true,
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the draft buffer verbatim.
    #[must_use]
    pub fn value(&self) -> String {
        self.textarea.lines().join("")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    /// Replaces the draft buffer verbatim, no validation.
    pub fn set_value(&mut self, content: &str) {
        self.reset();
        self.textarea.insert_str(content);
    }

    fn reset(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// Handles a key while the input has focus.
    ///
    /// Enter submits when the draft is non-blank; a whitespace-only draft is
    /// discarded silently and the buffer keeps its content. The clear-all
    /// binding always fires, regardless of the buffer.
    pub fn handle_key(&mut self, key: KeyEvent, binds: &[Keybind]) -> Option<DraftAction> {
        if key.code == KeyCode::Enter {
            let text = self.value();
            if text.trim().is_empty() {
                return None;
            }
            self.reset();
            return Some(DraftAction::Submit { text });
        }

        match find_action(binds, key) {
            Some(Action::ClearList) => return Some(DraftAction::ClearAll),
            Some(Action::FocusNext) => return Some(DraftAction::ExitInput),
            Some(Action::Cancel) => {
                if self.is_empty() {
                    return Some(DraftAction::ExitInput);
                }
                self.reset();
                return None;
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.textarea.insert_char(c);
            }
            KeyCode::Char('w' | 'h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.textarea.delete_word();
            }
            KeyCode::Backspace => {
                self.textarea.delete_char();
            }
            KeyCode::Delete => {
                self.textarea.delete_next_char();
            }
            KeyCode::Left => {
                self.textarea.move_cursor(CursorMove::Back);
            }
            KeyCode::Right => {
                self.textarea.move_cursor(CursorMove::Forward);
            }
            KeyCode::Home => {
                self.textarea.move_cursor(CursorMove::Head);
            }
            KeyCode::End => {
                self.textarea.move_cursor(CursorMove::End);
            }
            _ => {}
        }

        None
    }

    /// Renders the input with a focus-dependent border.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: Theme) {
        let border_style = if self.focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.inactive)
        };

        let title = format!(" New todo ({} chars) ", self.value().width());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        if self.focused {
            self.textarea
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }

        let inner = block.inner(area);
        block.render(area, buf);
        (&self.textarea).render(inner, buf);
    }
}

impl Default for DraftInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::default_keybinds;
    use test_case::test_case;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(input: &mut DraftInput<'_>, text: &str) {
        let binds = default_keybinds();
        for c in text.chars() {
            let action = input.handle_key(press(KeyCode::Char(c)), &binds);
            assert_eq!(action, None);
        }
    }

    #[test]
    fn test_typing_edits_buffer_verbatim() {
        let mut input = DraftInput::new();
        type_text(&mut input, "  task");
        assert_eq!(input.value(), "  task");
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces only")]
    #[test_case(" \t "; "mixed whitespace")]
    fn test_blank_submit_discarded_and_buffer_retained(draft: &str) {
        let mut input = DraftInput::new();
        input.set_value(draft);

        let action = input.handle_key(press(KeyCode::Enter), &default_keybinds());

        assert_eq!(action, None);
        assert_eq!(input.value(), draft);
    }

    #[test]
    fn test_submit_emits_untrimmed_text_and_resets_buffer() {
        let mut input = DraftInput::new();
        type_text(&mut input, "  task  ");

        let action = input.handle_key(press(KeyCode::Enter), &default_keybinds());

        assert_eq!(
            action,
            Some(DraftAction::Submit {
                text: "  task  ".into()
            })
        );
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_clear_all_leaves_buffer_untouched() {
        let mut input = DraftInput::new();
        type_text(&mut input, "half-typed");

        let action = input.handle_key(ctrl('l'), &default_keybinds());

        assert_eq!(action, Some(DraftAction::ClearAll));
        assert_eq!(input.value(), "half-typed");
    }

    #[test]
    fn test_escape_clears_buffer_then_exits() {
        let mut input = DraftInput::new();
        type_text(&mut input, "abc");

        let binds = default_keybinds();
        assert_eq!(input.handle_key(press(KeyCode::Esc), &binds), None);
        assert_eq!(input.value(), "");
        assert_eq!(
            input.handle_key(press(KeyCode::Esc), &binds),
            Some(DraftAction::ExitInput)
        );
    }

    #[test]
    fn test_backspace_and_cursor_movement() {
        let mut input = DraftInput::new();
        type_text(&mut input, "abcd");

        let binds = default_keybinds();
        input.handle_key(press(KeyCode::Backspace), &binds);
        assert_eq!(input.value(), "abc");

        input.handle_key(press(KeyCode::Home), &binds);
        input.handle_key(press(KeyCode::Delete), &binds);
        assert_eq!(input.value(), "bc");
    }
}
