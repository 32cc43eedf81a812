//! Todo list pane.
//!
//! Renders the store's items and turns selection gestures into toggle
//! actions. Selection is presentation-local; the pane never mutates the
//! list itself.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::domain::entities::{Todo, TodoId};
use crate::domain::keybinding::{Action, Keybind, find_action};
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;

/// Outcome of a key handled by the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoPaneAction {
    /// Toggle the completion flag of the item with this id.
    Toggle(TodoId),
    /// Clear the whole list.
    ClearAll,
    /// Hand focus back to the draft input.
    ExitList,
    /// Quit the application.
    Quit,
}

/// Selection state for the pane.
#[derive(Debug, Default)]
pub struct TodoPaneState {
    selected: Option<usize>,
    scroll_offset: usize,
}

impl TodoPaneState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected row index, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Drops selections that point past the end of the list. Called after
    /// every store dispatch since clears shrink the list under us.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            self.scroll_offset = 0;
        } else if let Some(index) = self.selected
            && index >= len
        {
            self.selected = Some(len - 1);
        }
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) if index + 1 < len => index + 1,
            Some(index) => index,
            None => 0,
        });
    }

    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => index.saturating_sub(1),
            None => len - 1,
        });
    }

    /// Moves the selection one row down (mouse wheel path).
    pub fn scroll_down(&mut self, len: usize) {
        self.select_next(len);
    }

    /// Moves the selection one row up (mouse wheel path).
    pub fn scroll_up(&mut self, len: usize) {
        self.select_previous(len);
    }

    /// Handles a key while the pane has focus.
    pub fn handle_key(&mut self, key: KeyEvent, binds: &[Keybind], items: &[Todo]) -> Option<TodoPaneAction> {
        if EventHandler::is_quit_event(&key) {
            return Some(TodoPaneAction::Quit);
        }
        if EventHandler::is_submit_event(&key) {
            return self.selected_id(items).map(TodoPaneAction::Toggle);
        }

        match find_action(binds, key)? {
            Action::NavigateDown => self.select_next(items.len()),
            Action::NavigateUp => self.select_previous(items.len()),
            Action::SelectFirst => {
                if !items.is_empty() {
                    self.selected = Some(0);
                }
            }
            Action::SelectLast => {
                if !items.is_empty() {
                    self.selected = Some(items.len() - 1);
                }
            }
            Action::ToggleItem => {
                return self.selected_id(items).map(TodoPaneAction::Toggle);
            }
            Action::ClearList => return Some(TodoPaneAction::ClearAll),
            Action::FocusNext | Action::Cancel => return Some(TodoPaneAction::ExitList),
            Action::Quit => return Some(TodoPaneAction::Quit),
        }

        None
    }

    fn selected_id(&self, items: &[Todo]) -> Option<TodoId> {
        self.selected.and_then(|index| items.get(index)).map(|todo| todo.id)
    }
}

/// Render-side view over the pane.
pub struct TodoPane<'a> {
    items: &'a [Todo],
    focused: bool,
    theme: Theme,
}

impl<'a> TodoPane<'a> {
    #[must_use]
    pub fn new(items: &'a [Todo], focused: bool, theme: Theme) -> Self {
        Self {
            items,
            focused,
            theme,
        }
    }

    /// Renders the list with the pane's selection state.
    pub fn render(self, area: Rect, buf: &mut Buffer, state: &mut TodoPaneState) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.inactive)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Todos ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            let empty = Paragraph::new("Nothing yet. Type above and press Enter.")
                .style(Style::default().fg(self.theme.done));
            empty.render(inner, buf);
            return;
        }

        let visible_rows = inner.height as usize;
        if let Some(selected) = state.selected {
            if selected < state.scroll_offset {
                state.scroll_offset = selected;
            } else if visible_rows > 0 && selected >= state.scroll_offset + visible_rows {
                state.scroll_offset = selected + 1 - visible_rows;
            }
        }

        let lines: Vec<Line<'_>> = self
            .items
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(visible_rows)
            .map(|(index, todo)| self.render_row(index, todo, state, inner.width as usize))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_row(
        &self,
        index: usize,
        todo: &Todo,
        state: &TodoPaneState,
        width: usize,
    ) -> Line<'_> {
        let marker = if todo.completed { "[x]" } else { "[ ]" };
        let selected = state.selected == Some(index) && self.focused;

        let mut text_style = if todo.completed {
            Style::default()
                .fg(self.theme.done)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        if selected {
            text_style = text_style.add_modifier(Modifier::REVERSED);
        }

        let prefix = format!("{marker} ");
        let budget = width.saturating_sub(prefix.len());
        let text = truncate_to_width(&todo.text, budget);

        Line::from(vec![
            Span::styled(prefix, text_style),
            Span::styled(text, text_style),
        ])
    }
}

/// Cuts `text` to at most `width` terminal columns, appending an ellipsis
/// when anything was dropped.
fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        out.push(ch);
        used += ch_width;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use test_case::test_case;

    fn items(n: u64) -> Vec<Todo> {
        (0..n).map(|i| Todo::new(TodoId(i), format!("item {i}"))).collect()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let binds = crate::domain::keybinding::default_keybinds();
        let todos = items(2);
        let mut state = TodoPaneState::new();

        state.handle_key(press(KeyCode::Down), &binds, &todos);
        assert_eq!(state.selected(), Some(0));
        state.handle_key(press(KeyCode::Down), &binds, &todos);
        state.handle_key(press(KeyCode::Down), &binds, &todos);
        assert_eq!(state.selected(), Some(1));

        state.handle_key(press(KeyCode::Up), &binds, &todos);
        state.handle_key(press(KeyCode::Up), &binds, &todos);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_toggle_emits_selected_id() {
        let binds = crate::domain::keybinding::default_keybinds();
        let todos = items(3);
        let mut state = TodoPaneState::new();

        state.handle_key(press(KeyCode::End), &binds, &todos);
        let action = state.handle_key(press(KeyCode::Char(' ')), &binds, &todos);
        assert_eq!(action, Some(TodoPaneAction::Toggle(TodoId(2))));

        // Enter toggles too.
        let action = state.handle_key(press(KeyCode::Enter), &binds, &todos);
        assert_eq!(action, Some(TodoPaneAction::Toggle(TodoId(2))));
    }

    #[test]
    fn test_toggle_without_selection_is_noop() {
        let binds = crate::domain::keybinding::default_keybinds();
        let todos = items(3);
        let mut state = TodoPaneState::new();

        let action = state.handle_key(press(KeyCode::Char(' ')), &binds, &todos);
        assert_eq!(action, None);
    }

    #[test]
    fn test_clamp_after_clear() {
        let mut state = TodoPaneState::new();
        state.selected = Some(4);

        state.clamp(2);
        assert_eq!(state.selected(), Some(1));

        state.clamp(0);
        assert_eq!(state.selected(), None);
    }

    #[test_case("short", 20, "short"; "fits")]
    #[test_case("a very long todo text", 8, "a very …"; "cut with ellipsis")]
    fn test_truncate_to_width(text: &str, width: usize, expected: &str) {
        assert_eq!(truncate_to_width(text, width), expected);
    }
}
