//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::keybinding::Keybind;

/// One-line bar with item counts on the left and keybind hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
        }
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Builds the counts + hints bar shown under the list.
    #[must_use]
    pub fn for_list(total: usize, completed: usize, binds: &[Keybind]) -> Self {
        let hints: Vec<String> = binds
            .iter()
            .filter(|bind| bind.visible_in_bar)
            .map(|bind| format!("{}: {}", key_label(bind), bind.label))
            .collect();

        Self::new()
            .left(format!("{completed}/{total} done"))
            .right(hints.join("  "))
    }
}

fn key_label(bind: &Keybind) -> String {
    use crossterm::event::{KeyCode, KeyModifiers};

    let key = match bind.key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        other => format!("{other:?}").to_lowercase(),
    };

    if bind.key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("^{key}")
    } else {
        key
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);

        let width = area.width as usize;
        let padding = width
            .saturating_sub(self.left.len())
            .saturating_sub(self.right.len());

        let line = Line::from(vec![
            Span::styled(&self.left, style),
            Span::raw(" ".repeat(padding)),
            Span::styled(&self.right, style),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
