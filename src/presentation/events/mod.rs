//! Event handling.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// How long a single poll waits before giving the draw loop a turn.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Terminal event handler.
///
/// Polls synchronously; every event is handled to completion before the
/// next one is read, so all state updates are serialized by construction.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next terminal event, returning `None` on timeout.
    ///
    /// # Errors
    /// Returns IO error if polling fails.
    pub fn poll(&self) -> std::io::Result<Option<Event>> {
        if event::poll(self.poll_timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Checks if key is a quit event ('q' or Ctrl+C).
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => key.modifiers == KeyModifiers::NONE,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, true; "plain q")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, true; "ctrl c")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::CONTROL, false; "ctrl q unbound")]
    #[test_case(KeyCode::Char('a'), KeyModifiers::NONE, false; "plain letter")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, false; "enter")]
    fn test_quit_event_classification(code: KeyCode, modifiers: KeyModifiers, expected: bool) {
        assert_eq!(
            EventHandler::is_quit_event(&make_key_event(code, modifiers)),
            expected
        );
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }
}
