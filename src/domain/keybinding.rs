use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,

    // Navigation / Focus
    FocusNext,
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,

    // List
    ToggleItem,
    ClearList,

    // Input
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}

/// Default binding table, checked in order.
#[must_use]
pub fn default_keybinds() -> Vec<Keybind> {
    let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
    let ctrl = |code| KeyEvent::new(code, KeyModifiers::CONTROL);

    vec![
        Keybind::new(ctrl(KeyCode::Char('c')), Action::Quit, "quit").hidden(),
        Keybind::new(ctrl(KeyCode::Char('l')), Action::ClearList, "clear all"),
        Keybind::new(plain(KeyCode::Tab), Action::FocusNext, "switch focus"),
        Keybind::new(plain(KeyCode::Esc), Action::Cancel, "cancel").hidden(),
        Keybind::new(plain(KeyCode::Up), Action::NavigateUp, "up").hidden(),
        Keybind::new(plain(KeyCode::Down), Action::NavigateDown, "down").hidden(),
        Keybind::new(plain(KeyCode::Home), Action::SelectFirst, "first").hidden(),
        Keybind::new(plain(KeyCode::End), Action::SelectLast, "last").hidden(),
        Keybind::new(plain(KeyCode::Char(' ')), Action::ToggleItem, "toggle"),
    ]
}

/// Looks up the action bound to a key event.
#[must_use]
pub fn find_action(binds: &[Keybind], key: KeyEvent) -> Option<Action> {
    binds
        .iter()
        .find(|bind| bind.key.code == key.code && bind.key.modifiers == key.modifiers)
        .map(|bind| bind.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_resolve() {
        let binds = default_keybinds();

        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(find_action(&binds, ctrl_l), Some(Action::ClearList));

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(find_action(&binds, tab), Some(Action::FocusNext));
    }

    #[test]
    fn test_unbound_key_resolves_to_none() {
        let binds = default_keybinds();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(find_action(&binds, key), None);
    }

    #[test]
    fn test_modifiers_distinguish_binds() {
        let binds = default_keybinds();
        // Plain 'l' is text input, not a clear.
        let plain_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(find_action(&binds, plain_l), None);
    }
}
