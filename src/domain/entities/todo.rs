//! Todo item entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item.
///
/// Allocated monotonically by the state container; never reused within a
/// process lifetime, even after the list is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(pub u64);

impl TodoId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single todo list entry.
///
/// `text` is stored verbatim as the user supplied it; surrounding
/// whitespace is never stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Item identifier.
    pub id: TodoId,
    /// Raw item text.
    pub text: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed item.
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_starts_incomplete() {
        let todo = Todo::new(TodoId(7), "water plants");
        assert_eq!(todo.id, TodoId(7));
        assert_eq!(todo.text, "water plants");
        assert!(!todo.completed);
    }

    #[test]
    fn test_text_kept_verbatim() {
        let todo = Todo::new(TodoId(0), "  padded  ");
        assert_eq!(todo.text, "  padded  ");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TodoId(42).to_string(), "42");
        assert_eq!(TodoId::from(3).as_u64(), 3);
    }
}
