//! Todo state container.
//!
//! `TodoState` owns the ordered item list and the id allocator. Every update
//! operation is a pure function producing a fresh snapshot; the caller's
//! previous snapshot is never altered. `TodoStore` holds the current
//! snapshot and applies intents one at a time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{Todo, TodoId};

/// A named request against the state container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Append a new item carrying the given text.
    Add {
        /// Raw item text, stored verbatim.
        text: String,
    },
    /// Flip the completion flag of the matching item.
    Toggle {
        /// Identifier of the item to toggle.
        id: TodoId,
    },
    /// Discard all items.
    Clear,
}

/// Immutable snapshot of the todo list plus its id allocator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    items: Vec<Todo>,
    next_id: u64,
}

impl TodoState {
    /// Creates an empty state with the allocator at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of completed items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }

    /// Returns the id the next add will allocate.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Appends a new item carrying `text` verbatim.
    ///
    /// Accepts any string, empty included; rejecting blank input is the
    /// caller's policy, not the container's. The new item takes the current
    /// allocator value as its id and the returned snapshot's allocator is
    /// advanced by one. Always succeeds.
    #[must_use]
    pub fn add(&self, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        let id = TodoId(next.next_id);
        next.next_id = next.next_id.checked_add(1).expect("todo id overflow");
        next.items.push(Todo::new(id, text));
        next
    }

    /// Flips the completion flag of the item with `id`.
    ///
    /// An unknown id is a no-op: the returned snapshot equals the input.
    /// Only the first match in list order is flipped.
    #[must_use]
    pub fn toggle(&self, id: TodoId) -> Self {
        let mut next = self.clone();
        if let Some(todo) = next.items.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
        }
        next
    }

    /// Discards all items. The allocator is untouched, so ids of cleared
    /// items are never reissued.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self {
            items: Vec::new(),
            next_id: self.next_id,
        }
    }

    /// Applies an intent, returning the resulting snapshot.
    ///
    /// Total over all intents; nothing is ever rejected.
    #[must_use]
    pub fn apply(&self, intent: &Intent) -> Self {
        match intent {
            Intent::Add { text } => self.add(text.clone()),
            Intent::Toggle { id } => self.toggle(*id),
            Intent::Clear => self.clear(),
        }
    }
}

/// Owner of the current state snapshot.
///
/// A fresh store per test gives an isolated allocator; there is no global
/// counter anywhere.
#[derive(Debug, Default)]
pub struct TodoStore {
    state: TodoState,
}

impl TodoStore {
    /// Creates a store with an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &TodoState {
        &self.state
    }

    /// Applies an intent to the current snapshot and installs the result.
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, len = self.state.len(), "dispatching intent");
        self.state = self.state.apply(&intent);
    }
}
