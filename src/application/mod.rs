//! Application layer with the todo state container.

/// State container and intent vocabulary.
pub mod store;

pub use store::{Intent, TodoState, TodoStore};
