//! Domain layer with core business entities.

/// Entity definitions.
pub mod entities;
/// Keybinding definitions.
pub mod keybinding;

pub use entities::{Todo, TodoId};
