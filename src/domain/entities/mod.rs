//! Domain entity definitions.

mod todo;

pub use todo::{Todo, TodoId};
