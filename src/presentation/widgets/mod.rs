mod draft_input;
mod status_bar;
mod todo_pane;

pub use draft_input::{DraftAction, DraftInput};
pub use status_bar::StatusBar;
pub use todo_pane::{TodoPane, TodoPaneAction, TodoPaneState};
