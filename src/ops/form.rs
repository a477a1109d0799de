use crate::model::task::{Board, TaskId};
use crate::ops::board_ops;

/// Error type for form submission
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a task description is required")]
    Empty,
}

/// Submit the entry field: enforce the required rule, then hand the text to
/// the board. The text is passed through raw — leading and trailing
/// whitespace the user typed is kept.
///
/// The caller owns the field's display state: clear the buffer on `Ok`,
/// show the required indicator on `Err`.
pub fn submit(board: &mut Board, raw_input: &str) -> Result<TaskId, FormError> {
    if raw_input.is_empty() {
        return Err(FormError::Empty);
    }
    Ok(board_ops::create(board, raw_input.to_string()))
}
