use chrono::Utc;

use crate::model::task::{Board, Task, TaskId};

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Issue a fresh id from the millisecond clock.
///
/// Creations are user-paced, but two inside the same millisecond would share
/// a timestamp, so the id is bumped past the last one issued.
fn next_id(board: &mut Board) -> TaskId {
    let now_ms = Utc::now().timestamp_millis();
    let id = now_ms.max(board.last_id + 1);
    board.last_id = id;
    TaskId(id)
}

// ---------------------------------------------------------------------------
// Board mutations
// ---------------------------------------------------------------------------

/// Append a new open task with the given description.
/// Returns the assigned id.
pub fn create(board: &mut Board, description: String) -> TaskId {
    let id = next_id(board);
    board.tasks.push(Task::new(id, description));
    id
}

/// Flip the completion flag on the matching task. All other tasks and the
/// list order are untouched. An unknown id is ignored: ids only ever come
/// from the currently rendered list, so they cannot go stale mid-session.
pub fn toggle(board: &mut Board, id: TaskId) {
    if let Some(task) = board.find_mut(id) {
        task.completed = !task.completed;
    }
}

/// Remove the matching task, keeping the rest in order.
/// An unknown id is ignored.
pub fn delete(board: &mut Board, id: TaskId) {
    board.tasks.retain(|t| t.id != id);
}
