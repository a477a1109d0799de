use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a task, unique within one session.
///
/// Ids come from the millisecond clock, bumped past the previously issued id
/// so two creations inside the same millisecond stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Entered text, stored raw. Non-empty at creation (the form enforces it).
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create a new open task with the given id and description
    pub fn new(id: TaskId, description: String) -> Self {
        Task {
            id,
            description,
            completed: false,
        }
    }
}

/// The ordered, session-lifetime collection of tasks.
///
/// Constructed empty when the session starts and dropped with the session.
/// All mutation goes through `ops::board_ops` — the board itself is plain
/// owned data with no interior mutability.
#[derive(Debug, Default)]
pub struct Board {
    /// Tasks in insertion order (new tasks are appended)
    pub tasks: Vec<Task>,
    /// Highest id issued so far, for monotonic id assignment
    pub last_id: i64,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Count of tasks not yet completed
    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Count of completed tasks
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new(TaskId(1), "Buy milk".into());
        assert_eq!(task.id, TaskId(1));
        assert_eq!(task.description, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_board_starts_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert_eq!(board.open_count(), 0);
        assert_eq!(board.done_count(), 0);
    }

    #[test]
    fn test_find_by_id() {
        let mut board = Board::new();
        board.tasks.push(Task::new(TaskId(1), "First".into()));
        board.tasks.push(Task::new(TaskId(2), "Second".into()));

        assert_eq!(board.find(TaskId(2)).unwrap().description, "Second");
        assert!(board.find(TaskId(99)).is_none());
    }

    #[test]
    fn test_counts_split_by_completion() {
        let mut board = Board::new();
        board.tasks.push(Task::new(TaskId(1), "First".into()));
        let mut done = Task::new(TaskId(2), "Second".into());
        done.completed = true;
        board.tasks.push(done);

        assert_eq!(board.open_count(), 1);
        assert_eq!(board.done_count(), 1);
    }

    #[test]
    fn test_task_id_json_is_transparent() {
        let id: TaskId = serde_json::from_str("42").unwrap();
        assert_eq!(id, TaskId(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(TaskId(7), "Water plants".into());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "description": "Water plants",
                "completed": false,
            })
        );
    }
}
