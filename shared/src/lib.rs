use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod email;
pub mod store;

pub use email::{
    ErrorResponse, RelayPayload, SendEmailPayload, SendEmailRequest, SendEmailResponse, ValidationError,
};
pub use store::TaskList;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }
}

/// Completion state as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub text: String,
    pub status: TaskStatus,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            status: task.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new("Buy milk".to_string());
        assert!(!task.completed);
        assert_eq!(task.status(), TaskStatus::Pending);
    }

    #[test]
    fn status_serializes_as_literal_strings() {
        let done = serde_json::to_string(&TaskStatus::Completed).unwrap();
        let open = serde_json::to_string(&TaskStatus::Pending).unwrap();
        assert_eq!(done, "\"Completed\"");
        assert_eq!(open, "\"Pending\"");
    }

    #[test]
    fn summary_maps_completion_to_status() {
        let mut task = Task::new("Walk dog".to_string());
        task.completed = true;
        let summary = TaskSummary::from(&task);
        assert_eq!(summary.text, "Walk dog");
        assert_eq!(summary.status, TaskStatus::Completed);
    }
}
