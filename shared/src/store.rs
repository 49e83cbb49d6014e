//! Session-local task list and the pending form inputs around it.
//!
//! Every mutation is synchronous. The only asynchronous operation, sending
//! the list by email, is split into [`TaskList::begin_send`] and
//! [`TaskList::finish_send`] so the caller owns the network round trip while
//! the store owns the in-progress guard.

use uuid::Uuid;

use crate::{SendEmailRequest, Task, TaskSummary};

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    new_task_text: String,
    email: String,
    sending: bool,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    pub fn new_task_text(&self) -> &str {
        &self.new_task_text
    }

    pub fn set_new_task_text(&mut self, text: String) {
        self.new_task_text = text;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.email.is_empty() && !self.sending
    }

    /// Appends a task with the trimmed `text` and clears the new-task input.
    ///
    /// Blank input is ignored and leaves the input untouched.
    pub fn add_task(&mut self, text: &str) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.push(task);
        self.new_task_text.clear();
        Some(id)
    }

    /// Adds a task from the pending new-task input.
    pub fn submit_new_task(&mut self) -> Option<Uuid> {
        let text = std::mem::take(&mut self.new_task_text);
        let added = self.add_task(&text);
        if added.is_none() {
            self.new_task_text = text;
        }
        added
    }

    /// Keyboard path of the new-task form: Enter submits, other keys do nothing.
    pub fn new_task_key(&mut self, key: &str) -> Option<Uuid> {
        if key == "Enter" {
            self.submit_new_task()
        } else {
            None
        }
    }

    pub fn toggle_task(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    pub fn delete_task(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Marks a send as in progress and returns the snapshot to post.
    ///
    /// Returns `None` without touching any state when there is no email,
    /// no task, or a send is already running.
    pub fn begin_send(&mut self, date: impl Into<String>) -> Option<SendEmailRequest> {
        if self.email.is_empty() || self.tasks.is_empty() || self.sending {
            return None;
        }

        self.sending = true;
        Some(SendEmailRequest {
            email: self.email.clone(),
            tasks: self.tasks.iter().map(TaskSummary::from).collect(),
            date: date.into(),
        })
    }

    /// Ends the send started by [`begin_send`](Self::begin_send).
    ///
    /// The in-progress flag is cleared on every outcome. The email input is
    /// cleared only on success so a failed send can be retried.
    pub fn finish_send<E>(&mut self, outcome: &Result<(), E>) {
        self.sending = false;
        if outcome.is_ok() {
            self.email.clear();
        }
    }
}
