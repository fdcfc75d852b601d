//! Task model and the local (non-networked) task list.
//!
//! The local list follows the same add/toggle/remove semantics as the
//! relay's mirror but is not synchronized until explicitly sent.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
    /// One-way latch: once true, re-toggling `done` never grants XP again.
    #[serde(default)]
    pub rewarded: bool,
}

impl Task {
    /// Build a task from user input. Rejects text that is empty after
    /// trimming, with no state mutation.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyTaskText);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            done: false,
            rewarded: false,
        })
    }
}

/// Outcome of toggling a task's `done` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub done: bool,
    /// True only the first time the task flips to done; the caller awards
    /// task XP exactly when this is set.
    pub newly_rewarded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Validate and append a new task. Returns the created task.
    pub fn add(&mut self, text: &str) -> Result<&Task, ValidationError> {
        let task = Task::new(text)?;
        self.tasks.push(task);
        Ok(self.tasks.last().expect("just pushed"))
    }

    /// Flip `done`, latching `rewarded` on the first completion.
    pub fn toggle(&mut self, id: Uuid) -> Option<ToggleOutcome> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = !task.done;
        let newly_rewarded = task.done && !task.rewarded;
        if newly_rewarded {
            task.rewarded = true;
        }
        Some(ToggleOutcome {
            done: task.done,
            newly_rewarded,
        })
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Wholesale replacement, used when a relay snapshot arrives.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_rejects_empty_text() {
        let mut list = TaskList::new();
        assert_eq!(
            list.add("   ").unwrap_err(),
            ValidationError::EmptyTaskText
        );
        assert!(list.is_empty());
        let task = list.add("  Meditate  ").unwrap();
        assert_eq!(task.text, "Meditate");
        assert!(!task.done);
        assert!(!task.rewarded);
    }

    #[test]
    fn first_toggle_latches_reward() {
        let mut list = TaskList::new();
        let id = list.add("Write tests").unwrap().id;

        let first = list.toggle(id).unwrap();
        assert!(first.done);
        assert!(first.newly_rewarded);

        let undo = list.toggle(id).unwrap();
        assert!(!undo.done);
        assert!(!undo.newly_rewarded);

        // Re-completing never re-rewards.
        let redo = list.toggle(id).unwrap();
        assert!(redo.done);
        assert!(!redo.newly_rewarded);
    }

    #[test]
    fn remove_returns_the_task() {
        let mut list = TaskList::new();
        let id = list.add("A").unwrap().id;
        list.add("B").unwrap();
        let removed = list.remove(id).unwrap();
        assert_eq!(removed.text, "A");
        assert_eq!(list.len(), 1);
        assert!(list.remove(id).is_none());
    }

    #[test]
    fn toggle_unknown_id_is_none() {
        let mut list = TaskList::new();
        assert!(list.toggle(Uuid::new_v4()).is_none());
    }

    #[test]
    fn replace_is_wholesale() {
        let mut list = TaskList::new();
        list.add("old").unwrap();
        let incoming = vec![Task::new("new").unwrap()];
        list.replace(incoming.clone());
        assert_eq!(list.tasks(), incoming.as_slice());
    }

    #[test]
    fn rewarded_defaults_false_when_absent_in_json() {
        let json = r#"{"id":"6c1f3d8e-46aa-4cc9-a9d4-5f1f3a1b2c3d","text":"x","done":true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.rewarded);
    }
}
