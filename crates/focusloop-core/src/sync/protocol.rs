//! Wire protocol between viewers and the relay.
//!
//! One JSON object per line. No authentication, no sequencing, no schema
//! versioning; a malformed line is logged and skipped, never fatal.

use serde::{Deserialize, Serialize};

use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message {
    /// Relay → viewer: full authoritative snapshot.
    Tasks { tasks: Vec<Task> },
    /// Viewer → relay: append one task to the mirror.
    AddTask { task: Task },
    /// Viewer → relay: wholesale replacement, used for toggle/remove/edit.
    ReplaceTasks { tasks: Vec<Task> },
}

impl Message {
    /// Encode as a newline-terminated JSON line.
    pub fn to_line(&self) -> String {
        let mut line = serde_json::to_string(self).unwrap_or_default();
        line.push('\n');
        line
    }

    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
