//! Core task types
//!
//! - `TaskId`: server-assigned identifier
//! - `Task`: a to-do item as returned by the API
//! - `NewTask`: creation payload (a task without an id)

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier assigned by the server
    pub id: TaskId,
    /// What needs to be done
    pub text: String,
    /// Completed flag
    pub status: bool,
    /// Creation time, Unix milliseconds
    #[serde(default)]
    pub created_at: i64,
}

impl Task {
    /// Copy of this task with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            status: !self.status,
            ..self.clone()
        }
    }

    /// Case-insensitive substring match against the task text.
    ///
    /// The empty term matches every task.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.text.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Payload for creating a task. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub text: String,
    pub status: bool,
    pub created_at: i64,
}

impl NewTask {
    /// Create an incomplete task stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Utc::now().timestamp_millis())
    }

    /// Create an incomplete task with a specific creation time
    pub fn at(text: impl Into<String>, created_at: i64) -> Self {
        Self {
            text: text.into(),
            status: false,
            created_at,
        }
    }

    /// Attach a server-assigned id
    pub fn with_id(self, id: TaskId) -> Task {
        Task {
            id,
            text: self.text,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
