//! Board error types

use std::fmt;
use thiserror::Error;

/// A user operation that talks to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Delete,
    Toggle,
}

impl Operation {
    /// Gerund phrase used in error messages
    pub fn describe(&self) -> &'static str {
        match self {
            Operation::Load => "fetching tasks",
            Operation::Add => "adding task",
            Operation::Delete => "deleting task",
            Operation::Toggle => "updating task",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Load => write!(f, "load"),
            Operation::Add => write!(f, "add"),
            Operation::Delete => write!(f, "delete"),
            Operation::Toggle => write!(f, "toggle"),
        }
    }
}

/// Failure recorded on the board after an operation's request failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error {}: {message}", .op.describe())]
pub struct BoardError {
    pub op: Operation,
    pub message: String,
}

impl BoardError {
    pub fn new(op: Operation, message: impl fmt::Display) -> Self {
        Self {
            op,
            message: message.to_string(),
        }
    }
}
