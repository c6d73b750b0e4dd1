//! Visible list computation

use crate::board::BoardError;
use crate::task::Task;

/// Shown in the list area while a request is in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown when no task matches the current search
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one!";

/// What the list area displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView<'a> {
    Loading,
    Failed(&'a BoardError),
    Empty,
    Tasks(Vec<&'a Task>),
}

/// Tasks matching `term`, newest first. Equal timestamps keep list order.
pub fn visible_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| t.matches(term)).collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}
