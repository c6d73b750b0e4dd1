//! Task Board State
//!
//! The board never performs I/O. Each operation is split in two:
//!
//! - `begin_*` updates local state and returns what to send (or `None` when
//!   there is nothing to do)
//! - `finish_*` applies the request outcome
//!
//! Front ends run the request in between, which lets the native driver and
//! the WASM signals share one implementation.

use std::fmt::Display;

use super::view::{visible_tasks, BoardView};
use super::{BoardError, Operation};
use crate::task::{NewTask, Task, TaskId};

/// Client-side to-do list state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    /// Local copy of the server list, most recently added first
    tasks: Vec<Task>,
    /// Current filter text
    search_term: String,
    /// Requests started but not yet finished
    in_flight: usize,
    /// Last failed operation
    error: Option<BoardError>,
    /// Whether the add dialog is showing
    add_dialog_open: bool,
    /// Text typed into the add dialog
    draft: String,
}

impl TaskBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Whether any request is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&BoardError> {
        self.error.as_ref()
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    // ============ Load ============

    /// Start fetching the full list
    pub fn begin_load(&mut self) {
        self.start(Operation::Load);
    }

    /// Replace the local list with the server's
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<Task>, E>) {
        self.settle();
        match result {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
            }
            Err(e) => self.fail(Operation::Load, e),
        }
    }

    // ============ Add ============

    /// Start adding a task. Blank text is ignored.
    pub fn begin_add(&mut self, text: &str) -> Option<NewTask> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.start(Operation::Add);
        Some(NewTask::new(text))
    }

    /// Prepend the server's copy of the new task
    pub fn finish_add<E: Display>(&mut self, result: Result<Task, E>) {
        self.settle();
        match result {
            Ok(task) => {
                tracing::info!(id = %task.id, "Added task");
                self.tasks.insert(0, task);
                self.add_dialog_open = false;
            }
            Err(e) => self.fail(Operation::Add, e),
        }
    }

    // ============ Delete ============

    /// Start deleting a task. The request goes out even if the id is
    /// unknown locally.
    pub fn begin_delete(&mut self, id: TaskId) -> TaskId {
        self.start(Operation::Delete);
        id
    }

    /// Drop the task locally once the server confirmed
    pub fn finish_delete<E: Display>(&mut self, id: TaskId, result: Result<(), E>) {
        self.settle();
        match result {
            Ok(()) => {
                tracing::info!(%id, "Deleted task");
                self.tasks.retain(|t| t.id != id);
            }
            Err(e) => self.fail(Operation::Delete, e),
        }
    }

    // ============ Toggle ============

    /// Start toggling completion. Returns the full task to send with its
    /// status flipped, or `None` if the id is not on the board.
    pub fn begin_toggle(&mut self, id: TaskId) -> Option<Task> {
        let updated = self.task(id)?.toggled();
        self.start(Operation::Toggle);
        Some(updated)
    }

    /// Flip the local status once the server confirmed
    pub fn finish_toggle<E: Display>(&mut self, id: TaskId, result: Result<(), E>) {
        self.settle();
        match result {
            Ok(()) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.status = !task.status;
                    tracing::info!(%id, status = task.status, "Toggled task");
                }
            }
            Err(e) => self.fail(Operation::Toggle, e),
        }
    }

    // ============ Local-only ============

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Open the add dialog with an empty draft. Refused while loading.
    pub fn open_add_dialog(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.draft.clear();
        self.add_dialog_open = true;
        true
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the dialog's draft. A non-blank draft starts an add and
    /// closes the dialog; a blank one leaves everything as is.
    pub fn submit_draft(&mut self) -> Option<NewTask> {
        let draft = std::mem::take(&mut self.draft);
        match self.begin_add(&draft) {
            Some(new_task) => {
                self.add_dialog_open = false;
                Some(new_task)
            }
            None => {
                self.draft = draft;
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Tasks matching the search term, newest first
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks, &self.search_term)
    }

    /// What the list area should show right now
    pub fn view(&self) -> BoardView<'_> {
        if self.is_loading() {
            return BoardView::Loading;
        }
        if let Some(error) = &self.error {
            return BoardView::Failed(error);
        }
        let visible = self.visible();
        if visible.is_empty() {
            BoardView::Empty
        } else {
            BoardView::Tasks(visible)
        }
    }

    fn start(&mut self, op: Operation) {
        tracing::debug!(%op, "Starting operation");
        self.in_flight += 1;
        self.error = None;
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn fail(&mut self, op: Operation, err: impl Display) {
        let error = BoardError::new(op, err);
        tracing::warn!(%op, error = %error, "Operation failed");
        self.error = Some(error);
    }
}

impl From<Vec<Task>> for TaskBoard {
    fn from(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }
}
