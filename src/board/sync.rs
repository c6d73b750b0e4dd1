//! Sequential Board Driver
//!
//! Runs each board operation end to end against a `TaskApi`: begin, await
//! the request, finish. Operations are awaited one at a time.

use super::{BoardError, TaskBoard};
use crate::client::TaskApi;
use crate::task::TaskId;

/// Outcome of a driven operation: the recorded error, if any
pub type SyncResult = Result<(), BoardError>;

fn outcome(board: &TaskBoard) -> SyncResult {
    match board.error() {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}

/// Fetch the full list into the board
pub async fn load<A: TaskApi + ?Sized>(board: &mut TaskBoard, api: &A) -> SyncResult {
    board.begin_load();
    let result = api.list_tasks().await;
    board.finish_load(result);
    outcome(board)
}

/// Add a task. Blank text does nothing and succeeds.
pub async fn add<A: TaskApi + ?Sized>(board: &mut TaskBoard, api: &A, text: &str) -> SyncResult {
    let Some(new_task) = board.begin_add(text) else {
        return Ok(());
    };
    let result = api.add_task(&new_task).await;
    board.finish_add(result);
    outcome(board)
}

/// Delete a task by id
pub async fn delete<A: TaskApi + ?Sized>(board: &mut TaskBoard, api: &A, id: TaskId) -> SyncResult {
    let id = board.begin_delete(id);
    let result = api.delete_task(id).await;
    board.finish_delete(id, result);
    outcome(board)
}

/// Toggle completion. An id not on the board does nothing and succeeds.
pub async fn toggle<A: TaskApi + ?Sized>(board: &mut TaskBoard, api: &A, id: TaskId) -> SyncResult {
    let Some(updated) = board.begin_toggle(id) else {
        tracing::debug!(%id, "Toggle ignored, task not on board");
        return Ok(());
    };
    let result = api.update_task(&updated).await;
    board.finish_toggle(id, result);
    outcome(board)
}

/// Submit the add dialog's draft
pub async fn submit_draft<A: TaskApi + ?Sized>(board: &mut TaskBoard, api: &A) -> SyncResult {
    let Some(new_task) = board.submit_draft() else {
        return Ok(());
    };
    let result = api.add_task(&new_task).await;
    board.finish_add(result);
    outcome(board)
}
