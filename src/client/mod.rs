//! Task API Client
//!
//! Contract and clients for the remote to-do API.
//!
//! # Endpoints
//!
//! - `GET /tasks` - List all tasks
//! - `POST /add` - Create a task, returns it with its assigned id
//! - `DELETE /delete/{id}` - Delete a task
//! - `PUT /update/{id}` - Replace a task (text and status)
//!
//! Paths are relative to the configured base URL
//! (default `http://localhost:8080/api`).
//!
//! ## Architecture
//!
//! - **Endpoints**: URL construction shared by native and WASM front ends
//! - **TaskApi**: async seam consumed by the board driver
//! - **HttpTaskApi**: `reqwest` implementation (native only)

mod endpoints;
mod error;
#[cfg(feature = "cli")]
mod http;
#[cfg(test)]
pub(crate) mod memory;

pub use endpoints::{Endpoint, Endpoints, DEFAULT_API_BASE};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "cli")]
pub use http::{ClientConfig, HttpTaskApi};

use async_trait::async_trait;

use crate::task::{NewTask, Task, TaskId};

/// Remote task store as seen by the client
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch every task
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// Create a task. The returned task carries the server-assigned id.
    async fn add_task(&self, task: &NewTask) -> ApiResult<Task>;

    /// Delete a task by id
    async fn delete_task(&self, id: TaskId) -> ApiResult<()>;

    /// Replace the stored task with `task` (matched on `task.id`)
    async fn update_task(&self, task: &Task) -> ApiResult<()>;
}
