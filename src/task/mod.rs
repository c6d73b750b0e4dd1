//! Task Model
//!
//! Wire and in-memory representation of a to-do item:
//!
//! - **types**: `Task`, `TaskId`, and the `NewTask` creation payload
//!
//! Field names follow the remote API's JSON (`createdAt` is camel-cased on
//! the wire).

pub mod types;

pub use types::{NewTask, Task, TaskId};
