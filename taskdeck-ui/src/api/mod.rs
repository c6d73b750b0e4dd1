//! API Access
//!
//! Browser-side calls to the task API.

pub mod client;

pub use client::{add_task, delete_task, fetch_tasks, update_task};
