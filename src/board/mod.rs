//! Task Board
//!
//! Client-side state for the to-do list and its synchronization contract
//! with the remote API.
//!
//! - **state**: `TaskBoard`, a sans-IO state machine split into
//!   `begin_*` / `finish_*` steps around each request
//! - **view**: visible-list computation (search filter + newest-first sort)
//! - **sync**: sequential async driver pairing each step with a `TaskApi` call
//! - **error**: user-facing operation failures
//!
//! # Flow
//!
//! ```text
//! user action → begin_* (loading, request payload)
//!             → request via TaskApi / gloo-net
//!             → finish_* (apply server outcome, clear loading)
//! ```
//!
//! Local state only changes after the server confirms, so a failed request
//! leaves the list as it was.

pub mod error;
pub mod state;
pub mod sync;
pub mod view;

pub use error::{BoardError, Operation};
pub use state::TaskBoard;
pub use view::{visible_tasks, BoardView, EMPTY_MESSAGE, LOADING_MESSAGE};
