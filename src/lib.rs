//! # Taskdeck
//!
//! Client for a remote to-do list API: a task board state machine shared by
//! a terminal front end and a Leptos WASM front end (`taskdeck-ui`).
//!
//! ## Features
//!
//! - **Server-confirmed updates**: local state changes only after the API
//!   answers, so failures never need rolling back
//! - **Search**: case-insensitive filtering, newest tasks first
//! - **Two front ends**: `taskdeck` CLI/shell and the browser UI
//!
//! ## Modules
//!
//! - [`task`]: Task model and wire format
//! - [`board`]: Client-side state machine and sequential driver
//! - [`client`]: API contract and HTTP client
//! - [`render`]: Terminal rendering
//! - `config`, `logging`, `shell`: native front end (feature `cli`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskdeck::board::{sync, TaskBoard};
//! use taskdeck::client::{ClientConfig, HttpTaskApi};
//! use taskdeck::render::render_table;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpTaskApi::new(&ClientConfig::default())?;
//!     let mut board = TaskBoard::new();
//!
//!     sync::load(&mut board, &api).await?;
//!     sync::add(&mut board, &api, "Buy milk").await?;
//!
//!     board.set_search_term("milk");
//!     println!("{}", render_table(&board));
//!
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod client;
pub mod render;
pub mod task;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod shell;

// Re-export top-level types for convenience
pub use board::{BoardError, BoardView, Operation, TaskBoard};

pub use client::{ApiError, ApiResult, Endpoint, Endpoints, TaskApi, DEFAULT_API_BASE};

#[cfg(feature = "cli")]
pub use client::{ClientConfig, HttpTaskApi};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig};

pub use render::OutputFormat;

pub use task::{NewTask, Task, TaskId};
