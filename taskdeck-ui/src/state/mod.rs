//! State Management
//!
//! Reactive wrapper around the shared task board.

pub mod board;

pub use board::{provide_board_state, BoardState};
