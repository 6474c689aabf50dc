//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`] and latches
//! key presses between frames so the session receives at most one command
//! per tick.

pub mod latch;
pub mod map;

pub use tower_stack_types as types;

pub use latch::CommandLatch;
pub use map::{command_for_key, should_quit};
