//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to the
//! terminal, redrawing only the cells that changed since the last frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep world-to-terminal scaling in one place ([`GameView`])
//! - Allocation-free steady state: reuse one framebuffer per frame

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tower_stack_core as core;
pub use tower_stack_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use palette::block_rgb;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
