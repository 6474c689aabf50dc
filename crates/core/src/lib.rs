//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! block-stacking game. It has **no dependencies** on rendering, terminals
//! or input devices:
//!
//! - **Deterministic**: the same sequence of `(elapsed, command)` ticks always
//!   produces the same tower
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: any front end can drive it by calling
//!   [`GameSession::update`] once per frame
//!
//! # Module Structure
//!
//! - [`block`]: a single rectangle with position, color and horizontal motion
//! - [`tower`]: the stack of placed blocks, bottom (base) first
//! - [`pending`]: FIFO of pre-generated upcoming blocks (preview)
//! - [`history`]: append-only log of finished games
//! - [`scoring`]: perfect/accuracy points, combos and the speed ramp
//! - [`config`]: the fixed rule set (geometry, speeds, palette)
//! - [`session`]: the state machine tying everything together
//!
//! # Game Rules
//!
//! - A block slides left and right above the tower, bouncing at the edges
//! - Dropping it keeps only the part that overlaps the block below
//! - Missing the tower, or overlapping less than 10% of the block, ends the game
//! - Near-exact drops are *perfect* and build a combo worth extra points
//! - Every fifth tower block makes the sliding faster
//!
//! # Example
//!
//! ```
//! use tower_stack_core::{GameConfig, GameSession};
//! use tower_stack_core::types::GameCommand;
//!
//! let mut game = GameSession::new(GameConfig::default());
//! game.start()?;
//!
//! // The block starts at x=0 and slides right at 150 units/second:
//! // two seconds put it exactly over the base block.
//! game.update(2.0, None)?;
//! game.update(0.0, Some(GameCommand::Drop))?;
//!
//! assert_eq!(game.score(), 60); // perfect drop, combo x1
//! assert_eq!(game.display_height(), 1);
//! # Ok::<(), tower_stack_core::CoreError>(())
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. Front ends pass the wall-clock seconds
//! elapsed since the previous frame to [`GameSession::update`].

pub mod block;
pub mod config;
pub mod error;
pub mod history;
pub mod pending;
pub mod scoring;
pub mod session;
pub mod tower;

pub use tower_stack_types as types;

// Re-export commonly used types for convenience
pub use block::{horizontal_overlap, Block};
pub use config::GameConfig;
pub use error::CoreError;
pub use history::{ScoreEntry, ScoreHistory};
pub use pending::{BatchSpec, PendingQueue};
pub use scoring::{score_drop, DropScore};
pub use session::GameSession;
pub use tower::Tower;
