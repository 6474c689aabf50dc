//! Core types module - shared constants and plain data types
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is pure data with no external dependencies, so it can be
//! shared by the gameplay core, the input mapping and the terminal renderer.
//!
//! # World Geometry
//!
//! The game world is a fixed 800x600 plane measured in world units
//! ("pixels"). The x axis grows to the right and the y axis grows downward,
//! so a block stacked on the tower has a *smaller* y than the one below it.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 800 | Horizontal extent; moving blocks bounce at 0 and here |
//! | `SCREEN_HEIGHT` | 600 | Vertical extent |
//! | `BLOCK_HEIGHT` | 30 | Height of every block |
//! | `INITIAL_BLOCK_WIDTH` | 200 | Width of the base block and the first blocks |
//! | `BASE_MARGIN` | 100 | Distance from the bottom edge to the base block's top |
//!
//! # Motion and Difficulty
//!
//! - `INITIAL_SPEED`: 150 units/second at the start of every game
//! - `SPEED_INCREMENT`: +15 units/second every `SPEED_RAMP_INTERVAL` (5) tower blocks
//!
//! # Scoring
//!
//! | Drop | Points |
//! |------|--------|
//! | Perfect (within `PERFECT_THRESHOLD` of full width) | `PERFECT_BASE + COMBO_STEP * combo` |
//! | Partial overlap | `ACCURACY_BASE + floor(ACCURACY_SCALE * overlap / width)` |
//! | Onto an empty tower | `FIRST_BLOCK_SCORE` |
//! | Overlap below `MIN_OVERLAP_RATIO` of width | game over |
//!
//! # Examples
//!
//! ```
//! use tower_stack_types::{BlockColor, Direction, GameCommand, DEFAULT_PALETTE};
//!
//! // Parse a command (case-insensitive)
//! assert_eq!(GameCommand::from_str("drop"), Some(GameCommand::Drop));
//! assert_eq!(GameCommand::Drop.as_str(), "drop");
//!
//! // Directions flip at screen edges
//! assert_eq!(Direction::Right.reversed(), Direction::Left);
//! assert_eq!(Direction::Left.sign(), -1.0);
//!
//! // The palette is a fixed table of ten colors
//! assert_eq!(DEFAULT_PALETTE.len(), 10);
//! assert_eq!(DEFAULT_PALETTE[0], BlockColor::SkyBlue);
//! ```

/// World width in units (800).
pub const SCREEN_WIDTH: f32 = 800.0;

/// World height in units (600).
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Height of every block (30 units).
pub const BLOCK_HEIGHT: f32 = 30.0;

/// Width of the base block and of blocks generated for an empty tower.
pub const INITIAL_BLOCK_WIDTH: f32 = 200.0;

/// Distance between the bottom of the world and the base block's top edge.
pub const BASE_MARGIN: f32 = 100.0;

/// Horizontal block speed at the start of a game (units/second).
pub const INITIAL_SPEED: f32 = 150.0;

/// Speed added on every difficulty ramp (units/second).
pub const SPEED_INCREMENT: f32 = 15.0;

/// Tower heights that are a multiple of this value ramp the speed.
pub const SPEED_RAMP_INTERVAL: u32 = 5;

/// Maximum width difference (units) for a drop to count as perfect.
pub const PERFECT_THRESHOLD: f32 = 5.0;

/// Overlaps narrower than this fraction of the dropped block end the game.
pub const MIN_OVERLAP_RATIO: f32 = 0.10;

/// Number of upcoming blocks kept in the pending queue and shown as preview.
pub const PREVIEW_DEPTH: usize = 3;

/// Base points for a perfect drop.
pub const PERFECT_BASE: u32 = 50;

/// Extra points per combo step on a perfect drop.
pub const COMBO_STEP: u32 = 10;

/// Base points for a partial (non-perfect) drop.
pub const ACCURACY_BASE: u32 = 10;

/// Accuracy multiplier for partial drops (`floor(ACCURACY_SCALE * accuracy)`).
pub const ACCURACY_SCALE: f32 = 10.0;

/// Flat award when a block lands on an empty tower.
pub const FIRST_BLOCK_SCORE: u32 = 10;

/// Number of colors in the block palette.
pub const PALETTE_SIZE: usize = 10;

/// Block colors, in palette order.
pub const DEFAULT_PALETTE: [BlockColor; PALETTE_SIZE] = [
    BlockColor::SkyBlue,
    BlockColor::Pink,
    BlockColor::Gold,
    BlockColor::Lime,
    BlockColor::Orange,
    BlockColor::Purple,
    BlockColor::Beige,
    BlockColor::Violet,
    BlockColor::Maroon,
    BlockColor::DarkBlue,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_layout_defaults() {
        assert_eq!(SCREEN_WIDTH, 800.0);
        assert_eq!(SCREEN_HEIGHT, 600.0);
        assert_eq!(BLOCK_HEIGHT, 30.0);
        assert_eq!(INITIAL_BLOCK_WIDTH, 200.0);
        // Base block sits fully inside the world.
        assert!(SCREEN_HEIGHT - BASE_MARGIN + BLOCK_HEIGHT <= SCREEN_HEIGHT);
    }

    #[test]
    fn palette_has_distinct_colors() {
        for (i, a) in DEFAULT_PALETTE.iter().enumerate() {
            for b in DEFAULT_PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn command_round_trips_through_str() {
        for cmd in [GameCommand::Drop, GameCommand::TogglePause, GameCommand::Restart] {
            assert_eq!(GameCommand::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(GameCommand::from_str("pause"), Some(GameCommand::TogglePause));
        assert_eq!(GameCommand::from_str("jump"), None);
    }
}

/// Opaque color id of a block.
///
/// The core never interprets colors; renderers map them to real RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    SkyBlue,
    Pink,
    Gold,
    Lime,
    Orange,
    Purple,
    Beige,
    Violet,
    Maroon,
    DarkBlue,
}

impl BlockColor {
    /// Lowercase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::SkyBlue => "skyblue",
            BlockColor::Pink => "pink",
            BlockColor::Gold => "gold",
            BlockColor::Lime => "lime",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Beige => "beige",
            BlockColor::Violet => "violet",
            BlockColor::Maroon => "maroon",
            BlockColor::DarkBlue => "darkblue",
        }
    }
}

/// Horizontal travel direction of the moving block.
///
/// Flips only when the block touches a screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// `-1.0` for left, `+1.0` for right.
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Commands delivered to the session, at most one per tick.
///
/// All commands are edge-triggered: the platform layer emits one per key
/// press, never one per frame while a key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    /// Freeze the moving block and try to stack it
    Drop,
    /// Flip the pause flag
    TogglePause,
    /// Start a new game (only honored after game over)
    Restart,
}

impl GameCommand {
    /// Parse a command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tower_stack_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("DROP"), Some(GameCommand::Drop));
    /// assert_eq!(GameCommand::from_str("togglePause"), Some(GameCommand::TogglePause));
    /// assert_eq!(GameCommand::from_str("restart"), Some(GameCommand::Restart));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drop" => Some(GameCommand::Drop),
            "togglepause" | "pause" => Some(GameCommand::TogglePause),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Drop => "drop",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Restart => "restart",
        }
    }
}

/// Outcome of the most recent drop.
///
/// Emitted by the session after every drop and consumed by observers (HUD
/// flashes, logging).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackEvent {
    /// `true` when the block was pushed onto the tower, `false` on a miss.
    pub stacked: bool,
    pub perfect: bool,
    /// Width of the overlap with the previous top block (0 on a clean miss).
    pub overlap_width: f32,
    /// Points awarded by this drop.
    pub points: u32,
    /// Combo counter after this drop.
    pub combo: u32,
    /// Whether this drop ramped the block speed.
    pub speed_increased: bool,
}

impl StackEvent {
    /// Event for a drop that ended the game.
    pub fn missed(overlap_width: f32) -> Self {
        Self {
            stacked: false,
            perfect: false,
            overlap_width,
            points: 0,
            combo: 0,
            speed_increased: false,
        }
    }
}
