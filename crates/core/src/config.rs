//! Game configuration - the fixed rule set a session plays by

use crate::types::*;

/// Geometry, speed and scoring parameters of a session.
///
/// `GameConfig::default()` is the standard game. Custom configs exist mainly
/// so tests and alternate front ends can shrink or widen the world.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub block_height: f32,
    pub initial_block_width: f32,
    /// Gap between the bottom of the world and the base block's top edge.
    pub base_margin: f32,
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub perfect_threshold: f32,
    pub preview_depth: usize,
    pub palette: [BlockColor; PALETTE_SIZE],
}

impl GameConfig {
    /// Y coordinate of the base block.
    pub fn base_y(&self) -> f32 {
        self.screen_height - self.base_margin
    }

    /// X coordinate that centers the base block horizontally.
    pub fn base_x(&self) -> f32 {
        self.screen_width / 2.0 - self.initial_block_width / 2.0
    }

    pub fn color(&self, index: usize) -> BlockColor {
        self.palette[index % PALETTE_SIZE]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            block_height: BLOCK_HEIGHT,
            initial_block_width: INITIAL_BLOCK_WIDTH,
            base_margin: BASE_MARGIN,
            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            perfect_threshold: PERFECT_THRESHOLD,
            preview_depth: PREVIEW_DEPTH,
            palette: DEFAULT_PALETTE,
        }
    }
}
