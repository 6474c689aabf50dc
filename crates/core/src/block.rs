//! Block module - geometry and motion of a single rectangle
//!
//! Blocks are plain values: the tower, the pending queue and the session's
//! current-block slot each own their copies outright.

use crate::types::BlockColor;

/// One rectangle of the game, either moving or frozen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: BlockColor,
    /// Horizontal speed in units/second.
    pub speed: f32,
    pub is_moving: bool,
}

impl Block {
    /// Create a block. Blocks with non-zero speed start out moving.
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: BlockColor, speed: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "block must have positive size");
        Self {
            x,
            y,
            width,
            height,
            color,
            speed,
            is_moving: speed != 0.0,
        }
    }

    /// Advance horizontally by `velocity * elapsed_secs`. No-op when frozen.
    pub fn advance(&mut self, elapsed_secs: f32, velocity: f32) {
        if self.is_moving {
            self.x += velocity * elapsed_secs;
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Horizontal overlap of two blocks as `(start, end)`.
///
/// Returns `None` when the spans only touch or are disjoint.
pub fn horizontal_overlap(current: &Block, below: &Block) -> Option<(f32, f32)> {
    let start = current.left().max(below.left());
    let end = current.right().min(below.right());
    (end > start).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: f32, width: f32) -> Block {
        Block::new(x, 0.0, width, 30.0, BlockColor::Gold, 150.0)
    }

    #[test]
    fn test_new_sets_moving_from_speed() {
        assert!(block(0.0, 10.0).is_moving);

        let still = Block::new(0.0, 0.0, 10.0, 30.0, BlockColor::Lime, 0.0);
        assert!(!still.is_moving);
    }

    #[test]
    fn test_edges() {
        let b = Block::new(300.0, 470.0, 200.0, 30.0, BlockColor::Pink, 0.0);
        assert_eq!(b.left(), 300.0);
        assert_eq!(b.right(), 500.0);
        assert_eq!(b.top(), 470.0);
        assert_eq!(b.bottom(), 500.0);
    }

    #[test]
    fn test_advance_moves_only_when_moving() {
        let mut b = block(10.0, 50.0);
        b.advance(0.5, 100.0);
        assert_eq!(b.x, 60.0);

        b.advance(0.5, -40.0);
        assert_eq!(b.x, 40.0);

        b.is_moving = false;
        b.advance(1.0, 100.0);
        assert_eq!(b.x, 40.0);
    }

    #[test]
    fn test_overlap_partial() {
        let current = block(450.0, 200.0);
        let below = block(300.0, 200.0);
        assert_eq!(horizontal_overlap(&current, &below), Some((450.0, 500.0)));
    }

    #[test]
    fn test_overlap_contained() {
        let current = block(320.0, 50.0);
        let below = block(300.0, 200.0);
        assert_eq!(horizontal_overlap(&current, &below), Some((320.0, 370.0)));
    }

    #[test]
    fn test_overlap_touching_is_none() {
        let current = block(500.0, 200.0);
        let below = block(300.0, 200.0);
        assert_eq!(horizontal_overlap(&current, &below), None);
    }

    #[test]
    fn test_overlap_disjoint_is_none() {
        let current = block(0.0, 100.0);
        let below = block(300.0, 200.0);
        assert_eq!(horizontal_overlap(&current, &below), None);
        assert_eq!(horizontal_overlap(&below, &current), None);
    }
}
