//! Pending queue - pre-generated blocks waiting to be spawned
//!
//! Blocks are generated at the back and drained from the front (FIFO). The
//! session keeps the queue at [`PREVIEW_DEPTH`] items between spawns so the
//! renderer always has a full preview.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::block::Block;
use crate::error::CoreError;
use crate::types::{BlockColor, PALETTE_SIZE, PREVIEW_DEPTH};

/// Parameters shared by every block of one generated batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchSpec<'a> {
    /// Width of every generated block (the tower's current top width).
    pub width: f32,
    pub height: f32,
    /// Palette index of the first block; later blocks use `base + i`.
    pub color_index_base: usize,
    /// Speed stamped on the blocks (overwritten again at spawn time).
    pub speed: f32,
    pub palette: &'a [BlockColor; PALETTE_SIZE],
}

/// FIFO of upcoming blocks.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    blocks: VecDeque<Block>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self {
            blocks: VecDeque::with_capacity(PREVIEW_DEPTH + 1),
        }
    }

    /// Append `count` freshly built blocks to the back.
    ///
    /// Positions are left at the origin; they are assigned at spawn time.
    pub fn generate_batch(&mut self, count: usize, spec: BatchSpec<'_>) {
        for i in 0..count {
            let color = spec.palette[(spec.color_index_base + i) % PALETTE_SIZE];
            self.blocks
                .push_back(Block::new(0.0, 0.0, spec.width, spec.height, color, spec.speed));
        }
    }

    /// Remove and return the front block.
    pub fn dequeue(&mut self) -> Result<Block, CoreError> {
        self.blocks
            .pop_front()
            .ok_or(CoreError::EmptyContainer {
                container: "pending queue",
            })
    }

    /// The first (up to) [`PREVIEW_DEPTH`] blocks, front first.
    ///
    /// Stack-only; does not allocate.
    pub fn preview(&self) -> ArrayVec<Block, PREVIEW_DEPTH> {
        self.blocks.iter().take(PREVIEW_DEPTH).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_PALETTE;

    fn spec(width: f32, base: usize) -> BatchSpec<'static> {
        BatchSpec {
            width,
            height: 30.0,
            color_index_base: base,
            speed: 150.0,
            palette: &DEFAULT_PALETTE,
        }
    }

    #[test]
    fn test_generate_batch_appends_sized_blocks() {
        let mut queue = PendingQueue::new();
        queue.generate_batch(3, spec(120.0, 0));

        assert_eq!(queue.len(), 3);
        for block in queue.preview() {
            assert_eq!(block.width, 120.0);
            assert_eq!(block.height, 30.0);
            assert_eq!(block.speed, 150.0);
            assert!(block.is_moving);
        }
    }

    #[test]
    fn test_colors_follow_palette_modulo() {
        let mut queue = PendingQueue::new();
        queue.generate_batch(3, spec(100.0, 9));

        let colors: Vec<BlockColor> = queue.preview().iter().map(|b| b.color).collect();
        assert_eq!(
            colors,
            vec![DEFAULT_PALETTE[9], DEFAULT_PALETTE[0], DEFAULT_PALETTE[1]]
        );
    }

    #[test]
    fn test_dequeue_is_fifo() {
        let mut queue = PendingQueue::new();
        queue.generate_batch(1, spec(100.0, 0));
        queue.generate_batch(1, spec(50.0, 1));

        assert_eq!(queue.dequeue().unwrap().width, 100.0);
        assert_eq!(queue.dequeue().unwrap().width, 50.0);
    }

    #[test]
    fn test_dequeue_empty_fails() {
        let mut queue = PendingQueue::new();
        assert_eq!(
            queue.dequeue(),
            Err(CoreError::EmptyContainer {
                container: "pending queue"
            })
        );
    }

    #[test]
    fn test_preview_is_capped_and_non_destructive() {
        let mut queue = PendingQueue::new();
        queue.generate_batch(5, spec(100.0, 0));

        let preview = queue.preview();
        assert_eq!(preview.len(), PREVIEW_DEPTH);
        assert_eq!(queue.len(), 5);
        assert_eq!(preview[0].color, DEFAULT_PALETTE[0]);
    }

    #[test]
    fn test_preview_shorter_queue() {
        let mut queue = PendingQueue::new();
        queue.generate_batch(1, spec(100.0, 0));
        assert_eq!(queue.preview().len(), 1);

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.preview().is_empty());
    }
}
