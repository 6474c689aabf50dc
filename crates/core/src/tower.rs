//! Tower module - the stack of placed blocks
//!
//! Backed by a `Vec` used as a stack: push/pop at the back, and the whole
//! sequence stays directly iterable (bottom to top) for rendering.

use crate::block::Block;
use crate::error::CoreError;

/// Placed blocks, bottom (base) first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tower {
    blocks: Vec<Block>,
}

impl Tower {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Place a block on top.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Remove and return the top block.
    pub fn pop(&mut self) -> Option<Block> {
        self.blocks.pop()
    }

    /// The top block, or `EmptyContainer` if the tower has no blocks.
    pub fn peek(&self) -> Result<&Block, CoreError> {
        self.blocks
            .last()
            .ok_or(CoreError::EmptyContainer { container: "tower" })
    }

    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks, base included.
    pub fn height(&self) -> u32 {
        self.blocks.len() as u32
    }

    /// Blocks from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

impl<'a> IntoIterator for &'a Tower {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
