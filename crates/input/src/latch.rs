//! Per-tick command latch.
//!
//! Terminal key events arrive between frames, while the session consumes at
//! most one command per tick. The latch buffers presses in arrival order and
//! hands them out one per tick. Repeated presses of a command that is
//! already waiting are coalesced, so holding a key (or terminal auto-repeat)
//! cannot build a backlog.

use arrayvec::ArrayVec;

use crate::types::GameCommand;

/// One slot per distinct command.
const LATCH_CAPACITY: usize = 3;

/// FIFO of distinct pending commands.
#[derive(Debug, Clone, Default)]
pub struct CommandLatch {
    pending: ArrayVec<GameCommand, LATCH_CAPACITY>,
}

impl CommandLatch {
    pub fn new() -> Self {
        Self {
            pending: ArrayVec::new(),
        }
    }

    /// Record a key press. Returns `false` if the command was already waiting.
    pub fn press(&mut self, command: GameCommand) -> bool {
        if self.pending.contains(&command) {
            return false;
        }
        // Capacity equals the number of distinct commands, so this cannot fail.
        self.pending.try_push(command).is_ok()
    }

    /// Take the oldest waiting command for this tick.
    pub fn next_command(&mut self) -> Option<GameCommand> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
