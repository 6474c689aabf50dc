//! Game session module - the stacking state machine
//!
//! This module ties together the tower, the pending queue and the score
//! history. It moves the current block every tick, resolves drops against
//! the top of the tower, and tracks score, combo, speed and game over.
//!
//! Lifecycle: `new` → `start` (initialize + first spawn) → ticks via
//! `update` → game over → `Restart` command re-initializes. The score
//! history survives restarts.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::block::{horizontal_overlap, Block};
use crate::config::GameConfig;
use crate::error::CoreError;
use crate::history::ScoreHistory;
use crate::pending::{BatchSpec, PendingQueue};
use crate::scoring::{is_miss, ramps_speed, score_drop};
use crate::tower::Tower;
use crate::types::*;

/// Complete state of one player's run of games.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    tower: Tower,
    pending: PendingQueue,
    history: ScoreHistory,
    current: Option<Block>,
    score: u32,
    consecutive_perfects: u32,
    block_speed: f32,
    direction: Direction,
    game_over: bool,
    paused: bool,
    started: bool,
    /// Number of initializations so far (first game is 1).
    game_id: u32,
    /// Outcome of the last drop (consumed by observers).
    last_event: Option<StackEvent>,
}

impl GameSession {
    /// Create an unstarted session. Call [`start`](Self::start) to play.
    pub fn new(config: GameConfig) -> Self {
        let block_speed = config.initial_speed;
        Self {
            config,
            tower: Tower::new(),
            pending: PendingQueue::new(),
            history: ScoreHistory::new(),
            current: None,
            score: 0,
            consecutive_perfects: 0,
            block_speed,
            direction: Direction::Right,
            game_over: false,
            paused: false,
            started: false,
            game_id: 0,
            last_event: None,
        }
    }

    /// Initialize the first game and spawn the first block.
    ///
    /// Does nothing when already started.
    pub fn start(&mut self) -> Result<(), CoreError> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.initialize()
    }

    /// Throw away the current game and start a fresh one.
    ///
    /// The score history is kept.
    pub fn reset(&mut self) -> Result<(), CoreError> {
        self.started = true;
        self.initialize()
    }

    fn initialize(&mut self) -> Result<(), CoreError> {
        self.tower.clear();
        self.pending.clear();
        self.current = None;
        self.score = 0;
        self.consecutive_perfects = 0;
        self.block_speed = self.config.initial_speed;
        self.direction = Direction::Right;
        self.game_over = false;
        self.paused = false;
        self.last_event = None;
        self.game_id = self.game_id.wrapping_add(1);

        let mut base = Block::new(
            self.config.base_x(),
            self.config.base_y(),
            self.config.initial_block_width,
            self.config.block_height,
            self.config.color(0),
            0.0,
        );
        base.is_moving = false;
        self.tower.push(base);

        self.generate_upcoming(self.config.preview_depth);

        info!(game_id = self.game_id, "new game");
        self.spawn_next_block()
    }

    /// Append `count` blocks sized to the current top of the tower.
    fn generate_upcoming(&mut self, count: usize) {
        let width = self
            .tower
            .top()
            .map_or(self.config.initial_block_width, |top| top.width);
        let spec = BatchSpec {
            width,
            height: self.config.block_height,
            color_index_base: self.tower.height() as usize + self.pending.len(),
            speed: self.block_speed,
            palette: &self.config.palette,
        };
        self.pending.generate_batch(count, spec);
    }

    /// Make the front of the pending queue the new current block.
    ///
    /// The block starts at the left edge, one block height above the tower
    /// top. The queue is refilled by one so its depth stays constant.
    pub fn spawn_next_block(&mut self) -> Result<(), CoreError> {
        if self.pending.is_empty() {
            self.generate_upcoming(1);
        }

        let mut block = self.pending.dequeue()?;
        let y = self.config.base_y() - self.tower.height() as f32 * self.config.block_height;
        block.set_position(0.0, y);
        block.is_moving = true;
        block.speed = self.block_speed;
        self.current = Some(block);

        self.generate_upcoming(1);

        trace!(
            width = block.width,
            y,
            color = block.color.as_str(),
            "spawned block"
        );
        Ok(())
    }

    /// Slide the current block and bounce it off the screen edges.
    ///
    /// Position is not clamped: the block may overshoot an edge by up to one
    /// tick of movement before the reversed direction brings it back.
    fn advance_motion(&mut self, elapsed_secs: f32) -> bool {
        let Some(block) = self.current.as_mut() else {
            return false;
        };
        if !block.is_moving {
            return false;
        }

        block.advance(elapsed_secs, self.block_speed * self.direction.sign());

        if block.right() >= self.config.screen_width {
            self.direction = Direction::Left;
        } else if block.left() <= 0.0 {
            self.direction = Direction::Right;
        }

        true
    }

    /// Freeze the current block and stack it. Returns `false` when there
    /// is no moving block to drop.
    fn drop_block(&mut self) -> Result<bool, CoreError> {
        let Some(mut block) = self.current else {
            return Ok(false);
        };
        if !block.is_moving {
            return Ok(false);
        }

        block.is_moving = false;
        self.current = Some(block);
        self.stack_block(block)?;
        Ok(true)
    }

    /// Resolve a dropped block against the top of the tower.
    fn stack_block(&mut self, block: Block) -> Result<(), CoreError> {
        if self.tower.is_empty() {
            self.tower.push(block);
            self.score += FIRST_BLOCK_SCORE;
            self.last_event = Some(StackEvent {
                stacked: true,
                perfect: false,
                overlap_width: block.width,
                points: FIRST_BLOCK_SCORE,
                combo: self.consecutive_perfects,
                speed_increased: false,
            });
            return self.spawn_next_block();
        }

        let top = *self.tower.peek()?;

        let Some((overlap_start, overlap_end)) = horizontal_overlap(&block, &top) else {
            self.end_game(0.0);
            return Ok(());
        };

        let overlap_width = overlap_end - overlap_start;
        let original_width = block.width;

        if is_miss(overlap_width, original_width) {
            self.end_game(overlap_width);
            return Ok(());
        }

        self.tower.push(Block {
            x: overlap_start,
            width: overlap_width,
            ..block
        });

        let drop = score_drop(
            overlap_width,
            original_width,
            self.config.perfect_threshold,
            self.consecutive_perfects,
        );
        self.consecutive_perfects = drop.combo;
        self.score += drop.points;

        let speed_increased = ramps_speed(self.tower.height());
        if speed_increased {
            self.block_speed += self.config.speed_increment;
            debug!(speed = self.block_speed, "speed increased");
        }

        debug!(
            overlap = overlap_width,
            points = drop.points,
            combo = drop.combo,
            perfect = drop.perfect,
            height = self.display_height(),
            "stacked block"
        );

        self.last_event = Some(StackEvent {
            stacked: true,
            perfect: drop.perfect,
            overlap_width,
            points: drop.points,
            combo: drop.combo,
            speed_increased,
        });

        self.spawn_next_block()
    }

    /// Enter game over and record the result.
    fn end_game(&mut self, overlap_width: f32) {
        self.game_over = true;
        let height = self.display_height();
        self.history.append(self.score, height);
        self.last_event = Some(StackEvent {
            combo: self.consecutive_perfects,
            ..StackEvent::missed(overlap_width)
        });

        info!(
            game_id = self.game_id,
            score = self.score,
            height,
            best = self.history.best_score(),
            "game over"
        );
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance one frame.
    ///
    /// Ordering within a tick:
    /// 1. after game over only `Restart` is honored
    /// 2. `TogglePause` flips the pause flag
    /// 3. while paused nothing else happens
    /// 4. the current block moves by `elapsed_secs`
    /// 5. `Drop` stacks the block at its new position
    ///
    /// Returns whether gameplay state changed.
    pub fn update(
        &mut self,
        elapsed_secs: f32,
        command: Option<GameCommand>,
    ) -> Result<bool, CoreError> {
        if !self.started {
            return Ok(false);
        }

        if self.game_over {
            if command == Some(GameCommand::Restart) {
                self.reset()?;
                return Ok(true);
            }
            return Ok(false);
        }

        let mut changed = false;
        if command == Some(GameCommand::TogglePause) {
            self.toggle_pause();
            changed = true;
        }

        if self.paused {
            return Ok(changed);
        }

        changed |= self.advance_motion(elapsed_secs);

        if command == Some(GameCommand::Drop) {
            changed |= self.drop_block()?;
        }

        Ok(changed)
    }

    /// Apply a single command without advancing time.
    pub fn apply_command(&mut self, command: GameCommand) -> Result<bool, CoreError> {
        self.update(0.0, Some(command))
    }

    /// Take and clear the last drop outcome.
    pub fn take_last_event(&mut self) -> Option<StackEvent> {
        self.last_event.take()
    }

    /// Forget every recorded game. Never done by a restart.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn pending(&self) -> &PendingQueue {
        &self.pending
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// The block in play; `None` before start and after game over.
    pub fn current_block(&self) -> Option<&Block> {
        if self.game_over {
            return None;
        }
        self.current.as_ref()
    }

    /// Upcoming blocks for the preview, front first.
    pub fn preview(&self) -> ArrayVec<Block, PREVIEW_DEPTH> {
        self.pending.preview()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn consecutive_perfects(&self) -> u32 {
        self.consecutive_perfects
    }

    pub fn block_speed(&self) -> f32 {
        self.block_speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Blocks in the tower, base included.
    pub fn tower_height(&self) -> u32 {
        self.tower.height()
    }

    /// Tower height as shown to the player (base excluded).
    pub fn display_height(&self) -> u32 {
        self.tower.height().saturating_sub(1)
    }

    #[cfg(test)]
    fn current_mut(&mut self) -> &mut Block {
        self.current.as_mut().expect("session has a current block")
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
