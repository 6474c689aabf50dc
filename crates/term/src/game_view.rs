//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 800x600 world is scaled onto a grid of terminal cells. By default one
//! block height is one row and 16 world units are one column. When the tower
//! grows past the top of the world the view scrolls up so the moving block
//! stays visible.

use crate::core::{Block, GameSession};
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};
use crate::palette::block_rgb;
use crate::types::{StackEvent, BLOCK_HEIGHT};

/// Width reserved right of the playfield for the HUD.
const PANEL_W: u16 = 22;

/// Preview bars are drawn at this fraction of the real block width.
const PREVIEW_SCALE: f32 = 0.4;

/// Rows kept visible above the moving block when scrolling.
const HEADROOM_ROWS: f32 = 2.0;

const FIELD_BG: Rgb = Rgb::new(24, 24, 34);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen placement of the playfield for one frame.
#[derive(Debug, Clone, Copy)]
struct Field {
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    cols: u16,
    rows: u16,
    /// World y shown at the top row.
    camera_top: f32,
}

impl Field {
    fn frame_w(&self) -> u16 {
        self.cols + 2
    }

    fn frame_h(&self) -> u16 {
        self.rows + 2
    }
}

/// A lightweight terminal renderer for the stacking game.
pub struct GameView {
    /// World units per terminal column.
    units_per_col: f32,
    /// World units per terminal row.
    units_per_row: f32,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            units_per_col: 16.0,
            units_per_row: BLOCK_HEIGHT,
        }
    }
}

impl GameView {
    pub fn new(units_per_col: f32, units_per_row: f32) -> Self {
        Self {
            units_per_col,
            units_per_row,
        }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(
        &self,
        session: &GameSession,
        last_event: Option<&StackEvent>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let field = self.layout(session, viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            field.x + 1,
            field.y + 1,
            field.cols,
            field.rows,
            ' ',
            CellStyle::new(FIELD_BG, FIELD_BG),
        );
        draw_border(fb, field.x, field.y, field.frame_w(), field.frame_h(), border);

        for block in session.tower() {
            self.draw_block(fb, &field, block, false);
        }
        if let Some(current) = session.current_block() {
            self.draw_block(fb, &field, current, true);
        }

        self.draw_panel(fb, session, last_event, viewport, &field);

        if session.game_over() {
            self.draw_game_over(fb, session, &field);
        } else if session.paused() {
            let style = CellStyle::new(Rgb::new(255, 80, 80), PANEL_BG).bold();
            let mid = field.y + field.frame_h() / 2;
            draw_centered(fb, &field, mid, "PAUSED", None, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        session: &GameSession,
        last_event: Option<&StackEvent>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, last_event, viewport, &mut fb);
        fb
    }

    fn layout(&self, session: &GameSession, viewport: Viewport) -> Field {
        let config = session.config();
        let cols = (config.screen_width / self.units_per_col).ceil() as u16;
        let rows = (config.screen_height / self.units_per_row).ceil() as u16;

        let total_w = cols + 2 + PANEL_W;
        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = viewport.height.saturating_sub(rows + 2) / 2;

        // Follow the moving block (or the tower top once it stops).
        let focus_y = session
            .current_block()
            .or_else(|| session.tower().top())
            .map_or(0.0, |b| b.y);
        let camera_top = (focus_y - HEADROOM_ROWS * self.units_per_row).min(0.0);

        Field {
            x,
            y,
            cols,
            rows,
            camera_top,
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, field: &Field, block: &Block, active: bool) {
        let row0 = ((block.top() - field.camera_top) / self.units_per_row).round() as i32;
        let row1 = ((block.bottom() - field.camera_top) / self.units_per_row).round() as i32;
        let col0 = (block.left() / self.units_per_col).round() as i32;
        let col1 = (block.right() / self.units_per_col).round() as i32;
        let row1 = row1.max(row0 + 1);
        let col1 = col1.max(col0 + 1);

        let style = CellStyle {
            fg: block_rgb(block.color),
            bg: FIELD_BG,
            bold: active,
            dim: false,
        };

        for row in row0.max(0)..row1.min(i32::from(field.rows)) {
            for col in col0.max(0)..col1.min(i32::from(field.cols)) {
                fb.put_char(
                    field.x + 1 + col as u16,
                    field.y + 1 + row as u16,
                    '█',
                    style,
                );
            }
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        last_event: Option<&StackEvent>,
        viewport: Viewport,
        field: &Field,
    ) {
        let panel_x = field.x.saturating_add(field.frame_w()).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = field.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, session.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "HEIGHT", label);
        fb.put_u32(panel_x, y + 1, session.display_height(), value);
        y += 3;

        let best = session.history().best_score();
        fb.put_str(panel_x, y, "BEST", label);
        if best > 0 {
            fb.put_u32(panel_x, y + 1, best, value);
        } else {
            fb.put_str(panel_x, y + 1, "-", dim);
        }
        y += 3;

        fb.put_str(panel_x, y, "GAMES", label);
        fb.put_u32(panel_x, y + 1, session.history().count() as u32, value);
        y += 3;

        let combo = session.consecutive_perfects();
        if combo > 0 {
            let gold = CellStyle::new(Rgb::new(255, 203, 0), PANEL_BG).bold();
            let x = fb.put_str(panel_x, y, "PERFECT x", gold);
            let x = fb.put_u32(x, y, combo, gold);
            fb.put_char(x, y, '!', gold);
        } else if let Some(event) = last_event.filter(|e| e.stacked) {
            let x = fb.put_str(panel_x, y, "+", value);
            fb.put_u32(x, y, event.points, value);
        }
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for block in session.preview() {
            let w = ((block.width * PREVIEW_SCALE) / self.units_per_col).round() as u16;
            let style = CellStyle::new(block_rgb(block.color), PANEL_BG);
            fb.fill_rect(panel_x, y, w.max(1), 1, '▀', style);
            y += 1;
        }
        y += 1;

        for (key, action) in [
            ("SPACE", "drop"),
            ("P", "pause"),
            ("R", "restart"),
            ("Q", "quit"),
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, value);
            fb.put_str(panel_x + 6, y, action, dim);
            y += 1;
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, session: &GameSession, field: &Field) {
        let title = CellStyle::new(Rgb::new(255, 80, 80), PANEL_BG).bold();
        let text = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG);
        let gold = CellStyle::new(Rgb::new(255, 203, 0), PANEL_BG);
        let hint = CellStyle::new(Rgb::new(170, 170, 170), PANEL_BG);

        let top = (field.y + field.frame_h() / 2).saturating_sub(3);
        draw_centered(fb, field, top, "GAME OVER!", None, title);
        draw_centered(fb, field, top + 2, "Final Score: ", Some(session.score()), text);
        draw_centered(
            fb,
            field,
            top + 3,
            "Tower Height: ",
            Some(session.display_height()),
            text,
        );
        draw_centered(
            fb,
            field,
            top + 4,
            "Best Score: ",
            Some(session.history().best_score()),
            gold,
        );
        draw_centered(fb, field, top + 6, "Press R to Restart", None, hint);
    }
}

/// Write `label` followed by an optional number, centered in the frame.
fn draw_centered(
    fb: &mut FrameBuffer,
    field: &Field,
    y: u16,
    label: &str,
    number: Option<u32>,
    style: CellStyle,
) {
    let w = label.chars().count() as u16 + number.map_or(0, digit_count);
    let x = field.x + field.frame_w().saturating_sub(w) / 2;
    let x = fb.put_str(x, y, label, style);
    if let Some(n) = number {
        fb.put_u32(x, y, n, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
