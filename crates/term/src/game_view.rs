//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! The board and preview are painted by the pixel renderer onto private canvases and then
//! downsampled into half-block cells, so the terminal shows the same picture any other
//! surface would. HUD text and overlays are drawn directly as characters.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_render::{draw_board, draw_preview, PixelCanvas, Rgb};

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Phase, BOARD_COLS, BOARD_ROWS};

/// Preview canvas size in preview blocks
const PREVIEW_COLS: u32 = 5;
const PREVIEW_ROWS: u32 = 4;
/// Columns between the board frame and the side panel
const PANEL_GAP: u16 = 2;

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

    /// Whether `self` can show everything up to and including the side panel
    pub fn fits(&self, min: Viewport) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FRAME_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL_STYLE: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const OVERLAY_STYLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

const LEGEND: [&str; 8] = [
    "<- -> move",
    "UP    rotate",
    "DOWN  soft drop",
    "SPACE hard drop",
    "P     pause",
    "ENTER start",
    "R     reset",
    "Q     quit",
];

/// Terminal view of the game.
///
/// Owns the board and preview canvases so frames can be rendered without allocating.
#[derive(Debug, Clone)]
pub struct GameView {
    block_px: u32,
    preview_px: u32,
    board: PixelCanvas,
    preview: PixelCanvas,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(8, 6)
    }
}

impl GameView {
    /// Create a view painting board blocks of `block_px` and preview blocks of `preview_px`
    /// pixels. Odd or tiny sizes are rounded to the nearest even size of at least 2.
    pub fn new(block_px: u32, preview_px: u32) -> Self {
        let block_px = even_at_least_2(block_px);
        let preview_px = even_at_least_2(preview_px);
        Self {
            block_px,
            preview_px,
            board: PixelCanvas::new(BOARD_COLS as u32 * block_px, BOARD_ROWS as u32 * block_px),
            preview: PixelCanvas::new(PREVIEW_COLS * preview_px, PREVIEW_ROWS * preview_px),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn block_px(&self) -> u32 {
        self.block_px
    }

    pub fn preview_px(&self) -> u32 {
        self.preview_px
    }

    /// Board area in terminal cells: two columns and one row per board cell.
    pub fn board_cells() -> (u16, u16) {
        (BOARD_COLS as u16 * 2, BOARD_ROWS as u16)
    }

    /// Preview area in terminal cells.
    pub fn preview_cells() -> (u16, u16) {
        (PREVIEW_COLS as u16 * 2, PREVIEW_ROWS as u16)
    }

    /// Smallest viewport that shows the board frame and the side panel.
    pub fn min_viewport() -> Viewport {
        let (bw, bh) = Self::board_cells();
        let (pw, _) = Self::preview_cells();
        Viewport::new(bw + 2 + PANEL_GAP + pw + 2, bh + 2)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the terminal
    /// size changes.
    pub fn render_into(&mut self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (board_w, board_h) = Self::board_cells();
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let (preview_w, _) = Self::preview_cells();
        let content_w = frame_w + PANEL_GAP + preview_w + 2;
        let start_x = if viewport.width >= content_w {
            (viewport.width - content_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        draw_border(fb, start_x, start_y, frame_w, frame_h, FRAME_STYLE);

        draw_board(snap, &mut self.board, self.block_px);
        let half = self.block_px / 2;
        fb.blit_half_blocks(start_x + 1, start_y + 1, &self.board, half, half);

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + PANEL_GAP, start_y);

        match snap.phase {
            Phase::Idle => draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER"),
            Phase::Paused => draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            Phase::Over => draw_game_over(fb, start_x, start_y, frame_w, frame_h, snap.score),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &mut self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        let (preview_w, preview_h) = Self::preview_cells();
        if panel_x >= viewport.width || viewport.width - panel_x < preview_w + 2 {
            return;
        }

        let mut y = start_y;
        for (label, value) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, label, LABEL_STYLE);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE_STYLE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", LABEL_STYLE);
        y = y.saturating_add(1);
        draw_border(fb, panel_x, y, preview_w + 2, preview_h + 2, FRAME_STYLE);
        draw_preview(snap, &mut self.preview, self.preview_px);
        let half = self.preview_px / 2;
        fb.blit_half_blocks(panel_x + 1, y + 1, &self.preview, half, half);
        y = y.saturating_add(preview_h + 3);

        let legend = VALUE_STYLE.dim();
        for line in LEGEND {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, legend);
            y += 1;
        }
    }
}

fn even_at_least_2(px: u32) -> u32 {
    (px.max(2) / 2) * 2
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

fn centered_x(start_x: u16, frame_w: u16, text_w: u16) -> u16 {
    start_x.saturating_add(frame_w.saturating_sub(text_w) / 2)
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    fb.put_str(centered_x(start_x, frame_w, text_w), mid_y, text, OVERLAY_STYLE);
}

/// Boxed panel with the final score and the restart hint.
fn draw_game_over(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    score: u32,
) {
    const PANEL_W: u16 = 18;
    const PANEL_H: u16 = 7;

    let x = centered_x(start_x, frame_w, PANEL_W);
    let y = start_y.saturating_add(frame_h.saturating_sub(PANEL_H) / 2);
    fb.fill_rect(x, y, PANEL_W, PANEL_H, ' ', OVERLAY_STYLE);
    draw_border(fb, x, y, PANEL_W, PANEL_H, FRAME_STYLE);

    let title = "GAME OVER";
    fb.put_str(centered_x(x, PANEL_W, title.len() as u16), y + 1, title, OVERLAY_STYLE);

    let label = "SCORE ";
    let line_w = label.len() as u16 + digit_count(score);
    let sx = centered_x(x, PANEL_W, line_w);
    fb.put_str(sx, y + 3, label, VALUE_STYLE);
    fb.put_u32(sx + label.len() as u16, y + 3, score, OVERLAY_STYLE);

    let hint = "R TO RESTART";
    fb.put_str(centered_x(x, PANEL_W, hint.len() as u16), y + 5, hint, VALUE_STYLE.dim());
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
