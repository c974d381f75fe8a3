//! Painting a [`GameSnapshot`] onto surfaces.
//!
//! Both entry points are pure functions of the snapshot: they read nothing else and
//! touch nothing but the surface they are given.

use blockfall_core::pieces::get_shape;
use blockfall_core::GameSnapshot;
use blockfall_types::{BOARD_COLS, BOARD_ROWS};

use crate::palette::{self, piece_color, GLOSS};
use crate::surface::{Rect, Rgb, Surface};

/// Paint one block whose top-left pixel is `(x, y)`.
///
/// The body is inset by one pixel on every side; the gloss covers the upper third.
pub fn draw_block(surface: &mut impl Surface, x: i32, y: i32, block: u32, color: Rgb) {
    surface.fill_rect(
        Rect::new(x + 1, y + 1, block.saturating_sub(2), block.saturating_sub(2)),
        color.opaque(),
    );
    surface.fill_rect(
        Rect::new(x + 2, y + 2, block.saturating_sub(4), block / 3),
        GLOSS,
    );
}

/// Paint the board: background, grid, settled cells, then the active piece.
///
/// `block` is the edge length of one cell in surface pixels.
pub fn draw_board(snapshot: &GameSnapshot, surface: &mut impl Surface, block: u32) {
    let b = block as i32;
    surface.clear(palette::EMPTY.opaque());

    for row in 0..BOARD_ROWS as i32 {
        for col in 0..BOARD_COLS as i32 {
            surface.stroke_rect(Rect::new(col * b, row * b, block, block), palette::GRID.opaque());
        }
    }

    for (row, cells) in snapshot.board.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(kind) = cell {
                draw_block(surface, col as i32 * b, row as i32 * b, block, piece_color(*kind));
            }
        }
    }

    if let Some(active) = snapshot.active {
        let color = piece_color(active.kind);
        for (row, col) in active.cells().filter(|&(row, _)| row >= 0) {
            draw_block(surface, col as i32 * b, row as i32 * b, block, color);
        }
    }
}

/// Paint the lookahead piece's spawn orientation centered on `surface`.
pub fn draw_preview(snapshot: &GameSnapshot, surface: &mut impl Surface, block: u32) {
    surface.clear(palette::PREVIEW_BG.opaque());

    let shape = get_shape(snapshot.next, 0);
    let b = block as i32;
    let offset_x = (surface.width() as i32 - shape.width() as i32 * b) / 2;
    let offset_y = (surface.height() as i32 - shape.height() as i32 * b) / 2;
    let color = piece_color(snapshot.next);

    for (row, col) in shape.minos() {
        draw_block(
            surface,
            offset_x + col as i32 * b,
            offset_y + row as i32 * b,
            block,
            color,
        );
    }
}
