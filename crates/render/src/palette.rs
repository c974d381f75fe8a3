//! Colors used when painting the game.

use blockfall_types::PieceKind;

use crate::surface::{Rgb, Rgba};

pub const I: Rgb = Rgb::new(0x00, 0xf0, 0xf0);
pub const O: Rgb = Rgb::new(0xf0, 0xf0, 0x00);
pub const T: Rgb = Rgb::new(0xa0, 0x00, 0xf0);
pub const S: Rgb = Rgb::new(0x00, 0xf0, 0x00);
pub const Z: Rgb = Rgb::new(0xf0, 0x00, 0x00);
pub const J: Rgb = Rgb::new(0x00, 0x00, 0xf0);
pub const L: Rgb = Rgb::new(0xf0, 0xa0, 0x00);

/// Board background
pub const EMPTY: Rgb = Rgb::new(0x00, 0x00, 0x00);
/// Cell outlines
pub const GRID: Rgb = Rgb::new(0x1a, 0x1a, 0x1a);
/// Preview background. Kept opaque: terminal cells have nothing underneath to blend with.
pub const PREVIEW_BG: Rgb = Rgb::new(0x0d, 0x0d, 0x0d);

/// White highlight at 30% opacity drawn over the top of each block
pub const GLOSS: Rgba = Rgba::new(255, 255, 255, 77);

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => I,
        PieceKind::O => O,
        PieceKind::T => T,
        PieceKind::S => S,
        PieceKind::Z => Z,
        PieceKind::J => J,
        PieceKind::L => L,
    }
}
