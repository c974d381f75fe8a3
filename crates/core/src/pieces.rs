//! Pieces module - the static piece catalog
//!
//! Every kind owns an ordered list of rotation states. Each state is a small square
//! occupancy matrix; the list length encodes the kind's rotational symmetry
//! (I and O have 1 state, S/Z have 2, T/J/L have 4). Rotation always advances to
//! `(index + 1) % len`.

use crate::types::{PieceKind, BOARD_COLS, KICK_LIMIT};

/// One rotation state: rows of 0/1 occupancy flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape(&'static [&'static [u8]]);

impl Shape {
    /// Matrix width in cells
    pub fn width(&self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    /// Matrix height in cells
    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// Whether matrix cell `(row, col)` is occupied
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// Occupied cells as `(row, col)` offsets from the matrix origin, row-major
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> {
        let matrix = self.0;
        matrix.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(c, _)| (r as i8, c as i8))
        })
    }

    /// Raw matrix rows
    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.0
    }
}

/// Single state: the I never leaves its horizontal orientation.
const I_SHAPES: [Shape; 1] = [Shape(&[
    &[0, 0, 0, 0],
    &[1, 1, 1, 1],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
])];

const O_SHAPES: [Shape; 1] = [Shape(&[&[1, 1], &[1, 1]])];

const T_SHAPES: [Shape; 4] = [
    Shape(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
    Shape(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]),
    Shape(&[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
    Shape(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]),
];

const S_SHAPES: [Shape; 2] = [
    Shape(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
    Shape(&[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]]),
];

const Z_SHAPES: [Shape; 2] = [
    Shape(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    Shape(&[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]]),
];

const J_SHAPES: [Shape; 4] = [
    Shape(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
    Shape(&[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
    Shape(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]]),
    Shape(&[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
];

const L_SHAPES: [Shape; 4] = [
    Shape(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
    Shape(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
    Shape(&[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]]),
    Shape(&[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]]),
];

/// Ordered rotation states of a kind
pub fn rotations(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Shape of `kind` at `rotation` (taken modulo the number of states)
pub fn get_shape(kind: PieceKind, rotation: usize) -> Shape {
    let states = rotations(kind);
    states[rotation % states.len()]
}

/// Rotation index that follows `rotation`
pub fn next_rotation(kind: PieceKind, rotation: usize) -> usize {
    (rotation + 1) % rotations(kind).len()
}

/// Spawn row for every kind
pub const SPAWN_ROW: i8 = 0;

/// Spawn column: the spawn matrix centered on the board, rounding left
pub fn spawn_col(kind: PieceKind) -> i8 {
    let width = get_shape(kind, 0).width() as i8;
    (BOARD_COLS as i8) / 2 - width / 2
}

/// Horizontal shifts tried, in order, after a rotation collides: +1, -1, +2, -2, ...
pub fn kick_offsets() -> impl Iterator<Item = i8> {
    (1..=KICK_LIMIT).flat_map(|k| [k, -k])
}
