use crate::game_state::Tetromino;
use crate::pieces::{get_shape, Shape};
use crate::types::{Cell, Phase, PieceKind, BASE_DROP_MS, BOARD_COLS, BOARD_ROWS, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
}

impl ActiveSnapshot {
    pub fn shape(&self) -> Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Board positions `(row, col)` covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (row, col) = (self.row, self.col);
        self.shape().minos().map(move |(dr, dc)| (row + dr, col + dc))
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
        }
    }
}

/// Read-only copy of everything a renderer or HUD needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub phase: Phase,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
            phase: Phase::Idle,
        }
    }
}
