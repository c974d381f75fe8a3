//! Game state module - manages the complete game session
//!
//! This module ties together the board, the piece catalog, the piece source, and scoring.
//! It owns the active and lookahead pieces, the session counters, and the
//! `Idle -> Running <-> Paused -> Over` lifecycle. Every controller operation leaves the
//! board and the active piece in a non-colliding state: candidates are built off to the
//! side and only committed when they fit.

use crate::pieces::{get_shape, kick_offsets, next_rotation, spawn_col, Shape, SPAWN_ROW};
use crate::rng::{PieceSource, UniformRandom};
use crate::scoring::{apply_clear, get_drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// Check `shape` placed with its matrix origin at `(row, col)` against `board`.
///
/// A cell collides when it is left or right of the board, at or below the bottom edge,
/// or on an occupied board cell. Cells above the board (negative rows) only get the
/// horizontal check.
pub fn collides(board: &Board, shape: Shape, row: i8, col: i8) -> bool {
    shape.minos().any(|(dr, dc)| {
        let r = row + dr;
        let c = col + dc;
        c < 0 || c >= BOARD_COLS as i8 || r >= BOARD_ROWS as i8 || (r >= 0 && board.is_occupied(r, c))
    })
}

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Index into the kind's rotation list
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            row: SPAWN_ROW,
            col: spawn_col(kind),
        }
    }

    /// Shape for the current rotation
    pub fn shape(&self) -> Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Board positions `(row, col)` covered by this piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (row, col) = (self.row, self.col);
        self.shape().minos().map(move |(dr, dc)| (row + dr, col + dc))
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(board, self.shape(), self.row, self.col)
    }

    fn shifted(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..self
        }
    }
}

/// Outcome of settling a piece, kept until the host takes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub points: u32,
    /// Level after the clear
    pub level: u32,
    pub level_up: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformRandom> {
    board: Board,
    active: Option<Tetromino>,
    next: Tetromino,
    source: S,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    /// Time accumulated towards the next gravity step
    drop_counter_ms: u32,
    phase: Phase,
    last_event: Option<LockEvent>,
}

impl GameState<UniformRandom> {
    /// Create a new game whose pieces come from a seeded uniform source
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformRandom::new(seed))
    }

    /// Create a new game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_source(UniformRandom::from_entropy())
    }
}

impl Default for GameState<UniformRandom> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create an idle game drawing pieces from `source`
    pub fn with_source(mut source: S) -> Self {
        let next = Tetromino::new(source.next_kind());
        Self {
            board: Board::new(),
            active: None,
            next,
            source,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: get_drop_interval_ms(START_LEVEL),
            drop_counter_ms: 0,
            phase: Phase::Idle,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up positions before or during play
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a session is in progress (running or paused)
    pub fn started(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Start the session: promote the lookahead piece and draw a new one.
    ///
    /// Only leaves `Idle`. Returns false if the game was not idle.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        self.drop_counter_ms = 0;
        log::info!("game started");
        self.spawn_next();
        true
    }

    /// Switch between running and paused. No-op when idle or over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Idle | Phase::Over => return false,
        };
        log::debug!("phase -> {}", self.phase.as_str());
        true
    }

    /// Return to `Idle` with an empty board, zeroed counters, and a fresh lookahead piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = Tetromino::new(self.source.next_kind());
        self.score = 0;
        self.lines = 0;
        self.level = START_LEVEL;
        self.drop_interval_ms = get_drop_interval_ms(START_LEVEL);
        self.drop_counter_ms = 0;
        self.phase = Phase::Idle;
        self.last_event = None;
        log::info!("game reset");
    }

    /// Check whether the active piece collides with the board
    pub fn collision(&self) -> bool {
        self.active.is_some_and(|p| p.collides(&self.board))
    }

    /// Shift the active piece horizontally; stays put if the target collides
    pub fn move_piece(&mut self, delta_cols: i8) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(0, delta_cols);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Drop the active piece one row.
    ///
    /// If the row below is blocked the piece settles: it merges into the board, full rows
    /// are cleared, and the lookahead piece spawns. Always restarts the gravity timer.
    /// Returns true if the piece moved down.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let lowered = active.shifted(1, 0);
        let moved = if lowered.collides(&self.board) {
            self.settle(active);
            false
        } else {
            self.active = Some(lowered);
            true
        };
        self.drop_counter_ms = 0;
        moved
    }

    /// Drop the active piece to the lowest non-colliding row and settle it immediately.
    ///
    /// Returns the number of rows the piece fell.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let Some(mut active) = self.active else {
            return 0;
        };

        let mut distance = 0;
        loop {
            let lowered = active.shifted(1, 0);
            if lowered.collides(&self.board) {
                break;
            }
            active = lowered;
            distance += 1;
        }

        self.settle(active);
        self.drop_counter_ms = 0;
        distance
    }

    /// Advance to the next rotation state, trying wall kicks if it collides.
    ///
    /// Kicks shift the rotated piece +1, -1, +2, -2 columns from its original column.
    /// If nothing fits the piece keeps its previous rotation and column.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = Tetromino {
            rotation: next_rotation(active.kind, active.rotation),
            ..active
        };
        if !rotated.collides(&self.board) {
            self.active = Some(rotated);
            return true;
        }

        for offset in kick_offsets() {
            let kicked = rotated.shifted(0, offset);
            if !kicked.collides(&self.board) {
                log::trace!("{} kicked {:+} columns", active.kind.as_str(), offset);
                self.active = Some(kicked);
                return true;
            }
        }
        false
    }

    /// Merge `piece` into the board, score cleared rows, and spawn the lookahead piece
    fn settle(&mut self, piece: Tetromino) {
        self.board.merge(piece.cells(), piece.kind);
        self.active = None;

        let cleared = self.board.clear_full_rows();
        let rows = cleared.len();
        let before = self.level;
        let result = apply_clear(rows, self.score, self.lines, self.level);
        self.score = result.score;
        self.lines = result.lines;
        self.level = result.level;
        self.drop_interval_ms = result.drop_interval_ms;

        if rows > 0 {
            log::debug!(
                "cleared rows {:?} (+{} points, level {}, {}ms)",
                cleared.as_slice(),
                result.points,
                result.level,
                result.drop_interval_ms
            );
        }

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            rows_cleared: rows as u32,
            points: result.points,
            level: result.level,
            level_up: result.level > before,
        });

        self.spawn_next();
    }

    /// Promote the lookahead piece and draw a new one; a colliding spawn ends the game
    fn spawn_next(&mut self) {
        let piece = self.next;
        self.next = Tetromino::new(self.source.next_kind());
        self.active = Some(piece);

        if piece.collides(&self.board) {
            self.phase = Phase::Over;
            self.drop_counter_ms = 0;
            log::info!(
                "game over: score {} lines {} level {}",
                self.score,
                self.lines,
                self.level
            );
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval, one soft drop happens and the
    /// accumulator restarts. Ignored unless running. Returns true if a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Dispatch a keyboard command.
    ///
    /// While not running only [`GameCommand::TogglePause`] is honored.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::TogglePause => self.toggle_pause(),
            _ if !self.is_running() => false,
            GameCommand::MoveLeft => self.move_piece(-1),
            GameCommand::MoveRight => self.move_piece(1),
            GameCommand::SoftDrop => {
                self.soft_drop();
                true
            }
            GameCommand::HardDrop => {
                self.hard_drop();
                true
            }
            GameCommand::Rotate => self.rotate(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.iter_rows()) {
            dst.copy_from_slice(src);
        }
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next.kind;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.drop_interval_ms = self.drop_interval_ms;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Sequence;

    fn game_with(kinds: &[PieceKind]) -> GameState<Sequence> {
        GameState::with_source(Sequence::new(kinds.to_vec()))
    }

    fn running_with(kinds: &[PieceKind]) -> GameState<Sequence> {
        let mut state = game_with(kinds);
        assert!(state.start());
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.started());
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.drop_interval_ms, 1000);
        assert!(state.active.is_none());
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_start_promotes_lookahead() {
        let mut state = game_with(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        assert_eq!(state.next.kind, PieceKind::T);

        assert!(state.start());
        assert_eq!(state.active.unwrap().kind, PieceKind::T);
        assert_eq!(state.next.kind, PieceKind::S);
        assert!(state.is_running());

        // Only once.
        assert!(!state.start());
        assert_eq!(state.active.unwrap().kind, PieceKind::T);
    }

    #[test]
    fn test_tetromino_new_spawn_position() {
        let piece = Tetromino::new(PieceKind::O);
        assert_eq!((piece.row, piece.col, piece.rotation), (0, 4, 0));

        let piece = Tetromino::new(PieceKind::I);
        assert_eq!((piece.row, piece.col), (0, 3));
    }

    #[test]
    fn test_move_piece() {
        let mut state = running_with(&[PieceKind::T]);
        let col = state.active.unwrap().col;

        assert!(state.move_piece(1));
        assert_eq!(state.active.unwrap().col, col + 1);
        assert!(state.move_piece(-1));
        assert_eq!(state.active.unwrap().col, col);
    }

    #[test]
    fn test_move_piece_stops_at_wall() {
        let mut state = running_with(&[PieceKind::T]);

        let mut moved = 0;
        for _ in 0..10 {
            if state.move_piece(-1) {
                moved += 1;
            }
        }
        // T spawns at column 4 with its leftmost cell in matrix column 0.
        assert_eq!(moved, 4);
        assert_eq!(state.active.unwrap().col, 0);
        assert!(!state.collision());
    }

    #[test]
    fn test_move_piece_blocked_by_settled_cell() {
        let mut state = running_with(&[PieceKind::O]);
        // O covers columns 4-5 on rows 0-1; block column 6 on row 1.
        state.board.set_cell(1, 6, Some(PieceKind::Z));

        assert!(!state.move_piece(1));
        assert_eq!(state.active.unwrap().col, 4);
    }

    #[test]
    fn test_soft_drop_moves_and_resets_timer() {
        let mut state = running_with(&[PieceKind::T]);
        state.drop_counter_ms = 500;

        assert!(state.soft_drop());
        assert_eq!(state.active.unwrap().row, 1);
        assert_eq!(state.drop_counter_ms, 0);
    }

    #[test]
    fn test_soft_drop_settles_when_blocked() {
        let mut state = running_with(&[PieceKind::O, PieceKind::L]);
        // Bring the O to the floor: rows 18-19.
        while state.soft_drop() {}

        assert!(state.board.is_occupied(19, 4));
        assert!(state.board.is_occupied(18, 5));
        assert_eq!(state.active.unwrap().kind, PieceKind::L);
        assert_eq!(state.active.unwrap().row, 0);
        assert!(state.take_last_event().is_some());
    }

    #[test]
    fn test_hard_drop_distance() {
        let mut state = running_with(&[PieceKind::O]);
        assert_eq!(state.hard_drop(), 18);
        assert_eq!(state.board.occupied_count(), 4);
        assert!(state.board.is_occupied(18, 4));
        assert!(state.board.is_occupied(19, 5));
    }

    #[test]
    fn test_hard_drop_resets_timer() {
        let mut state = running_with(&[PieceKind::S]);
        state.drop_counter_ms = 900;
        state.hard_drop();
        assert_eq!(state.drop_counter_ms, 0);
    }

    #[test]
    fn test_rotate_cycles_states() {
        let mut state = running_with(&[PieceKind::T]);
        state.soft_drop();

        for expected in [1, 2, 3, 0] {
            assert!(state.rotate());
            assert_eq!(state.active.unwrap().rotation, expected);
        }
    }

    #[test]
    fn test_rotate_o_piece_is_identity() {
        let mut state = running_with(&[PieceKind::O]);
        let before = state.active.unwrap();
        assert!(state.rotate());
        assert_eq!(state.active.unwrap(), before);
    }

    #[test]
    fn test_rotate_kicks_right_off_left_wall() {
        let mut state = running_with(&[PieceKind::T]);
        state.soft_drop();
        // Rotation 1 has its cells in matrix column 1-2; from there slide to the wall.
        assert!(state.rotate());
        while state.move_piece(-1) {}
        let piece = state.active.unwrap();
        assert_eq!((piece.rotation, piece.col), (1, -1));

        // Rotation 2 needs matrix column 0, which is off the board at col -1.
        assert!(state.rotate());
        let piece = state.active.unwrap();
        assert_eq!(piece.rotation, 2);
        assert_eq!(piece.col, 0);
        assert!(!state.collision());
    }

    #[test]
    fn test_rotate_i_piece_is_identity() {
        let mut state = running_with(&[PieceKind::I]);
        state.soft_drop();
        let before = state.active.unwrap();
        assert!(state.rotate());
        assert_eq!(state.active.unwrap(), before);
        assert_eq!(
            state.active.unwrap().cells().collect::<Vec<_>>(),
            vec![(2, 3), (2, 4), (2, 5), (2, 6)]
        );
    }

    #[test]
    fn test_rotate_reverts_when_no_kick_fits() {
        let mut state = running_with(&[PieceKind::T]);
        state.soft_drop();
        state.soft_drop();
        // Fill every cell the T does not cover; no rotation or kick can fit.
        let before = state.active.unwrap();
        let own: Vec<(i8, i8)> = before.cells().collect();
        for row in 0..BOARD_ROWS as i8 {
            for col in 0..BOARD_COLS as i8 {
                if !own.contains(&(row, col)) {
                    state.board.set_cell(row, col, Some(PieceKind::Z));
                }
            }
        }
        assert!(!state.collision());

        assert!(!state.rotate());
        assert_eq!(state.active.unwrap(), before);
    }

    #[test]
    fn test_line_clear_scoring_and_level() {
        let mut state = running_with(&[PieceKind::I]);
        state.lines = 9;
        for col in 0..BOARD_COLS as i8 {
            if !(3..=6).contains(&col) {
                state.board.set_cell(19, col, Some(PieceKind::J));
            }
        }

        state.hard_drop();
        assert_eq!(state.lines, 10);
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 2);
        assert_eq!(state.drop_interval_ms, 900);
        let event = state.take_last_event().unwrap();
        assert_eq!(event.rows_cleared, 1);
        assert!(event.level_up);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut state = running_with(&[PieceKind::O]);
        // Block the spawn cells of the next O.
        state.board.set_cell(1, 4, Some(PieceKind::T));
        state.board.set_cell(1, 5, Some(PieceKind::T));
        // Current O sits at rows 0-1 and collides already; move it aside so it can settle.
        state.active = Some(Tetromino {
            col: 0,
            ..state.active.unwrap()
        });

        state.hard_drop();
        assert!(state.game_over());
        assert!(!state.started());
        assert!(state.collision());
    }

    #[test]
    fn test_start_on_blocked_board_ends_game() {
        let mut state = game_with(&[PieceKind::T]);
        state.board.set_cell(0, 5, Some(PieceKind::I));
        assert!(state.start());
        assert!(state.game_over());
    }

    #[test]
    fn test_tick_requires_interval_exceeded() {
        let mut state = running_with(&[PieceKind::T]);

        assert!(!state.tick(1000));
        assert_eq!(state.active.unwrap().row, 0);
        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().row, 1);
        assert_eq!(state.drop_counter_ms, 0);
    }

    #[test]
    fn test_tick_ignored_when_not_running() {
        let mut state = game_with(&[PieceKind::T]);
        assert!(!state.tick(5000));
        assert_eq!(state.drop_counter_ms, 0);

        state.start();
        state.toggle_pause();
        assert!(!state.tick(5000));
        assert_eq!(state.active.unwrap().row, 0);
    }

    #[test]
    fn test_pause_toggle_rules() {
        let mut state = game_with(&[PieceKind::T]);
        assert!(!state.toggle_pause());
        assert_eq!(state.phase, Phase::Idle);

        state.start();
        assert!(state.toggle_pause());
        assert_eq!(state.phase, Phase::Paused);
        assert!(state.started());
        assert!(state.toggle_pause());
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_apply_command_only_pause_when_paused() {
        let mut state = running_with(&[PieceKind::T]);
        state.apply_command(GameCommand::TogglePause);

        let before = state.active.unwrap();
        for cmd in [
            GameCommand::MoveLeft,
            GameCommand::MoveRight,
            GameCommand::SoftDrop,
            GameCommand::HardDrop,
            GameCommand::Rotate,
        ] {
            assert!(!state.apply_command(cmd));
        }
        assert_eq!(state.active.unwrap(), before);

        assert!(state.apply_command(GameCommand::TogglePause));
        assert!(state.apply_command(GameCommand::MoveRight));
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = running_with(&[PieceKind::I, PieceKind::T]);
        state.hard_drop();
        state.score = 1200;
        state.lines = 14;
        state.level = 2;
        state.drop_interval_ms = 900;

        state.reset();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.drop_interval_ms, 1000);
        assert!(state.active.is_none());
        assert_eq!(state.board.occupied_count(), 0);
        assert!(state.start());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = running_with(&[PieceKind::L, PieceKind::J]);
        state.board.set_cell(19, 0, Some(PieceKind::Z));
        let snap = state.snapshot();

        assert_eq!(snap.board[19][0], Some(PieceKind::Z));
        assert_eq!(snap.active.unwrap().kind, PieceKind::L);
        assert_eq!(snap.next, PieceKind::J);
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.level, 1);
    }
}
