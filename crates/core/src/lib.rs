//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on terminal, drawing, or I/O code:
//!
//! - **Deterministic**: a seeded piece source produces identical games
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs headless, in the terminal host, or anywhere a host feeds it time
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 settled-cell grid with row clearing
//! - [`pieces`]: static piece catalog, rotation states, spawn columns, wall kicks
//! - [`rng`]: lookahead piece sources (uniform random, scripted sequence)
//! - [`scoring`]: line-clear points, level, and gravity interval
//! - [`game_state`]: active piece controller and the session state machine
//! - [`clock`]: frame clock and the loop that turns time into gravity ticks
//! - [`snapshot`]: plain-data view of a game for renderers
//!
//! # Game Rules
//!
//! - Each lookahead piece is drawn uniformly at random; there is no bag.
//! - Rotation advances through the kind's states and tries kicks of +1, -1, +2, -2 columns.
//! - A piece settles as soon as it cannot move down; there is no lock delay.
//! - Clearing 1/2/3/4 rows scores 100/300/500/800 times the current level.
//! - Every 10 lines raise the level; gravity speeds up by 100ms per level down to 100ms.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameCommand, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_command(GameCommand::MoveRight);
//! game.apply_command(GameCommand::Rotate);
//! game.apply_command(GameCommand::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the elapsed
//! milliseconds, or let a [`FrameLoop`] measure them from a [`FrameClock`].

pub mod board;
pub mod clock;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use clock::{FrameClock, FrameLoop, ManualClock, SystemClock};
pub use game_state::{collides, GameState, LockEvent, Tetromino};
pub use pieces::{get_shape, kick_offsets, rotations, Shape};
pub use rng::{PieceSource, Sequence, UniformRandom};
pub use scoring::{apply_clear, calculate_line_score, get_drop_interval_ms, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
