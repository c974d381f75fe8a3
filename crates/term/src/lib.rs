//! Terminal host surface.
//!
//! Renders the game into a simple framebuffer that is flushed to the terminal with
//! `crossterm`. The board and preview pictures come from the pixel renderer and are
//! downsampled into half-block cells; HUD text and overlays are plain characters.
//!
//! - [`fb`]: styled character framebuffer and half-block blitting
//! - [`game_view`]: snapshot to framebuffer layout (board, side panel, overlays)
//! - [`renderer`]: raw-mode terminal writer with per-run diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
