//! Renderer: paints game snapshots onto abstract pixel surfaces.
//!
//! The board and the lookahead preview go to two independent [`Surface`]s, each with
//! its own block size. [`PixelCanvas`] is the in-memory surface used by the terminal
//! host and by tests.

pub mod draw;
pub mod palette;
pub mod surface;

pub use draw::{draw_block, draw_board, draw_preview};
pub use palette::piece_color;
pub use surface::{PixelCanvas, Rect, Rgb, Rgba, Surface};
