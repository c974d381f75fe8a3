//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,render,input,term,types}` and owns
//! the host configuration and key dispatch used by the `blockfall` binary.

pub mod config;
pub mod host;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_render as render;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::HostConfig;
pub use host::apply_input;
