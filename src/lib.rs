//! Falling-block puzzle on a terminal canvas (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tetris_canvas::{core,engine,input,term,types}` and adds
//! the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tetris_canvas_core as core;
pub use tetris_canvas_engine as engine;
pub use tetris_canvas_input as input;
pub use tetris_canvas_term as term;
pub use tetris_canvas_types as types;
