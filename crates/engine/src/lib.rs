//! Frame driver - ties timing, input and rendering around the core rules.
//!
//! One logical thread of control: input commands are applied between frames,
//! each frame runs exactly one `tick()` followed by one render. The driver owns
//! the single [`GameState`](tetris_canvas_core::GameState); collaborators only
//! see it through snapshots.

pub mod clock;
pub mod driver;

pub use tetris_canvas_core as core;
pub use tetris_canvas_types as types;

pub use clock::FrameClock;
pub use driver::{FrameDriver, RenderSink};
