//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`].
//! It holds no state: every event maps on its own, and anything unrecognised
//! maps to `None`.

pub mod map;

pub use tetris_canvas_types as types;

pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit};
