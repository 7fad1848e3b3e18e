//! Terminal front end for the game.
//!
//! The view paints snapshots onto a [`Canvas`] of semantic glyphs (piece
//! kinds, the well, labels); the [`Screen`] resolves them to catalog colours
//! and writes only what changed since the previous frame. No widget toolkit is
//! involved: the terminal is treated as a grid of coloured cells, with two
//! columns per board cell.

pub mod canvas;
pub mod game_view;
pub mod screen;
pub mod sink;

pub use tetris_canvas_core as core;
pub use tetris_canvas_engine as engine;
pub use tetris_canvas_types as types;

pub use canvas::{Canvas, Glyph, Ink};
pub use game_view::{GameView, Viewport};
pub use screen::{encode_changes, encode_full, Screen};
pub use sink::TermSink;
