//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has **no dependency** on
//! UI, terminal or I/O, so the same rules run headless in tests and benches.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetromino definitions, colors and SRS kick tables
//! - [`shape`]: small fixed-capacity shape matrix
//! - [`board`]: 10x20 grid with fit-test, merge and line clearing
//! - [`rotation`]: clockwise rotation with wall kick resolution
//! - [`game_state`]: gravity, locking, scoring and the running/paused/over lifecycle
//! - [`snapshot`]: read-only state copy for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks one of the seven kinds uniformly
//! - **SRS kicks**: clockwise rotation tries five offsets before giving up
//! - **Frame gravity**: the piece falls one row every 28 frames
//! - **Hard drop**: moves the piece down only; it locks on the next gravity step
//! - **Scoring**: 100 points per cleared line, no multi-line bonus
//! - **Top-out**: the game ends when a lock leaves any block in row 0
//!
//! # Example
//!
//! ```
//! use tetris_canvas_core::GameState;
//! use tetris_canvas_types::{GameAction, GameStatus};
//!
//! // A fresh game is paused until resumed
//! let mut game = GameState::new(12345);
//! assert_eq!(game.status(), GameStatus::Paused);
//! game.resume();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Run frames until the dropped piece locks
//! for _ in 0..game.drop_delay() {
//!     game.tick();
//! }
//! assert!(game.board().is_row_occupied(19));
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rotation;
pub mod shape;
pub mod snapshot;

pub use tetris_canvas_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameState, Tetromino};
pub use pieces::{kind_of, piece_color, random_kind, spawn_piece, PieceColor, PieceDef};
pub use rotation::{rotate_shape, try_rotate};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
