//! Read-only copy of the game state handed to renderers.

use crate::game_state::Tetromino;
use crate::shape::Shape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Occupied cells in board coordinates, as `(x, y, kind)`
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        self.shape
            .blocks()
            .map(move |(dx, dy, kind)| {
                (self.x.saturating_add(dx), self.y.saturating_add(dy), kind)
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Cell codes, row 0 on top (0 = empty, 1..=7 = piece kind)
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub drop_tick: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            paused: false,
            game_over: false,
            drop_tick: 0,
        }
    }
}
