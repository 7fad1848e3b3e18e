//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so the core rules,
//! the frame driver and the terminal renderer can all share them.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: column 3, row 0
//!
//! # Timing
//!
//! Gravity is counted in frames, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `DROP_DELAY_TICKS` | 28 | Frames per gravity step |
//!
//! # Examples
//!
//! ```
//! use tetris_canvas_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::T.cell_code(), 6);
//! assert_eq!(PieceKind::from_cell_code(6), Some(PieceKind::T));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position (x, y) of a new piece's top-left shape cell
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames between two gravity steps.
pub const DROP_DELAY_TICKS: u32 = 28;

/// Points per cleared line. Multi-line clears score `n * LINE_CLEAR_POINTS`, no bonus.
pub const LINE_CLEAR_POINTS: u32 = 100;


/// The seven tetromino piece kinds, in catalog order.
///
/// The discriminant order matters: a board cell holding kind `k` is exported
/// to renderers as the code `k.index() + 1` (I=1 ... Z=7, 0 = empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position in the catalog (0..7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Numeric cell value (1..=7) used in exported grids.
    pub fn cell_code(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::cell_code`]. `0` and unknown codes yield `None`.
    pub fn from_cell_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Single-letter name
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_canvas_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "I");
    /// assert_eq!(PieceKind::Z.as_str(), "Z");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Rotation states, numbered 0-3 in clockwise order.
///
/// - **North** (0): spawn orientation
/// - **East** (1): rotated 90° clockwise
/// - **South** (2): rotated 180°
/// - **West** (3): rotated 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_canvas_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation state index in `0..4`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Build from an index, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Lifecycle of a game.
///
/// A fresh game starts `Paused`; gameplay is frozen until it is resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    Running,
    #[default]
    Paused,
    Over,
}

/// Discrete player commands delivered to the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise (with wall kicks)
    RotateCw,
    /// Drop piece to the lowest valid row; it locks on the next gravity step
    HardDrop,
    /// Click semantics: restart when the game is over, otherwise toggle pause
    ToggleClick,
    /// Start a fresh game immediately
    Restart,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;
