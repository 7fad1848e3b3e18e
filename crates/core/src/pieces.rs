//! Pieces module - tetromino catalog and SRS wall kick tables
//!
//! Each kind has one canonical matrix; the other three rotation states are
//! derived from it by [`rotate_shape`](crate::rotation::rotate_shape).
//! Kick tables follow the Super Rotation System.
//! Reference: https://tetris.wiki/SRS

use rand::Rng;

use crate::game_state::Tetromino;
use crate::shape::Shape;
use crate::types::{PieceKind, Rotation, SPAWN_POSITION};

/// 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PieceColor {
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }
}

/// Static definition of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    /// Canonical (rotation 0) matrix
    pub shape: Shape,
    pub color: PieceColor,
    pub name: &'static str,
}

/// The seven pieces, in catalog order (index == `PieceKind::index()`)
pub static CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        shape: Shape::from_codes([[1, 1, 1, 1]]),
        color: PieceColor::hex(0x06b6d4),
        name: "I",
    },
    PieceDef {
        kind: PieceKind::J,
        shape: Shape::from_codes([[0, 2], [0, 2], [2, 2]]),
        color: PieceColor::hex(0x2563eb),
        name: "J",
    },
    PieceDef {
        kind: PieceKind::L,
        shape: Shape::from_codes([[3, 0], [3, 0], [3, 3]]),
        color: PieceColor::hex(0xf59e42),
        name: "L",
    },
    PieceDef {
        kind: PieceKind::O,
        shape: Shape::from_codes([[4, 4], [4, 4]]),
        color: PieceColor::hex(0xffd600),
        name: "O",
    },
    PieceDef {
        kind: PieceKind::S,
        shape: Shape::from_codes([[0, 5, 5], [5, 5, 0]]),
        color: PieceColor::hex(0x22d3ee),
        name: "S",
    },
    PieceDef {
        kind: PieceKind::T,
        shape: Shape::from_codes([[6, 6, 6], [0, 6, 0]]),
        color: PieceColor::hex(0xa21caf),
        name: "T",
    },
    PieceDef {
        kind: PieceKind::Z,
        shape: Shape::from_codes([[7, 7, 0], [0, 7, 7]]),
        color: PieceColor::hex(0xef4444),
        name: "Z",
    },
];

/// Look up a catalog entry by index (0..7)
pub fn kind_of(index: usize) -> Option<&'static PieceDef> {
    CATALOG.get(index)
}

/// Catalog entry for a kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.index()]
}

/// Canonical (rotation 0) shape for a kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    piece_def(kind).shape
}

/// Display color for a kind
pub fn piece_color(kind: PieceKind) -> PieceColor {
    piece_def(kind).color
}

/// Pick a kind uniformly at random.
///
/// Plain uniform draw, no 7-bag: the same kind can repeat back to back.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

/// Create a new piece at the spawn position in rotation state 0
pub fn spawn_piece(kind: PieceKind) -> Tetromino {
    Tetromino {
        kind,
        shape: spawn_shape(kind),
        rotation: Rotation::North,
        x: SPAWN_POSITION.0,
        y: SPAWN_POSITION.1,
    }
}

/// SRS wall kick offsets, `(dx, dy)` tried in order
pub type KickOffsets = &'static [(i8, i8)];

/// Kick table indexed by `from * 4 + to`; transitions that are not a single
/// quarter turn have no entry.
pub type KickTable = [KickOffsets; 16];

const NO_KICKS: KickOffsets = &[];

/// Shared by J, L, O, S, T and Z
const JLSTZ_KICKS: KickTable = [
    // 0->0, 0->1, 0->2, 0->3
    NO_KICKS,
    &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    NO_KICKS,
    &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->0, 1->1, 1->2, 1->3
    &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    NO_KICKS,
    &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    NO_KICKS,
    // 2->0, 2->1, 2->2, 2->3
    NO_KICKS,
    &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    NO_KICKS,
    &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->0, 3->1, 3->2, 3->3
    &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    NO_KICKS,
    &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    NO_KICKS,
];

/// I piece kick table (different from JLSTZ)
const I_KICKS: KickTable = [
    // 0->0, 0->1, 0->2, 0->3
    NO_KICKS,
    &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    NO_KICKS,
    &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1->0, 1->1, 1->2, 1->3
    &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    NO_KICKS,
    &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    NO_KICKS,
    // 2->0, 2->1, 2->2, 2->3
    NO_KICKS,
    &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    NO_KICKS,
    &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->0, 3->1, 3->2, 3->3
    &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    NO_KICKS,
    &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    NO_KICKS,
];

/// Get kick table for a piece kind
pub fn get_kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Offsets to try for a `from -> to` transition. Empty when the pair has no entry.
pub fn kick_offsets(kind: PieceKind, from: Rotation, to: Rotation) -> KickOffsets {
    get_kick_table(kind)[from.index() * 4 + to.index()]
}
