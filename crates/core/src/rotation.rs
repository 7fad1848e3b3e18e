//! Rotation resolver - clockwise matrix rotation plus SRS wall kicks

use crate::board::Board;
use crate::game_state::Tetromino;
use crate::pieces::kick_offsets;
use crate::shape::Shape;

/// Rotate a shape 90° clockwise.
///
/// Transpose, then reverse each row: an `R x C` matrix becomes `C x R`, and
/// `out[i][j] = in[R - 1 - j][i]`.
pub fn rotate_shape(shape: &Shape) -> Shape {
    let rows = shape.height();
    let cols = shape.width();
    let mut out = Shape::empty(rows, cols);

    for i in 0..cols {
        for j in 0..rows {
            out.set(j, i, shape.get(i, rows - 1 - j));
        }
    }

    out
}

/// Try to rotate a piece clockwise with wall kicks.
///
/// Offsets for the `(from, to)` transition are tried in table order against
/// the rotated shape, each relative to the piece's current position. The first
/// placement that fits wins. Returns `None` when every offset collides (or the
/// transition has no table entry); the caller keeps the original piece.
pub fn try_rotate(board: &Board, piece: &Tetromino) -> Option<Tetromino> {
    let to = piece.rotation.rotate_cw();
    let shape = rotate_shape(&piece.shape);

    kick_offsets(piece.kind, piece.rotation, to)
        .iter()
        .filter_map(|&(dx, dy)| {
            Some(Tetromino {
                shape,
                rotation: to,
                x: piece.x.checked_add(dx)?,
                y: piece.y.checked_add(dy)?,
                ..*piece
            })
        })
        .find(|candidate| board.fits(candidate))
}
