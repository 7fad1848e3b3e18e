//! Board tests: bounds, collision, merge and line clearing via the public API

use tetris_canvas::core::{spawn_piece, Board, Tetromino};
use tetris_canvas::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::S));
    }
}

fn occupied(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);
    assert_eq!(occupied(&board), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert_eq!(board.get(9, 19), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert!(board.set(0, 0, Some(PieceKind::T)));
    assert!(board.is_occupied(0, 0));
}

#[test]
fn test_fits_walls_and_floor() {
    let board = Board::new();
    let mut piece: Tetromino = spawn_piece(PieceKind::O);

    piece.x = 0;
    assert!(board.fits(&piece));
    piece.x = -1;
    assert!(!board.fits(&piece), "left wall");
    piece.x = 8;
    assert!(board.fits(&piece));
    piece.x = 9;
    assert!(!board.fits(&piece), "right wall");

    piece.x = 4;
    piece.y = 18;
    assert!(board.fits(&piece));
    piece.y = 19;
    assert!(!board.fits(&piece), "floor");
}

#[test]
fn test_fits_blocked_by_locked_cell() {
    let mut board = Board::new();
    board.set(4, 1, Some(PieceKind::Z));
    let piece = spawn_piece(PieceKind::O);
    // O at (3,0) covers columns 3..=4, rows 0..=1
    assert!(!board.fits(&piece));
    assert!(board.fits(&piece.shifted(2, 0).unwrap()));
}

#[test]
fn test_merge_writes_piece_kind() {
    let mut board = Board::new();
    let piece = spawn_piece(PieceKind::T).shifted(0, 10).unwrap();
    board.merge(&piece);

    assert_eq!(occupied(&board), 4);
    for (x, y, kind) in piece.blocks() {
        assert_eq!(board.get(x, y), Some(Some(kind)));
    }
}

#[test]
fn test_merged_piece_no_longer_fits_in_place() {
    for kind in PieceKind::ALL {
        let mut board = Board::new();
        let piece = spawn_piece(kind).shifted(0, 10).unwrap();
        assert!(board.fits(&piece), "{kind:?} fits on an empty board");

        board.merge(&piece);
        assert!(!board.fits(&piece), "{kind:?} collides with its own blocks");
    }
}

#[test]
fn test_clear_non_contiguous_rows() {
    let mut board = Board::new();
    board.set(0, 0, Some(PieceKind::I));
    board.set(0, 1, Some(PieceKind::J));
    fill_row(&mut board, 2);
    board.set(0, 3, Some(PieceKind::L));
    board.set(0, 4, Some(PieceKind::O));
    fill_row(&mut board, 5);
    board.set(0, 19, Some(PieceKind::T));

    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.contains(&2));
    assert!(cleared.contains(&5));

    // Rows above each cleared row move down, order preserved
    assert!(!board.is_row_occupied(0));
    assert!(!board.is_row_occupied(1));
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::I)));
    assert_eq!(board.get(0, 3), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 4), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(occupied(&board), 5);
}

#[test]
fn test_clear_lines_noop_without_full_rows() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::Z));
    }
    let before = board.clone();
    assert!(board.clear_lines().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y);
    }
    assert_eq!(board.clear_lines().len(), BOARD_HEIGHT as usize);
    assert_eq!(occupied(&board), 0);
}
