//! Tests for board move validation and terminal detection.

use tictactoe::{Board, Mark, MoveError, Position, Square};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("coordinates in range")
}

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new();
    assert_eq!(board.winning_mark(), None);
    assert!(!board.is_full());
}

#[test]
fn test_position_rejects_out_of_range_coordinates() {
    assert!(Position::new(3, 0).is_none());
    assert!(Position::new(0, 3).is_none());
    assert!(Position::new(7, 7).is_none());
    assert!(Position::new(2, 2).is_some());
}

#[test]
fn test_apply_move_sets_empty_square() {
    let mut board = Board::new();
    board.apply_move(pos(1, 1), Mark::X).expect("center is empty");
    assert_eq!(board.square(pos(1, 1)), Square::Occupied(Mark::X));
    assert_eq!(board.empty_positions().len(), 8);
}

#[test]
fn test_apply_move_rejects_occupied_square() {
    let mut board = Board::new();
    board.apply_move(pos(0, 0), Mark::X).expect("corner is empty");

    let result = board.apply_move(pos(0, 0), Mark::O);
    assert_eq!(result, Err(MoveError::Occupied(pos(0, 0))));

    // No mutation on rejection.
    assert_eq!(board.square(pos(0, 0)), Square::Occupied(Mark::X));
    assert_eq!(board.empty_positions().len(), 8);
}

#[test]
fn test_each_row_win_is_detected() {
    for row in 0..3 {
        let mut board = Board::new();
        for col in 0..3 {
            board.apply_move(pos(row, col), Mark::X).expect("empty");
        }
        assert_eq!(board.winning_mark(), Some(Mark::X));
    }
}

#[test]
fn test_each_column_win_is_detected() {
    for col in 0..3 {
        let mut board = Board::new();
        for row in 0..3 {
            board.apply_move(pos(row, col), Mark::O).expect("empty");
        }
        assert_eq!(board.winning_mark(), Some(Mark::O));
    }
}

#[test]
fn test_diagonal_wins_are_detected() {
    let mut board = Board::new();
    for i in 0..3 {
        board.apply_move(pos(i, i), Mark::X).expect("empty");
    }
    assert_eq!(board.winning_mark(), Some(Mark::X));

    let mut board = Board::new();
    for i in 0..3 {
        board.apply_move(pos(i, 2 - i), Mark::O).expect("empty");
    }
    assert_eq!(board.winning_mark(), Some(Mark::O));
}

#[test]
fn test_win_detected_before_board_is_full() {
    let mut board = Board::new();
    board.apply_move(pos(0, 0), Mark::X).expect("empty");
    board.apply_move(pos(1, 1), Mark::O).expect("empty");
    board.apply_move(pos(0, 1), Mark::X).expect("empty");
    board.apply_move(pos(2, 2), Mark::O).expect("empty");
    assert_eq!(board.winning_mark(), None);

    board.apply_move(pos(0, 2), Mark::X).expect("empty");
    assert_eq!(board.winning_mark(), Some(Mark::X));
    assert!(!board.is_full());
}

#[test]
fn test_full_board_without_winner() {
    // X X O / O O X / X O X - no line.
    let moves = [
        ((0, 0), Mark::X),
        ((0, 1), Mark::X),
        ((0, 2), Mark::O),
        ((1, 0), Mark::O),
        ((1, 1), Mark::O),
        ((1, 2), Mark::X),
        ((2, 0), Mark::X),
        ((2, 1), Mark::O),
        ((2, 2), Mark::X),
    ];
    let mut board = Board::new();
    for ((row, col), mark) in moves {
        assert!(!board.is_full());
        board.apply_move(pos(row, col), mark).expect("empty");
    }
    assert!(board.is_full());
    assert_eq!(board.winning_mark(), None);
}

#[test]
fn test_reset_clears_every_square() {
    let mut board = Board::new();
    board.apply_move(pos(0, 0), Mark::X).expect("empty");
    board.apply_move(pos(2, 2), Mark::O).expect("empty");

    board.reset();
    assert_eq!(board.empty_positions().len(), 9);
    for position in Position::ALL {
        assert!(board.is_empty(position));
    }
}

#[test]
fn test_empty_positions_shrinks_by_one_per_move() {
    let mut board = Board::new();
    let mut mark = Mark::X;
    for (expected, position) in Position::ALL.iter().enumerate() {
        assert_eq!(board.empty_positions().len(), 9 - expected);
        board.apply_move(*position, mark).expect("empty");
        assert!(!board.empty_positions().contains(position));
        mark = mark.opponent();
    }
    assert!(board.empty_positions().is_empty());
}
