//! Tests for win detection on single boards.

use rewind::{Board, Player, Position, Square, WinResult};
use rewind_tictactoe::rules::{LINES, evaluate, is_draw};

fn board_from(cells: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(cells.chars()) {
        *square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_column_win_after_five_moves() {
    // X at 0, 3, 6 and O at 1, 4.
    let board = board_from("XO.XO.X..");
    assert_eq!(
        evaluate(&board),
        WinResult::Winner {
            mark: Player::X,
            line: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        }
    );
}

#[test]
fn test_every_line_is_detected() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(evaluate(&board).line(), Some(line));
        assert_eq!(evaluate(&board).winner(), Some(Player::O));
    }
}

#[test]
fn test_line_order_is_rows_columns_diagonals() {
    let indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_double_line_reports_row_before_diagonal() {
    // Row 6-7-8 and diagonal 0-4-8 are both complete.
    let board = board_from("X.OOX.XXX");
    assert_eq!(
        evaluate(&board).line(),
        Some([Position::BottomLeft, Position::BottomCenter, Position::BottomRight])
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from("XOXXOOOXX");
    assert_eq!(evaluate(&board), WinResult::NoWinner);
    assert!(is_draw(&board));
}

#[test]
fn test_evaluation_is_repeatable() {
    let board = board_from("OXXXOX..O");
    let first = evaluate(&board);
    for _ in 0..3 {
        assert_eq!(evaluate(&board), first);
    }
    assert_eq!(first.winner(), Some(Player::O));
}
