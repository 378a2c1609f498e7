//! Draw detection logic for tic-tac-toe.

use super::win::calculate_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && calculate_winner(board).winner().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position};

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(marks.chars()) {
            match c {
                'X' => board.set(*pos, Cell::Occupied(Player::X)),
                'O' => board.set(*pos, Cell::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert!(is_draw(&board_from("XOXOXXOXO")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from("XXXOXOOXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_open_cells() {
        assert!(!is_draw(&board_from("XOX.O....")));
    }
}
