//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, checked in this order.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of scanning a board for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    winner: Option<Player>,
    line: Option<[Position; 3]>,
}

impl WinResult {
    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The winning line, empty when nobody has won.
    pub fn line(&self) -> &[Position] {
        match &self.line {
            Some(line) => line.as_slice(),
            None => &[],
        }
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are scanned in [`LINES`] order and the scan stops at the first match,
/// so a board with two completed lines reports the earlier one.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Cell::Occupied(player) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return WinResult {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    WinResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Cell::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let result = calculate_winner(&Board::new());
        assert_eq!(result.winner(), None);
        assert!(result.line().is_empty());
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let result = calculate_winner(&board);
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(
            result.line(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let result = calculate_winner(&board);
        assert_eq!(result.winner(), Some(Player::O));
        assert!(result.contains(Position::Center));
        assert!(!result.contains(Position::TopLeft));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(calculate_winner(&board).winner(), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        mark(&mut board, Player::X, &[Position::TopLeft, Position::TopCenter]);
        mark(&mut board, Player::O, &[Position::TopRight]);
        assert_eq!(calculate_winner(&board).winner(), None);
    }

    #[test]
    fn test_earlier_line_wins_tie() {
        // Illegal board: X owns the top row and O owns the bottom row.
        let mut board = Board::new();
        mark(
            &mut board,
            Player::O,
            &[
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        );
        mark(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let result = calculate_winner(&board);
        assert_eq!(result.winner(), Some(Player::X));
        assert_eq!(result.line(), &LINES[0]);
    }

    #[test]
    fn test_row_beats_column_when_both_complete() {
        // X fills the left column and the top row; the row is listed first.
        let mut board = Board::new();
        mark(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(calculate_winner(&board).line(), &LINES[0]);
    }
}
