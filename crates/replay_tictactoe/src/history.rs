//! Branching move history.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Complete game state: every board snapshot plus the one being viewed.
///
/// `history[0]` is always the empty board and `history[n]` is the board after
/// the n-th move. `current_move` always indexes into `history`.
///
/// Deserialization checks [`HistoryInvariants`] and rejects any history that
/// play could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
}

impl GameState {
    /// Creates a fresh game: one empty snapshot, viewing it.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot being viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of recorded snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The snapshot being viewed.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// The snapshot at `index`, if recorded.
    pub fn board_at(&self, index: usize) -> Option<&Board> {
        self.history.get(index)
    }

    /// Whose turn it is at the viewed snapshot, derived from move parity.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Drops every snapshot after the viewed one, appends `board`, and views it.
    pub(crate) fn branch(&mut self, board: Board) {
        self.history.truncate(self.current_move + 1);
        self.history.push(board);
        self.current_move = self.history.len() - 1;
    }

    /// Views the snapshot at `index`. Callers check the bound.
    pub(crate) fn set_current_move(&mut self, index: usize) {
        debug_assert!(index < self.history.len());
        self.current_move = index;
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// A deserialized history that breaks one or more history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game history: {reason}")]
pub struct InvalidHistory {
    /// Descriptions of the violated invariants.
    reason: String,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_move: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidHistory;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            current_move: raw.current_move,
        };
        HistoryInvariants::check_all(&state).map_err(|violations| InvalidHistory {
            reason: violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        })?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_state_has_single_empty_snapshot() {
        let state = GameState::new();
        assert_eq!(state.len(), 1);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.current_board(), &Board::new());
        assert_eq!(state.next_player(), Player::X);
    }

    #[test]
    fn test_branch_discards_future() {
        let mut state = GameState::new();
        let first = Board::new().with_mark(Position::TopLeft, Player::X);
        let second = first.with_mark(Position::Center, Player::O);
        state.branch(first);
        state.branch(second);
        assert_eq!(state.len(), 3);

        state.set_current_move(1);
        let alternative = first.with_mark(Position::BottomRight, Player::O);
        state.branch(alternative);

        assert_eq!(state.len(), 3);
        assert_eq!(state.current_move(), 2);
        assert_eq!(state.current_board(), &alternative);
        assert_eq!(state.board_at(3), None);
    }

    #[test]
    fn test_deserialize_accepts_played_history() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let state = GameState::from_parts(vec![Board::new(), first], 0);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), state);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let err = serde_json::from_str::<GameState>(r#"{"history":[],"current_move":0}"#)
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid game history"));
    }

    #[test]
    fn test_deserialize_rejects_cursor_past_end() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let mut value = serde_json::to_value(GameState::from_parts(vec![Board::new(), first], 1))
            .unwrap();
        value["current_move"] = serde_json::json!(7);
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }

    #[test]
    fn test_deserialize_rejects_skipped_turn() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let state = GameState::from_parts(vec![Board::new(), first], 1);
        let json = serde_json::to_string(&state).unwrap();
        let err = serde_json::from_str::<GameState>(&json).unwrap_err();
        assert!(err.to_string().contains("Players alternate turns"));
    }
}
