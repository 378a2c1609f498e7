//! Read-only snapshots handed to the UI layer.

use super::rules::{WinResult, is_draw};
use super::types::{Board, Player};
use super::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Order in which the move list is presented. Never affects game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for a control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// Status of the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Nobody has won and cells remain; holds the player to move.
    #[display("Next player: {_0}")]
    InProgress(Player),
    /// Three in a row.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Full board, no winner.
    #[display("Draw: No one wins!")]
    Draw,
}

impl Status {
    /// Whether the snapshot is finished, so further plays on it are ignored.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }
}

/// One row of the history panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// Button text.
    description: String,
    /// Whether this entry is the snapshot being viewed.
    is_current: bool,
}

impl MoveEntry {
    /// Builds the entry for history index `index`.
    pub fn for_index(index: usize, current_move: usize) -> Self {
        let description = if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        };
        Self::new(index, description, index == current_move)
    }
}

/// Everything a UI layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// The viewed snapshot.
    board: Board,
    /// Status of the viewed snapshot.
    status: Status,
    /// Winner scan of the viewed snapshot.
    #[getter(skip)]
    win: WinResult,
    /// Move list in presentation order.
    moves: Vec<MoveEntry>,
    /// Order of `moves`.
    sort_order: SortOrder,
    /// Index of the viewed snapshot.
    current_move: usize,
}

impl GameView {
    /// Derives a view of `board`, the snapshot at `current_move` of a
    /// history holding `history_len` snapshots.
    pub(crate) fn derive(
        board: Board,
        win: WinResult,
        current_move: usize,
        history_len: usize,
        sort_order: SortOrder,
    ) -> Self {
        let status = match win.winner() {
            Some(winner) => Status::Won(winner),
            None if is_draw(&board) => Status::Draw,
            None => Status::InProgress(Player::for_move(current_move)),
        };

        let mut moves: Vec<MoveEntry> = (0..history_len)
            .map(|index| MoveEntry::for_index(index, current_move))
            .collect();
        if sort_order == SortOrder::Descending {
            moves.reverse();
        }

        Self {
            board,
            status,
            win,
            moves,
            sort_order,
            current_move,
        }
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Cells of the winning line, empty when nobody has won.
    pub fn winning_line(&self) -> &[Position] {
        self.win.line()
    }

    /// Winning line as board indices.
    pub fn winning_indices(&self) -> Vec<usize> {
        self.winning_line().iter().map(|p| p.to_index()).collect()
    }

    /// Whether `pos` should be highlighted as part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.win.contains(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_entry_descriptions() {
        assert_eq!(MoveEntry::for_index(0, 0).description(), "Go to game start");
        assert_eq!(MoveEntry::for_index(3, 0).description(), "Go to move #3");
        assert!(*MoveEntry::for_index(2, 2).is_current());
        assert!(!*MoveEntry::for_index(1, 2).is_current());
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::InProgress(Player::O).to_string(), "Next player: O");
        assert_eq!(Status::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "Draw: No one wins!");
    }

    #[test]
    fn test_sort_order_toggle_label_names_next_order() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle().toggle_label(), "Sort Descending");
    }

    #[test]
    fn test_descending_view_reverses_moves() {
        let view = GameView::derive(
            Board::new(),
            WinResult::default(),
            0,
            3,
            SortOrder::Descending,
        );
        let indices: Vec<usize> = view.moves().iter().map(|m| *m.index()).collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }
}
