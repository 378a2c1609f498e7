//! Cursor invariant: history is non-empty, starts empty, and the viewed index exists.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `0 <= current_move < history.len()` and `history[0]` is empty.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        match state.history().first() {
            Some(start) => *start == Board::new() && state.current_move() < state.len(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts from an empty board and the current move is recorded"
    }
}
