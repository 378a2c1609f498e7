//! Alternating invariant: the k-th snapshot adds X for odd k and O for even k.

use super::Invariant;
use super::single_cell_progression::changed_cells;
use crate::{Cell, GameState, Player};

/// Invariant: players alternate X, O, X, O, ... down the history.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                // The mover at step k is whoever was on turn after k-1 moves.
                let expected = Cell::Occupied(Player::for_move(step));
                changed_cells(&pair[0], &pair[1])
                    .iter()
                    .all(|(_, _, placed)| *placed == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
