//! Progression invariant: each snapshot adds exactly one mark to the previous one.

use super::Invariant;
use crate::{Board, Cell, GameState, Position};
use strum::IntoEnumIterator;

/// Invariant: `history[k]` differs from `history[k-1]` by one Empty -> mark change.
///
/// Together with an empty first snapshot this also gives `history[k]` exactly
/// `k` marks.
pub struct SingleCellProgressionInvariant;

/// Positions that changed between two snapshots, with the cell before and after.
pub(crate) fn changed_cells(before: &Board, after: &Board) -> Vec<(Position, Cell, Cell)> {
    Position::iter()
        .filter_map(|pos| {
            let (old, new) = (before.get(pos), after.get(pos));
            (old != new).then_some((pos, old, new))
        })
        .collect()
}

impl Invariant<GameState> for SingleCellProgressionInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let steps_ok = history.windows(2).all(|pair| {
            matches!(
                changed_cells(&pair[0], &pair[1]).as_slice(),
                [(_, Cell::Empty, Cell::Occupied(_))]
            )
        });

        steps_ok
            && history
                .iter()
                .enumerate()
                .all(|(k, board)| board.occupied_count() == k)
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous snapshot"
    }
}
