//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::calculate_winner;
use super::{GameState, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Why an action may not be applied.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), String>;
}

/// Why a play was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The viewed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The index does not name a cell.
    #[display("Cell index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),
}

/// Contract for plays at a raw cell index.
///
/// Preconditions:
/// - The index names a cell
/// - The viewed board has no winner
/// - The cell is empty
///
/// Postconditions:
/// - Every history invariant holds
pub struct PlayContract;

impl Contract<GameState, usize> for PlayContract {
    type Rejection = Rejection;

    #[instrument(skip(state))]
    fn pre(state: &GameState, index: &usize) -> Result<(), Rejection> {
        let pos = Position::from_index(*index).ok_or(Rejection::OutOfBounds(*index))?;
        let board = state.current_board();

        if calculate_winner(board).winner().is_some() {
            return Err(Rejection::GameOver);
        }

        if !board.is_empty(pos) {
            return Err(Rejection::SquareOccupied(pos));
        }

        Ok(())
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), String> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            format!("Postcondition failed: {}", descriptions)
        })
    }
}
