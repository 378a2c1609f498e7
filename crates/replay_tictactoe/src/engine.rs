//! The game engine: commands in, views out.

use super::contracts::{Contract, PlayContract};
use super::error::EngineError;
use super::history::GameState;
use super::rules::calculate_winner;
use super::view::{GameView, SortOrder};
use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine with a branching, replayable history.
///
/// The UI layer drives it with [`play_at`](Self::play_at),
/// [`jump_to`](Self::jump_to) and [`toggle_sort_order`](Self::toggle_sort_order),
/// and reads [`current_view`](Self::current_view) after each command. Next
/// player and status are derived on every query, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    state: GameState,
    sort_order: SortOrder,
}

impl GameEngine {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial move-list order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Number of recorded snapshots.
    pub fn history_len(&self) -> usize {
        self.state.len()
    }

    /// Index of the viewed snapshot.
    pub fn current_move(&self) -> usize {
        self.state.current_move()
    }

    /// The viewed snapshot.
    pub fn current_board(&self) -> &Board {
        self.state.current_board()
    }

    /// Plays the current player's mark at cell `index` (0-8).
    ///
    /// Ignored when the viewed board already has a winner, the cell is
    /// occupied, or `index` is not a cell. Otherwise every snapshot after the
    /// viewed one is discarded and the new board becomes the latest move.
    #[instrument(skip(self), fields(current_move = self.state.current_move()))]
    pub fn play_at(&mut self, index: usize) {
        if let Err(reason) = PlayContract::pre(&self.state, &index) {
            debug!(%reason, "Ignoring play");
            return;
        }
        let Some(pos) = Position::from_index(index) else {
            return;
        };

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.next_player();
        let discarded = self.state.len() - 1 - self.state.current_move();
        let next = self.state.current_board().with_mark(pos, player);
        self.state.branch(next);

        info!(
            player = %player,
            position = %pos,
            move_number = self.state.current_move(),
            discarded,
            "Move played"
        );

        #[cfg(debug_assertions)]
        {
            let post = PlayContract::post(&before, &self.state);
            if let Err(violation) = &post {
                tracing::error!(%violation, "History invariant broken");
            }
            debug_assert!(post.is_ok(), "History invariant broken");
        }
    }

    /// Typed form of [`play_at`](Self::play_at).
    pub fn play(&mut self, pos: Position) {
        self.play_at(pos.to_index());
    }

    /// Views the snapshot at history index `index`.
    ///
    /// History is left intact, so jumping back and forth loses nothing until
    /// the next successful play.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index` is not a recorded move.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), EngineError> {
        let len = self.state.len();
        if index >= len {
            return Err(EngineError::InvalidIndex { index, len });
        }
        self.state.set_current_move(index);
        info!(index, "Jumped to move");
        Ok(())
    }

    /// Flips the move-list order. Game state is untouched.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
    }

    /// Starts a new game, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::new();
        info!("Game restarted");
    }

    /// Derives the view of the current snapshot.
    pub fn current_view(&self) -> GameView {
        let board = *self.state.current_board();
        GameView::derive(
            board,
            calculate_winner(&board),
            self.state.current_move(),
            self.state.len(),
            self.sort_order,
        )
    }
}
