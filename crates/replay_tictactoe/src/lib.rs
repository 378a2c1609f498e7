//! Replay Tic-Tac-Toe - rules engine with a branching move history.
//!
//! The engine owns every board snapshot of the game and the index of the one
//! being viewed. A UI layer sends it three commands and reads back a
//! [`GameView`] after each:
//!
//! - [`GameEngine::play_at`] places the next mark, discarding any snapshots
//!   after the viewed one
//! - [`GameEngine::jump_to`] views an earlier (or later) snapshot
//! - [`GameEngine::toggle_sort_order`] flips the move list order
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     engine.play_at(cell);
//! }
//!
//! let view = engine.current_view();
//! assert_eq!(view.status_text(), "Winner: X");
//! assert_eq!(view.winning_indices(), vec![0, 3, 6]);
//!
//! engine.jump_to(2).unwrap();
//! assert_eq!(engine.current_view().status_text(), "Next player: X");
//! ```

mod contracts;
mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use contracts::{Contract, PlayContract, Rejection};
pub use engine::GameEngine;
pub use error::EngineError;
pub use history::{GameState, InvalidHistory};
pub use position::Position;
pub use rules::{WinResult, calculate_winner};
pub use types::{Board, Cell, Player};
pub use view::{GameView, MoveEntry, SortOrder, Status};
