//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). They never fail and
//! never look at history, so any snapshot can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, calculate_winner};
