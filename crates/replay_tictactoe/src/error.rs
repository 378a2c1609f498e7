//! Engine error types.

use derive_more::{Display, Error};

/// Errors returned by [`GameEngine`](crate::GameEngine) commands.
///
/// Only history jumps can fail. Invalid plays are user input and are ignored
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A jump targeted a move that is not in the history.
    #[display("Move index {index} out of range (history has {len} entries)")]
    InvalidIndex {
        /// Requested move index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
