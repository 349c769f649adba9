//! Error types for the encounter engine.

use thiserror::Error;

/// Result type for encounter operations.
pub type EncounterResult<T> = Result<T, EncounterError>;

/// Errors raised at the boundary of the encounter engine.
///
/// Moves and effects never fail; only choosing from the menu can.
#[derive(Debug, Error)]
pub enum EncounterError {
    /// Menu index out of range.
    #[error("invalid choice {index}: the menu has {available} entries")]
    InvalidChoice {
        /// The index that was asked for.
        index: usize,
        /// How many entries the menu has.
        available: usize,
    },

    /// The encounter has already ended.
    #[error("the encounter is over")]
    Finished,

    /// A keyword action with no registered effect.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}
