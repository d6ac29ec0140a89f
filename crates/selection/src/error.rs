//! Error types for selecting and scaling dishes.
//!
//! Every variant is recoverable by the caller: disable the pick action,
//! reject the serving count, or ask the user to pick first.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// There is nothing to pick from
    #[error("Cannot pick a dish from an empty catalog")]
    EmptyCatalog,

    /// Serving count outside the supported set
    #[error("Unsupported number of servings: {0} (expected 1, 2 or 4)")]
    InvalidServings(u32),

    /// An operation needed the current dish but none was picked yet
    #[error("No dish has been picked yet")]
    NoSelection,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SelectionError>;
