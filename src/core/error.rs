//! Error types for core module
//!
//! Failures of the terminal front end itself. Gameplay refusals are
//! [`crate::game::MoveError`] values and never end up here.

use thiserror::Error;

/// Errors that can stop the terminal front end
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading commands or writing output failed
    #[error("Console I/O error: {0}")]
    ConsoleIo(#[from] std::io::Error),

    /// Board snapshot could not be encoded
    #[error("Snapshot serialization error: {0}")]
    SnapshotSerialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
