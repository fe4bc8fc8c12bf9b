//! Composer error types

use thiserror::Error;

/// Result type for selection operations
pub type SelectionResult<T> = Result<T, SelectionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown setting: {id}")]
    UnknownSetting { id: String },

    #[error("Invalid option for {id}: {option}")]
    InvalidOption { id: String, option: String },
}
