//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,
}

/// Error returned while parsing palette colors from storage or wire input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task color: {0}")]
pub struct ParseTaskColorError(pub String);

/// Error returned while parsing status filters from storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter: {0}")]
pub struct ParseStatusFilterError(pub String);
