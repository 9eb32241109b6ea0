//! Error types for todo domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The title exceeds the persisted length bound.
    #[error("title length {length} exceeds the {max} character bound")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The description is empty after trimming.
    #[error("description must not be empty")]
    EmptyDescription,
}

/// Error returned while parsing todo statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo status: {0}")]
pub struct ParseTodoStatusError(pub String);
