//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a canonical UUID string.
    #[error("invalid task identifier '{0}', expected a UUID")]
    InvalidTaskId(String),

    /// The task title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("title must be at most {max} characters, got {length}")]
    TitleTooLong {
        /// Length of the rejected title in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// A text field contains a NUL character.
    #[error("{field} must not contain NUL characters")]
    NulCharacter {
        /// Name of the rejected field.
        field: &'static str,
    },

    /// The task description exceeds the maximum length.
    #[error("description must be at most {max} characters, got {length}")]
    DescriptionTooLong {
        /// Length of the rejected description in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// A pagination parameter is negative.
    #[error("{field} must not be negative, got {value}")]
    NegativePagination {
        /// Name of the rejected parameter.
        field: &'static str,
        /// Rejected value.
        value: i64,
    },
}
