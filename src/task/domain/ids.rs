//! Task identifier and the textual UUID check used at the service boundary.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Byte offsets of the hyphens in the canonical 8-4-4-4-12 form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Length of the canonical hyphenated form.
const CANONICAL_LENGTH: usize = 36;

/// Returns `true` when `value` is a UUID in canonical hyphenated form.
///
/// Any version is accepted and hex digits are matched case-insensitively.
/// The simple, braced and URN spellings are rejected.
#[must_use]
pub fn is_valid_uuid(value: &str) -> bool {
    value.len() == CANONICAL_LENGTH
        && value.bytes().enumerate().all(|(index, byte)| {
            if HYPHEN_POSITIONS.contains(&index) {
                byte == b'-'
            } else {
                byte.is_ascii_hexdigit()
            }
        })
}

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a task identifier from its canonical textual form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when `value` fails
    /// [`is_valid_uuid`].
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        if !is_valid_uuid(value) {
            return Err(TaskDomainError::InvalidTaskId(value.to_owned()));
        }
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidTaskId(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
