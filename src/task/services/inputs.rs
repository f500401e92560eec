//! Request payloads accepted by the task service and their validation.
//!
//! Each payload carries raw caller values. Validation runs imperatively in
//! the service before anything reaches the repository.

use crate::task::domain::{PageRequest, TaskChanges, TaskDescription, TaskDomainError, TaskTitle};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskInput {
    title: String,
    description: Option<String>,
}

impl CreateTaskInput {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates the payload and returns the domain field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title or description violates
    /// its length rules.
    pub fn validate(self) -> Result<(TaskTitle, Option<TaskDescription>), TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let description = self.description.map(TaskDescription::new).transpose()?;
        Ok((title, description))
    }
}

/// Request payload for a partial task update. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskInput {
    title: Option<String>,
    description: Option<Option<String>>,
    completed: Option<bool>,
}

impl UpdateTaskInput {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the stored description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Validates the supplied fields and returns the domain change set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a supplied title or description
    /// violates its length rules.
    pub fn validate(self) -> Result<TaskChanges, TaskDomainError> {
        let title = self.title.map(TaskTitle::new).transpose()?;
        let description = match self.description {
            None => None,
            Some(None) => Some(None),
            Some(Some(text)) => Some(Some(TaskDescription::new(text)?)),
        };
        Ok(TaskChanges {
            title,
            description,
            completed: self.completed,
        })
    }
}

/// Request payload for a page of tasks. Absent values take the defaults of
/// [`PageRequest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationInput {
    limit: Option<i64>,
    offset: Option<i64>,
}

impl PaginationInput {
    /// Creates a request that uses the default window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of tasks to skip.
    #[must_use]
    pub const fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Validates the window and applies defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NegativePagination`] for negative values.
    pub fn validate(self) -> Result<PageRequest, TaskDomainError> {
        PageRequest::new(self.limit, self.offset)
    }
}
