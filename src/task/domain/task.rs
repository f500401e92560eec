//! Task aggregate root and its partial-update payload.

use super::{TaskDescription, TaskId, TaskTitle};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated set of field changes for a partial task update.
///
/// `None` leaves a field untouched. For `description`, `Some(None)` clears
/// the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement or cleared description.
    pub description: Option<Option<TaskDescription>>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl Task {
    /// Creates a new, not yet completed task with a fresh identifier.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: Option<TaskDescription>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = now(clock);
        Self {
            id: TaskId::new(),
            title,
            description,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges the present fields of `changes` into the task.
    ///
    /// `updated_at` is refreshed even when `changes` is empty, matching a
    /// save of an unmodified record.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) {
        let TaskChanges {
            title,
            description,
            completed,
        } = changes;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_completed) = completed {
            self.completed = new_completed;
        }
        self.touch(clock);
    }

    /// Marks the task as completed. Completing a completed task is a no-op
    /// apart from the timestamp refresh.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.completed = true;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp, never moving it before
    /// `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = now(clock).max(self.created_at);
    }
}

/// Reads `clock` at microsecond precision, the resolution of `timestamptz`,
/// so a returned task equals the stored row.
fn now(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}
