//! Service layer for task creation, lookup, mutation and deletion.

use super::{CreateTaskInput, PaginationInput, UpdateTaskInput};
use crate::task::{
    domain::{Page, Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The caller supplied a malformed identifier or invalid field values.
    #[error(transparent)]
    InvalidInput(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The repository failed unexpectedly.
    #[error(transparent)]
    Internal(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Update and completion read the record and then write it back without a
/// lock, so concurrent writers to the same task resolve as last write wins.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Internal`] when the repository fails.
    pub async fn find_all(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        tracing::debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Returns one page of tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] for negative window values
    /// and [`TaskServiceError::Internal`] when the repository fails.
    pub async fn find_paginated(&self, pagination: PaginationInput) -> TaskServiceResult<Page<Task>> {
        let request = pagination.validate()?;
        let (tasks, total) = self.repository.find_page(request).await?;
        let page = Page::new(tasks, total, request);
        tracing::debug!(
            limit = page.limit(),
            offset = page.offset(),
            total = page.total(),
            has_next_page = page.has_next_page(),
            "listed task page"
        );
        Ok(page)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists for a well-formed identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] when `id` is not a UUID and
    /// [`TaskServiceError::Internal`] when the repository fails.
    pub async fn find_by_id(&self, id: &str) -> TaskServiceResult<Option<Task>> {
        let task_id = TaskId::parse(id)?;
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Creates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] when the title or
    /// description is invalid and [`TaskServiceError::Internal`] when the
    /// repository rejects persistence.
    pub async fn create(&self, input: CreateTaskInput) -> TaskServiceResult<Task> {
        let (title, description) = input.validate()?;
        let task = Task::new(title, description, &*self.clock);
        self.repository.store(&task).await?;
        tracing::info!(task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] when `id` or a supplied
    /// field is invalid, [`TaskServiceError::NotFound`] when the task does
    /// not exist and [`TaskServiceError::Internal`] when the repository
    /// fails.
    pub async fn update(&self, id: &str, input: UpdateTaskInput) -> TaskServiceResult<Task> {
        let task_id = TaskId::parse(id)?;
        let changes = input.validate()?;
        let mut task = self.load_existing(task_id).await?;
        task.apply(changes, &*self.clock);
        self.save(&task).await?;
        tracing::info!(task_id = %task_id, "updated task");
        Ok(task)
    }

    /// Marks a task as completed. Completing a completed task succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] when `id` is not a UUID,
    /// [`TaskServiceError::NotFound`] when the task does not exist and
    /// [`TaskServiceError::Internal`] when the repository fails.
    pub async fn mark_as_completed(&self, id: &str) -> TaskServiceResult<Task> {
        let task_id = TaskId::parse(id)?;
        let mut task = self.load_existing(task_id).await?;
        task.mark_completed(&*self.clock);
        self.save(&task).await?;
        tracing::info!(task_id = %task_id, "completed task");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Returns `Ok(false)` when no task existed; a missing task is not an
    /// error here, unlike [`Self::update`] and [`Self::mark_as_completed`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidInput`] when `id` is not a UUID and
    /// [`TaskServiceError::Internal`] when the repository fails.
    pub async fn remove(&self, id: &str) -> TaskServiceResult<bool> {
        let task_id = TaskId::parse(id)?;
        let removed = self.repository.delete(task_id).await?;
        tracing::info!(task_id = %task_id, removed, "deleted task");
        Ok(removed)
    }

    async fn load_existing(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }

    /// Writes back a loaded task; a concurrent delete between the read and
    /// this write surfaces as [`TaskServiceError::NotFound`].
    async fn save(&self, task: &Task) -> TaskServiceResult<()> {
        self.repository.update(task).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(task_id) => TaskServiceError::NotFound(task_id),
            other => TaskServiceError::Internal(other),
        })
    }
}
