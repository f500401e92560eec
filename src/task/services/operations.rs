//! Object-safe view of the task service used by transport adapters.

use super::{CreateTaskInput, PaginationInput, TaskService, TaskServiceResult, UpdateTaskInput};
use crate::task::{
    domain::{Page, Task},
    ports::TaskRepository,
};
use async_trait::async_trait;
use mockable::Clock;

/// Task operations exposed to transports such as the GraphQL API.
///
/// Semantics match the inherent methods of [`TaskService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskOperations: Send + Sync {
    /// See [`TaskService::find_all`].
    async fn find_all(&self) -> TaskServiceResult<Vec<Task>>;

    /// See [`TaskService::find_paginated`].
    async fn find_paginated(&self, pagination: PaginationInput) -> TaskServiceResult<Page<Task>>;

    /// See [`TaskService::find_by_id`].
    async fn find_by_id(&self, id: &str) -> TaskServiceResult<Option<Task>>;

    /// See [`TaskService::create`].
    async fn create(&self, input: CreateTaskInput) -> TaskServiceResult<Task>;

    /// See [`TaskService::update`].
    async fn update(&self, id: &str, input: UpdateTaskInput) -> TaskServiceResult<Task>;

    /// See [`TaskService::mark_as_completed`].
    async fn mark_as_completed(&self, id: &str) -> TaskServiceResult<Task>;

    /// See [`TaskService::remove`].
    async fn remove(&self, id: &str) -> TaskServiceResult<bool>;
}

#[async_trait]
impl<R, C> TaskOperations for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn find_all(&self) -> TaskServiceResult<Vec<Task>> {
        Self::find_all(self).await
    }

    async fn find_paginated(&self, pagination: PaginationInput) -> TaskServiceResult<Page<Task>> {
        Self::find_paginated(self, pagination).await
    }

    async fn find_by_id(&self, id: &str) -> TaskServiceResult<Option<Task>> {
        Self::find_by_id(self, id).await
    }

    async fn create(&self, input: CreateTaskInput) -> TaskServiceResult<Task> {
        Self::create(self, input).await
    }

    async fn update(&self, id: &str, input: UpdateTaskInput) -> TaskServiceResult<Task> {
        Self::update(self, id, input).await
    }

    async fn mark_as_completed(&self, id: &str) -> TaskServiceResult<Task> {
        Self::mark_as_completed(self, id).await
    }

    async fn remove(&self, id: &str) -> TaskServiceResult<bool> {
        Self::remove(self, id).await
    }
}
