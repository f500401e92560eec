//! Query and mutation roots mapping GraphQL operations onto the task
//! service.

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, Object, Result as GqlResult, Schema,
};

use super::types::{CreateTaskArgs, PaginatedTasks, PaginationArgs, TaskObject, UpdateTaskArgs};
use crate::api::error::{RequestContext, classify};
use crate::task::services::{TaskOperations, TaskServiceError};

/// Executable task schema.
pub type TaskSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with `operations` available to every resolver.
#[must_use]
pub fn build_schema(operations: Arc<dyn TaskOperations>) -> TaskSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(operations)
        .finish()
}

fn operations<'ctx>(ctx: &Context<'ctx>) -> GqlResult<&'ctx Arc<dyn TaskOperations>> {
    ctx.data::<Arc<dyn TaskOperations>>()
}

/// Converts a service failure into a GraphQL error carrying the structured
/// payload as extensions.
fn service_error(ctx: &Context<'_>, error: &TaskServiceError) -> async_graphql::Error {
    let classified = classify(error);
    let request = ctx
        .data_opt::<RequestContext>()
        .cloned()
        .unwrap_or_else(|| RequestContext::new("/graphql", "POST"));
    let payload = classified.payload(&request);
    let details = payload
        .details
        .clone()
        .and_then(|json| async_graphql::Value::from_json(json).ok());

    async_graphql::Error::new(payload.message.clone()).extend_with(|_, extensions| {
        extensions.set("code", classified.code.to_owned());
        extensions.set("statusCode", i32::from(payload.status_code));
        extensions.set("timestamp", payload.timestamp.clone());
        extensions.set("path", payload.path.clone());
        extensions.set("method", payload.method.clone());
        if let Some(value) = details.clone() {
            extensions.set("details", value);
        }
    })
}

/// Query root.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// All tasks, newest first.
    async fn tasks(&self, ctx: &Context<'_>) -> GqlResult<Vec<TaskObject>> {
        let tasks = operations(ctx)?
            .find_all()
            .await
            .map_err(|err| service_error(ctx, &err))?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }

    /// One page of tasks, newest first.
    async fn paginated_tasks(
        &self,
        ctx: &Context<'_>,
        pagination: PaginationArgs,
    ) -> GqlResult<PaginatedTasks> {
        let page = operations(ctx)?
            .find_paginated(pagination.into())
            .await
            .map_err(|err| service_error(ctx, &err))?;
        Ok(PaginatedTasks::from(page))
    }

    /// A task by identifier, or `null` when none exists.
    async fn task(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Option<TaskObject>> {
        let task = operations(ctx)?
            .find_by_id(id.as_str())
            .await
            .map_err(|err| service_error(ctx, &err))?;
        Ok(task.map(TaskObject::from))
    }
}

/// Mutation root.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Creates a task.
    async fn create_task(&self, ctx: &Context<'_>, input: CreateTaskArgs) -> GqlResult<TaskObject> {
        let task = operations(ctx)?
            .create(input.into())
            .await
            .map_err(|err| service_error(ctx, &err))?;
        Ok(task.into())
    }

    /// Applies a partial update to a task.
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateTaskArgs,
    ) -> GqlResult<TaskObject> {
        let task = operations(ctx)?
            .update(id.as_str(), input.into())
            .await
            .map_err(|err| service_error(ctx, &err))?;
        Ok(task.into())
    }

    /// Marks a task as completed.
    async fn complete_task(&self, ctx: &Context<'_>, id: ID) -> GqlResult<TaskObject> {
        let task = operations(ctx)?
            .mark_as_completed(id.as_str())
            .await
            .map_err(|err| service_error(ctx, &err))?;
        Ok(task.into())
    }

    /// Deletes a task; `false` when it did not exist.
    async fn delete_task(&self, ctx: &Context<'_>, id: ID) -> GqlResult<bool> {
        operations(ctx)?
            .remove(id.as_str())
            .await
            .map_err(|err| service_error(ctx, &err))
    }
}
