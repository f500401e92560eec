//! GraphQL object and input types for tasks.

use async_graphql::{ID, InputObject, MaybeUndefined, Object, SimpleObject};
use chrono::{DateTime, Utc};

use crate::task::{
    domain::{Page, Task},
    services::{CreateTaskInput, PaginationInput, UpdateTaskInput},
};

/// GraphQL view of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskObject(Task);

impl From<Task> for TaskObject {
    fn from(task: Task) -> Self {
        Self(task)
    }
}

#[Object(name = "Task")]
impl TaskObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id().to_string())
    }

    async fn title(&self) -> &str {
        self.0.title().as_str()
    }

    async fn description(&self) -> Option<&str> {
        self.0.description().map(|text| text.as_str())
    }

    async fn completed(&self) -> bool {
        self.0.is_completed()
    }

    #[graphql(name = "created_at")]
    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at()
    }

    #[graphql(name = "updated_at")]
    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at()
    }
}

/// One page of tasks with its window and continuation flag.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct PaginatedTasks {
    /// Tasks in this page, newest first.
    pub tasks: Vec<TaskObject>,
    /// Number of tasks across all pages.
    pub total: i32,
    /// Page size used.
    pub limit: i32,
    /// Number of tasks skipped.
    pub offset: i32,
    /// Whether `offset + limit < total`.
    pub has_next_page: bool,
}

/// GraphQL `Int` is 32-bit; larger counts saturate.
fn to_graphql_int(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl From<Page<Task>> for PaginatedTasks {
    fn from(page: Page<Task>) -> Self {
        let total = to_graphql_int(page.total());
        let limit = to_graphql_int(page.limit());
        let offset = to_graphql_int(page.offset());
        let has_next_page = page.has_next_page();
        Self {
            tasks: page.into_items().into_iter().map(TaskObject::from).collect(),
            total,
            limit,
            offset,
            has_next_page,
        }
    }
}

/// Window arguments for `paginatedTasks`.
#[derive(Debug, Clone, Copy, Default, InputObject)]
#[graphql(name = "PaginationInput")]
pub struct PaginationArgs {
    /// Page size, 10 when omitted.
    pub limit: Option<i32>,
    /// Tasks to skip, 0 when omitted.
    pub offset: Option<i32>,
}

impl From<PaginationArgs> for PaginationInput {
    fn from(args: PaginationArgs) -> Self {
        let mut input = Self::new();
        if let Some(limit) = args.limit {
            input = input.with_limit(i64::from(limit));
        }
        if let Some(offset) = args.offset {
            input = input.with_offset(i64::from(offset));
        }
        input
    }
}

/// Arguments for `createTask`.
#[derive(Debug, Clone, InputObject)]
#[graphql(name = "CreateTaskInput")]
pub struct CreateTaskArgs {
    /// Task title, 1 to 255 characters.
    pub title: String,
    /// Optional description, at most 1000 characters.
    pub description: Option<String>,
}

impl From<CreateTaskArgs> for CreateTaskInput {
    fn from(args: CreateTaskArgs) -> Self {
        let input = Self::new(args.title);
        match args.description {
            Some(description) => input.with_description(description),
            None => input,
        }
    }
}

/// Arguments for `updateTask`. Omitted fields are left unchanged; an
/// explicit `null` description clears it.
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "UpdateTaskInput")]
pub struct UpdateTaskArgs {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description, or `null` to clear.
    pub description: MaybeUndefined<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl From<UpdateTaskArgs> for UpdateTaskInput {
    fn from(args: UpdateTaskArgs) -> Self {
        let mut input = Self::new();
        if let Some(title) = args.title {
            input = input.with_title(title);
        }
        input = match args.description {
            MaybeUndefined::Undefined => input,
            MaybeUndefined::Null => input.clear_description(),
            MaybeUndefined::Value(description) => input.with_description(description),
        };
        if let Some(completed) = args.completed {
            input = input.with_completed(completed);
        }
        input
    }
}
