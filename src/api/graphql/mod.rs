//! GraphQL surface of the task service.

mod schema;
mod types;

pub use schema::{MutationRoot, QueryRoot, TaskSchema, build_schema};
pub use types::{CreateTaskArgs, PaginatedTasks, PaginationArgs, TaskObject, UpdateTaskArgs};
