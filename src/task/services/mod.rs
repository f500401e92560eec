//! Application services for task orchestration.

mod crud;
mod inputs;
mod operations;

pub use crud::{TaskService, TaskServiceError, TaskServiceResult};
pub use inputs::{CreateTaskInput, PaginationInput, UpdateTaskInput};
#[cfg(test)]
pub use operations::MockTaskOperations;
pub use operations::TaskOperations;
