//! Domain model for task management.
//!
//! The task domain owns identifier parsing, field validation, pagination
//! arithmetic and the mutation rules of the task aggregate, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod pagination;
mod task;

pub use error::TaskDomainError;
pub use fields::{TaskDescription, TaskTitle};
pub use ids::{TaskId, is_valid_uuid};
pub use pagination::{Page, PageRequest};
pub use task::{PersistedTaskData, Task, TaskChanges};
