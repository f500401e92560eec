//! Persistence adapters for the task module.
//!
//! Concrete implementations of the [`TaskRepository`] port:
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage for
//!   tests and database-less development runs
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM
//!
//! [`TaskRepository`]: crate::task::ports::TaskRepository

pub mod memory;
pub mod postgres;
