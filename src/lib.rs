//! taskql: task tracking service exposed over GraphQL.
//!
//! This crate provides the task domain, its persistence adapters and the
//! HTTP/GraphQL transport that serves it.
//!
//! # Architecture
//!
//! taskql follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task model, repository port, adapters and service
//! - [`api`]: GraphQL schema and HTTP routes
//! - [`config`]: Environment-driven application configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
