//! HTTP and GraphQL transport for task operations.
//!
//! - [`graphql`]: schema, resolvers and GraphQL types
//! - [`routes`]: axum router serving the schema
//! - [`error`]: structured error payloads

pub mod error;
pub mod graphql;
pub mod routes;
