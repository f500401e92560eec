//! Shared test helpers for `PostgreSQL` integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use rstest::fixture;
use taskql::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{PersistedTaskData, Task, TaskId, TaskTitle},
};
use tokio::runtime::Runtime;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable naming the test server.
pub const DATABASE_URL_VAR: &str = "TASKQL_TEST_DATABASE_URL";

/// SQL creating the task table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_tasks/up.sql");

/// Pins every pooled connection to the test schema.
#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Repository bound to a throwaway schema, dropped by [`Self::cleanup`].
pub struct PostgresTestContext {
    pub repo: PostgresTaskRepository,
    pub rt: Runtime,
    url: String,
    schema: String,
}

impl PostgresTestContext {
    fn create(url: String) -> Result<Self, BoxError> {
        let schema = format!("taskql_test_{}", uuid::Uuid::new_v4().simple());
        let mut connection = PgConnection::establish(&url)?;
        connection.batch_execute(&format!(
            "CREATE SCHEMA {schema}; SET search_path TO {schema}; {CREATE_TASKS_SQL}"
        ))?;

        let pool = Pool::builder()
            .max_size(2)
            .connection_customizer(Box::new(SearchPath(schema.clone())))
            .build(ConnectionManager::<PgConnection>::new(url.clone()))?;
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        Ok(Self {
            repo: PostgresTaskRepository::new(pool),
            rt,
            url,
            schema,
        })
    }

    /// Drops the test schema.
    pub fn cleanup(self) {
        drop(self.repo);
        let mut connection =
            PgConnection::establish(&self.url).expect("connect for schema cleanup");
        connection
            .batch_execute(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .expect("drop test schema");
    }
}

/// Provides a prepared context, or `None` when no test server is configured.
#[fixture]
pub fn postgres_context() -> Option<PostgresTestContext> {
    let url = std::env::var(DATABASE_URL_VAR).ok()?;
    Some(PostgresTestContext::create(url).expect("test schema setup"))
}

/// Base instant for deterministic task timestamps. Whole microseconds
/// survive the `timestamptz` round trip.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0)
        .single()
        .expect("valid base time")
}

/// Builds a task created `minutes` after [`base_time`].
pub fn task_at(title: &str, minutes: i64) -> Task {
    let created_at = base_time() + Duration::minutes(minutes);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new(title).expect("valid title"),
        description: None,
        completed: false,
        created_at,
        updated_at: created_at,
    })
}
