//! Repository contract tests for `PostgresTaskRepository`.

use std::sync::Arc;

use crate::postgres::helpers::{PostgresTestContext, base_time, postgres_context, task_at};
use chrono::Duration;
use mockable::DefaultClock;
use rstest::rstest;
use taskql::task::{
    domain::{PageRequest, PersistedTaskData, Task, TaskDescription, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskInput, TaskService, UpdateTaskInput},
};

#[rstest]
fn store_and_find_round_trips_every_field(postgres_context: Option<PostgresTestContext>) {
    let Some(context) = postgres_context else {
        return;
    };
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new("Persist me").expect("valid title"),
        description: Some(TaskDescription::new("All the fields").expect("valid description")),
        completed: true,
        created_at: base_time(),
        updated_at: base_time() + Duration::seconds(30),
    });

    context
        .rt
        .block_on(context.repo.store(&task))
        .expect("store should succeed");
    let fetched = context
        .rt
        .block_on(context.repo.find_by_id(task.id()))
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(task));
    context.cleanup();
}

#[rstest]
fn find_by_id_returns_none_for_missing(postgres_context: Option<PostgresTestContext>) {
    let Some(context) = postgres_context else {
        return;
    };

    let fetched = context
        .rt
        .block_on(context.repo.find_by_id(TaskId::new()))
        .expect("lookup should succeed");

    assert_eq!(fetched, None);
    context.cleanup();
}

#[rstest]
fn store_rejects_duplicate_identifier(postgres_context: Option<PostgresTestContext>) {
    let Some(context) = postgres_context else {
        return;
    };
    let task = task_at("once", 0);
    context
        .rt
        .block_on(context.repo.store(&task))
        .expect("first store should succeed");

    let result = context.rt.block_on(context.repo.store(&task));

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(task_id)) if task_id == task.id()
    ));
    context.cleanup();
}

#[rstest]
fn listing_and_paging_are_newest_first(postgres_context: Option<PostgresTestContext>) {
    let Some(context) = postgres_context else {
        return;
    };
    for minute in 0..5 {
        context
            .rt
            .block_on(context.repo.store(&task_at(&format!("t{minute}"), minute)))
            .expect("store should succeed");
    }

    let all = context
        .rt
        .block_on(context.repo.find_all())
        .expect("listing should succeed");
    let (page, total) = context
        .rt
        .block_on(
            context
                .repo
                .find_page(PageRequest::new(Some(2), Some(4)).expect("valid window")),
        )
        .expect("paging should succeed");

    let all_titles: Vec<&str> = all.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(all_titles, ["t4", "t3", "t2", "t1", "t0"]);
    let page_titles: Vec<&str> = page.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(page_titles, ["t0"]);
    assert_eq!(total, 5);
    context.cleanup();
}

#[rstest]
fn update_writes_changes_and_clears_description(postgres_context: Option<PostgresTestContext>) {
    let Some(context) = postgres_context else {
        return;
    };
    let original = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new("Before").expect("valid title"),
        description: Some(TaskDescription::new("Temporary").expect("valid description")),
        completed: false,
        created_at: base_time(),
        updated_at: base_time(),
    });
    context
        .rt
        .block_on(context.repo.store(&original))
        .expect("store should succeed");
    let changed = Task::from_persisted(PersistedTaskData {
        id: original.id(),
        title: TaskTitle::new("After").expect("valid title"),
        description: None,
        completed: true,
        created_at: original.created_at(),
        updated_at: base_time() + Duration::minutes(1),
    });

    context
        .rt
        .block_on(context.repo.update(&changed))
        .expect("update should succeed");
    let fetched = context
        .rt
        .block_on(context.repo.find_by_id(original.id()))
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(changed));
    context.cleanup();
}

#[rstest]
fn update_of_missing_task_is_not_found(postgres_context: Option<PostgresTestContext>) {
    let Some(context) = postgres_context else {
        return;
    };

    let result = context.rt.block_on(context.repo.update(&task_at("ghost", 0)));

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(_))));
    context.cleanup();
}

#[rstest]
fn delete_reports_whether_a_record_was_removed(postgres_context: Option<PostgresTestContext>) {
    let Some(context) = postgres_context else {
        return;
    };
    let task = task_at("short-lived", 0);
    context
        .rt
        .block_on(context.repo.store(&task))
        .expect("store should succeed");

    let removed = context
        .rt
        .block_on(context.repo.delete(task.id()))
        .expect("delete should succeed");
    let removed_again = context
        .rt
        .block_on(context.repo.delete(task.id()))
        .expect("delete should succeed");

    assert!(removed);
    assert!(!removed_again);
    context.cleanup();
}

#[rstest]
fn service_results_match_stored_rows_with_system_clock(
    postgres_context: Option<PostgresTestContext>,
) {
    let Some(context) = postgres_context else {
        return;
    };
    let service = TaskService::new(Arc::new(context.repo.clone()), Arc::new(DefaultClock));

    let created = context
        .rt
        .block_on(service.create(CreateTaskInput::new("Buy milk").with_description("Oat")))
        .expect("task creation should succeed");
    let id = created.id().to_string();
    let fetched = context
        .rt
        .block_on(service.find_by_id(&id))
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));

    let updated = context
        .rt
        .block_on(service.update(&id, UpdateTaskInput::new().with_title("Buy oat milk")))
        .expect("update should succeed");
    let fetched = context
        .rt
        .block_on(service.find_by_id(&id))
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(updated));

    let completed = context
        .rt
        .block_on(service.mark_as_completed(&id))
        .expect("completion should succeed");
    let fetched = context
        .rt
        .block_on(service.find_by_id(&id))
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(completed));

    drop(service);
    context.cleanup();
}
