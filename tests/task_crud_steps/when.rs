//! When steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::when;
use taskql::task::services::{CreateTaskInput, PaginationInput, UpdateTaskInput};

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskCrudWorld, title: String) {
    let result = run_async(world.service.create(CreateTaskInput::new(title)));
    world.record(result);
}

#[when(r#"a task titled "{title}" is created with description "{description}""#)]
fn create_task_with_description(world: &mut TaskCrudWorld, title: String, description: String) {
    let input = CreateTaskInput::new(title).with_description(description);
    let result = run_async(world.service.create(input));
    world.record(result);
}

#[when("the current task description is cleared")]
fn clear_description(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let result = run_async(
        world
            .service
            .update(&id, UpdateTaskInput::new().clear_description()),
    );
    world.record(result);
    Ok(())
}

#[when(r#"task "{id}" is retitled "{title}""#)]
fn retitle_task(world: &mut TaskCrudWorld, id: String, title: String) {
    let result = run_async(
        world
            .service
            .update(&id, UpdateTaskInput::new().with_title(title)),
    );
    world.record(result);
}

#[when("the current task is marked as completed")]
fn complete_current_task(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let result = run_async(world.service.mark_as_completed(&id));
    world.record(result);
    Ok(())
}

#[when(r#"task "{id}" is marked as completed"#)]
fn complete_task_by_id(world: &mut TaskCrudWorld, id: String) {
    let result = run_async(world.service.mark_as_completed(&id));
    world.record(result);
}

#[when("the current task is deleted")]
fn delete_current_task(world: &mut TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    match run_async(world.service.remove(&id)) {
        Ok(removed) => world.last_deletion = Some(removed),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when("a page with limit {limit:i64} and offset {offset:i64} is requested")]
fn request_page(world: &mut TaskCrudWorld, limit: i64, offset: i64) {
    let pagination = PaginationInput::new().with_limit(limit).with_offset(offset);
    match run_async(world.service.find_paginated(pagination)) {
        Ok(page) => world.last_page = Some(page),
        Err(err) => world.last_error = Some(err),
    }
}
