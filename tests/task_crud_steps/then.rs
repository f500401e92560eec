//! Then steps for task CRUD BDD scenarios.

use super::world::{TaskCrudWorld, run_async};
use rstest_bdd_macros::then;
use taskql::task::{domain::Task, services::TaskServiceError};

fn current_task(world: &TaskCrudWorld) -> Result<&Task, eyre::Report> {
    world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current task"))
}

#[then("the current task is not completed")]
fn current_task_not_completed(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    eyre::ensure!(!task.is_completed(), "expected an incomplete task");
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "expected equal timestamps on a new task"
    );
    Ok(())
}

#[then("the current task is completed")]
fn current_task_completed(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.last_error.is_none(), "unexpected error: {:?}", world.last_error);
    let task = current_task(world)?;
    eyre::ensure!(task.is_completed(), "expected a completed task");
    Ok(())
}

#[then(r#"fetching the current task returns the title "{title}""#)]
fn fetch_returns_title(world: &TaskCrudWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.current_id()?;
    let fetched = run_async(world.service.find_by_id(&id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task {id} should exist"))?;
    eyre::ensure!(
        fetched.title().as_str() == title,
        "expected title {title}, found {}",
        fetched.title()
    );
    Ok(())
}

#[then(r#"the current task title is "{title}""#)]
fn current_task_title(world: &TaskCrudWorld, title: String) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    eyre::ensure!(
        task.title().as_str() == title,
        "expected title {title}, found {}",
        task.title()
    );
    Ok(())
}

#[then("the current task has no description")]
fn current_task_has_no_description(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    eyre::ensure!(
        task.description().is_none(),
        "expected no description, found {:?}",
        task.description()
    );
    Ok(())
}

#[then("the operation fails with an invalid input error")]
fn fails_with_invalid_input(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected an error, operation succeeded"))?;
    if !matches!(error, TaskServiceError::InvalidInput(_)) {
        return Err(eyre::eyre!("expected InvalidInput error, got {error:?}"));
    }
    Ok(())
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected an error, operation succeeded"))?;
    if !matches!(error, TaskServiceError::NotFound(_)) {
        return Err(eyre::eyre!("expected NotFound error, got {error:?}"));
    }
    Ok(())
}

#[then("the store holds {count:usize} tasks")]
fn store_holds(world: &TaskCrudWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.find_all())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then("the last deletion reported false")]
fn last_deletion_false(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_deletion == Some(false),
        "expected the last deletion to report false, got {:?}",
        world.last_deletion
    );
    Ok(())
}

#[then("the page holds {count:usize} tasks out of {total:u64}")]
fn page_holds(world: &TaskCrudWorld, count: usize, total: u64) -> Result<(), eyre::Report> {
    let page = world
        .last_page
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing page in scenario world"))?;
    eyre::ensure!(
        page.items().len() == count,
        "expected {count} tasks in page, found {}",
        page.items().len()
    );
    eyre::ensure!(
        page.total() == total,
        "expected total {total}, found {}",
        page.total()
    );
    Ok(())
}

#[then("the page reports no next page")]
fn page_has_no_next(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let page = world
        .last_page
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing page in scenario world"))?;
    eyre::ensure!(!page.has_next_page(), "expected no next page");
    Ok(())
}
