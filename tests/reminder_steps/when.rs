//! When steps for reminder workflow BDD scenarios.

use super::world::{ReminderWorld, run_async};
use atelier::project::domain::{TaskPatch, TaskStatus};
use chrono::Duration;
use rstest_bdd_macros::when;

#[when("the reminder scheduler polls")]
fn scheduler_polls(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    run_async(world.scheduler.poll_once())
        .map(|_| ())
        .map_err(|err| eyre::eyre!("poll failed: {err}"))
}

#[when("the clock passes the due date and the scheduler polls again")]
fn clock_passes_due_date(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    let due = world
        .due_date
        .ok_or_else(|| eyre::eyre!("missing due date in scenario world"))?;
    world.clock.advance_to(due + Duration::hours(1));
    run_async(world.scheduler.poll_once())
        .map(|_| ())
        .map_err(|err| eyre::eyre!("wake poll failed: {err}"))
}

#[when("the task is marked done")]
fn task_marked_done(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    let task = world
        .task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    run_async(async {
        use atelier::project::ports::TaskRepository;
        let mut stored = world
            .tasks
            .find_by_id(task.id())
            .await
            .map_err(|err| eyre::eyre!("task lookup failed: {err}"))?
            .ok_or_else(|| eyre::eyre!("task missing from store"))?;
        stored
            .apply_patch(
                TaskPatch {
                    status: Some(TaskStatus::Done),
                    ..TaskPatch::default()
                },
                &world.clock,
            )
            .map_err(|err| eyre::eyre!("patch failed: {err}"))?;
        world
            .tasks
            .update(&stored)
            .await
            .map_err(|err| eyre::eyre!("task update failed: {err}"))
    })
}
