//! Behaviour tests for the task assignment reminder workflow.

mod reminder_steps;
mod test_helpers;

use reminder_steps::world::{ReminderWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/task_reminder.feature",
    name = "Assignment due today sends no reminder"
)]
#[tokio::test(flavor = "multi_thread")]
async fn due_today_sends_no_reminder(world: ReminderWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_reminder.feature",
    name = "Assignment due later schedules a durable wait"
)]
#[tokio::test(flavor = "multi_thread")]
async fn due_later_schedules_wait(world: ReminderWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_reminder.feature",
    name = "Open task is reminded once the due date passes"
)]
#[tokio::test(flavor = "multi_thread")]
async fn open_task_is_reminded(world: ReminderWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_reminder.feature",
    name = "Completed task is left alone"
)]
#[tokio::test(flavor = "multi_thread")]
async fn done_task_is_left_alone(world: ReminderWorld) {
    let _ = world;
}
