//! Given steps for reminder workflow BDD scenarios.

use super::world::{ReminderWorld, run_async};
use crate::test_helpers::timestamp;
use chrono::Duration;
use rstest_bdd_macros::given;

#[given("a task assigned to a team member due today")]
fn task_due_today(world: &mut ReminderWorld) {
    world.assign_task(timestamp(2026, 8, 6, 17));
}

#[given("a task assigned to a team member due in {days:u32} days")]
fn task_due_in_days(world: &mut ReminderWorld, days: u32) {
    let due = timestamp(2026, 8, 6, 17) + Duration::days(i64::from(days));
    world.assign_task(due);
}

#[given("the reminder scheduler polls")]
fn scheduler_has_polled(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    run_async(world.scheduler.poll_once())
        .map(|_| ())
        .map_err(|err| eyre::eyre!("initial poll failed: {err}"))
}
