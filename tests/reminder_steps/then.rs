//! Then steps for reminder workflow BDD scenarios.

use super::world::{ReminderWorld, run_async};
use atelier::workflow::{domain::RunStep, ports::ReminderRunRepository};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn stored_run(
    world: &ReminderWorld,
) -> Result<atelier::workflow::domain::ReminderRun, eyre::Report> {
    let run = world
        .run
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing run in scenario world"))?;
    run_async(world.runs.find_by_id(run.id()))
        .wrap_err("run lookup failed")?
        .ok_or_else(|| eyre::eyre!("run missing from store"))
}

#[then("one assignment email is delivered")]
fn one_assignment_email(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    let sent = world.mailer.sent().wrap_err("mail record unreadable")?;
    eyre::ensure!(sent.len() == 1, "expected 1 email, saw {}", sent.len());
    let mail = sent.first().ok_or_else(|| eyre::eyre!("no mail recorded"))?;
    eyre::ensure!(
        mail.subject.starts_with("New task assignment"),
        "unexpected subject: {}",
        mail.subject
    );
    Ok(())
}

#[then("the run is complete with no scheduled wait")]
fn run_complete_without_wait(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    let run = stored_run(world)?;
    eyre::ensure!(run.step() == RunStep::Completed, "run is not complete");
    eyre::ensure!(run.wake_at().is_none(), "run still has a wake time");
    Ok(())
}

#[then("the run is suspended until the due date")]
fn run_suspended_until_due(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    let run = stored_run(world)?;
    eyre::ensure!(run.step() == RunStep::AwaitDueDate, "run is not suspended");
    eyre::ensure!(
        run.wake_at() == world.due_date,
        "wake time does not match the due date"
    );
    Ok(())
}

#[then("a reminder email is delivered")]
fn reminder_email_delivered(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    let sent = world.mailer.sent().wrap_err("mail record unreadable")?;
    eyre::ensure!(sent.len() == 2, "expected 2 emails, saw {}", sent.len());
    let mail = sent.get(1).ok_or_else(|| eyre::eyre!("no reminder mail"))?;
    eyre::ensure!(
        mail.subject.starts_with("Reminder:"),
        "unexpected subject: {}",
        mail.subject
    );
    Ok(())
}

#[then("no reminder email is delivered")]
fn no_reminder_email(world: &mut ReminderWorld) -> Result<(), eyre::Report> {
    let sent = world.mailer.sent().wrap_err("mail record unreadable")?;
    eyre::ensure!(
        sent.len() == 1,
        "expected only the assignment email, saw {}",
        sent.len()
    );
    Ok(())
}
