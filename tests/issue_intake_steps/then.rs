//! Then steps for issue intake BDD scenarios.

use super::world::{IntakeWorld, run_async};
use fixdesk::issues::domain::{Issue, TicketNumber};
use rstest_bdd_macros::then;

fn last_issue(world: &IntakeWorld) -> Result<&Issue, eyre::Report> {
    world
        .last_issue_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing intake result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected intake failure: {err}"))
}

#[then("the last issue has ticket number {number:u64}")]
fn last_issue_number(world: &IntakeWorld, number: u64) -> Result<(), eyre::Report> {
    let issue = last_issue(world)?;
    eyre::ensure!(
        issue.number().value() == number,
        "expected issue #{number}, found {}",
        issue.number()
    );
    Ok(())
}

#[then("the last task has ticket number {number:u64}")]
fn last_task_number(world: &IntakeWorld, number: u64) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    eyre::ensure!(
        task.number().value() == number,
        "expected task #{number}, found {}",
        task.number()
    );
    Ok(())
}

#[then(r#"queue "{name}" holds ticket {number:u64}"#)]
fn queue_holds_ticket(world: &IntakeWorld, name: String, number: u64) -> Result<(), eyre::Report> {
    let queue = run_async(world.repository()?.get_queue(&name))?;
    let expected = TicketNumber::new(number)?;
    eyre::ensure!(
        queue.contains(expected),
        "queue {name} does not hold {expected}"
    );
    Ok(())
}

#[then(r#"queue "{name}" is empty"#)]
fn queue_is_empty(world: &IntakeWorld, name: String) -> Result<(), eyre::Report> {
    let queue = run_async(world.repository()?.get_queue(&name))?;
    eyre::ensure!(queue.is_empty(), "queue {name} holds {} issues", queue.len());
    Ok(())
}

#[then(r#"issue {number:u64} has description "{description}""#)]
fn issue_has_description(
    world: &IntakeWorld,
    number: u64,
    description: String,
) -> Result<(), eyre::Report> {
    let issue = run_async(
        world
            .repository()?
            .lookup_issue(TicketNumber::new(number)?),
    )?;
    eyre::ensure!(
        issue.description() == description,
        "unexpected description {:?}",
        issue.description()
    );
    Ok(())
}

#[then("looking up issue {number:u64} reports not found")]
fn issue_lookup_not_found(world: &IntakeWorld, number: u64) -> Result<(), eyre::Report> {
    let result = run_async(
        world
            .repository()?
            .lookup_issue(TicketNumber::new(number)?),
    );
    eyre::ensure!(
        result.is_err_and(|err| err.is_not_found()),
        "expected issue {number} to be missing"
    );
    Ok(())
}

#[then("the last intake failed with not found")]
fn last_intake_not_found(world: &IntakeWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_issue_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing intake result in scenario world"))?;
    eyre::ensure!(
        matches!(result, Err(err) if err.is_not_found()),
        "expected not-found failure, got {result:?}"
    );
    Ok(())
}
