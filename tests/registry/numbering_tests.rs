//! Ticket numbering across issues and tasks.

use super::helpers::{finder_a, fixer_b, open_default};
use fixdesk::issues::domain::{QueueName, TicketNumber};

fn ticket(value: u64) -> Result<TicketNumber, eyre::Report> {
    Ok(TicketNumber::new(value)?)
}

#[tokio::test(flavor = "multi_thread")]
async fn disk_full_walkthrough() -> Result<(), eyre::Report> {
    let repository = open_default().await?;

    let issue = repository.enqueue_default(finder_a(), "disk full").await?;
    eyre::ensure!(issue.number() == ticket(1)?, "first issue should be #1");
    let queue = repository.get_queue(QueueName::DEFAULT).await?;
    eyre::ensure!(
        queue.iter().collect::<Vec<_>>() == vec![issue.number()],
        "default queue should hold issue #1"
    );

    let task = repository
        .create_task(fixer_b(), "investigate disk full")
        .await?;
    eyre::ensure!(task.number() == ticket(2)?, "task should be #2");

    let loaded = repository.lookup_issue(ticket(1)?).await?;
    eyre::ensure!(loaded.description() == "disk full", "description mismatch");

    let task_as_issue = repository.lookup_issue(ticket(2)?).await;
    eyre::ensure!(
        task_as_issue.is_err_and(|err| err.is_not_found()),
        "task number must not resolve as an issue"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn mixed_sequence_numbers_are_contiguous() -> Result<(), eyre::Report> {
    let repository = open_default().await?;
    let mut numbers = Vec::new();

    for round in 0..5_u32 {
        numbers.push(
            repository
                .report_issue_unclassified(finder_a(), format!("report {round}"))
                .await?
                .number()
                .value(),
        );
        numbers.push(
            repository
                .create_task(fixer_b(), format!("task {round}"))
                .await?
                .number()
                .value(),
        );
        numbers.push(repository.allocate_id().await?.value());
    }

    eyre::ensure!(
        numbers == (1..=15).collect::<Vec<u64>>(),
        "numbers should be 1..=15, got {numbers:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_enqueue_leaves_counter_untouched() -> Result<(), eyre::Report> {
    let repository = open_default().await?;

    let missing = repository
        .enqueue_issue(finder_a(), "no such queue", "triage")
        .await;
    eyre::ensure!(
        missing.is_err_and(|err| err.is_not_found()),
        "missing queue should be reported as not found"
    );

    let task = repository.create_task(fixer_b(), "first real ticket").await?;
    eyre::ensure!(task.number() == ticket(1)?, "counter advanced on failure");
    Ok(())
}
