//! Queue registration and membership.

use super::helpers::{finder_a, open_default, open_with};
use fixdesk::issues::{
    config::RegistryConfig,
    domain::{IssueState, QueueName},
};

#[tokio::test(flavor = "multi_thread")]
async fn queued_issues_keep_arrival_order() -> Result<(), eyre::Report> {
    let repository = open_default().await?;
    repository.create_queue("security").await?;

    let first = repository
        .enqueue_issue(finder_a(), "leaked token", "security")
        .await?;
    repository
        .report_issue_unclassified(finder_a(), "typo on homepage")
        .await?;
    let third = repository
        .enqueue_issue(finder_a(), "open redirect", "security")
        .await?;

    let queue = repository.get_queue("security").await?;
    eyre::ensure!(
        queue.iter().collect::<Vec<_>>() == vec![first.number(), third.number()],
        "security queue should hold the two queued issues in order"
    );
    eyre::ensure!(
        third.state()
            == &IssueState::InQueue {
                queue: QueueName::new("security")?,
            },
        "issue state should reference its queue"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn configured_queue_accepts_issues_immediately() -> Result<(), eyre::Report> {
    let config = RegistryConfig::from_toml_str(r#"extra_queues = ["billing"]"#)?;
    let repository = open_with(&config).await?;

    let issue = repository
        .enqueue_issue(finder_a(), "charged twice", "billing")
        .await?;

    eyre::ensure!(
        issue.state().queue().map(QueueName::as_str) == Some("billing"),
        "issue should be queued on billing"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_queue_is_not_found() -> Result<(), eyre::Report> {
    let repository = open_default().await?;

    let result = repository.get_queue("nonexistent").await;

    eyre::ensure!(
        result.is_err_and(|err| err.is_not_found()),
        "unknown queue should be reported as not found"
    );
    Ok(())
}
