//! Finder/fixer notification relay around registry issues.

use std::sync::Arc;

use super::helpers::{finder_a, fixer_b, open_default};
use fixdesk::actor::{
    adapters::{channel::ChannelNotifier, memory::RecordingNotifier},
    domain::Notification,
    ports::NotifierError,
    services::ActorHandle,
};

#[tokio::test(flavor = "multi_thread")]
async fn ready_and_gone_notifications_reach_connected_parties() -> Result<(), eyre::Report> {
    let repository = open_default().await?;
    let finder = ActorHandle::new(finder_a());
    let fixer = ActorHandle::new(fixer_b());
    let finder_session = Arc::new(RecordingNotifier::new("finderA"));
    let (fixer_notifier, mut fixer_inbox) = ChannelNotifier::new("fixerB");
    let fixer_session = Arc::new(fixer_notifier);
    finder.attach_notifier(&finder_session);
    fixer.attach_notifier(&fixer_session);

    let issue = repository.enqueue_default(finder_a(), "disk full").await?;
    finder.begin_finding(issue.clone());
    fixer.begin_fixing(issue.clone());
    finder.notify_fixer_ready(fixer.identity(), &issue);
    fixer.notify_finder_ready(finder.identity(), &issue);

    fixer.finish_fixing(issue.number());
    finder.notify_fixer_gone(fixer.identity(), &issue);

    let finder_kinds: Vec<_> = finder_session
        .received()
        .iter()
        .map(Notification::kind)
        .collect();
    eyre::ensure!(
        finder_kinds == vec!["fixer_ready", "fixer_gone"],
        "unexpected finder notifications: {finder_kinds:?}"
    );

    let delivered = fixer_inbox
        .try_recv()
        .map_err(|err| eyre::eyre!("fixer inbox empty: {err}"))?;
    eyre::ensure!(
        delivered.issue().map(fixdesk::issues::domain::Issue::number) == Some(issue.number()),
        "fixer notification should concern the queued issue"
    );
    eyre::ensure!(finder.currently_finding().len() == 1, "finder engagement lost");
    eyre::ensure!(fixer.currently_fixing().is_empty(), "fixer still engaged");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn offline_fixer_misses_notifications_without_error() -> Result<(), eyre::Report> {
    let repository = open_default().await?;
    let finder = ActorHandle::new(finder_a());
    let fixer = ActorHandle::new(fixer_b());
    let issue = repository
        .report_issue_unclassified(finder_a(), "flaky test")
        .await?;

    fixer.notify_finder_ready(finder.identity(), &issue);
    fixer.send_text("are you there?").await?;

    let transcript = finder.begin_transcript(&fixer).await;
    eyre::ensure!(
        matches!(transcript, Err(NotifierError::CouldNotTranscribe(_))),
        "transcript with an offline fixer should fail"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn session_logout_disconnects_handle() -> Result<(), eyre::Report> {
    let fixer = ActorHandle::new(fixer_b());
    let (notifier, inbox) = ChannelNotifier::new("fixerB");
    let session = Arc::new(notifier);
    fixer.attach_notifier(&session);
    eyre::ensure!(fixer.is_connected(), "fixer should be connected");

    drop(inbox);
    let unreachable = fixer.send_text("hello").await;
    eyre::ensure!(
        matches!(unreachable, Err(NotifierError::CouldNotNotify(_))),
        "closed session should surface could-not-notify"
    );

    drop(session);
    eyre::ensure!(!fixer.is_connected(), "dropped session should disconnect");
    fixer.send_text("hello again").await?;
    Ok(())
}
