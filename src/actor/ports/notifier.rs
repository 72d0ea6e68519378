//! Notifier capability implemented by live actor connections.

use crate::actor::domain::{ActorIdentity, Transcript};
use crate::issues::domain::Issue;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// A way to tell a connected actor that something happened to an issue.
///
/// Implementations represent one live connection. The four lifecycle
/// notifications are fire-and-forget: they return once the notification has
/// been handed to the transport and never report delivery failures.
#[async_trait]
pub trait IssueNotifier: Send + Sync {
    /// Returns a human-readable description of how to reach this actor.
    fn contact_info(&self) -> String;

    /// Returns the transport family this notifier belongs to.
    ///
    /// Transcripts can only be tracked between notifiers of the same family.
    fn transport(&self) -> &'static str;

    /// Begins a transcript of a conversation with another notifier.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::CouldNotTranscribe`] when the notifiers are
    /// incompatible or there is no way to track communication between them.
    async fn begin_transcript(&self, other: &dyn IssueNotifier) -> NotifierResult<Transcript>;

    /// Sends a text message.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::CouldNotNotify`] when the actor is not
    /// reachable.
    async fn notify_text(&self, message: &str) -> NotifierResult<()>;

    /// A fixer is ready to deal with an issue this actor reported.
    fn notify_fixer_ready(&self, fixer: &ActorIdentity, issue: &Issue);

    /// A finder is ready for this actor to start talking about an issue.
    ///
    /// Sent when the conversation begins so the fixer has a frame of
    /// reference for it.
    fn notify_finder_ready(&self, finder: &ActorIdentity, issue: &Issue);

    /// The finder this actor was talking to has reclassified the issue.
    fn notify_finder_gone(&self, finder: &ActorIdentity, issue: &Issue);

    /// The fixer this actor was talking to has reclassified the issue.
    fn notify_fixer_gone(&self, fixer: &ActorIdentity, issue: &Issue);
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifierError {
    /// The actor could not be reached.
    #[error("could not notify: {0}")]
    CouldNotNotify(String),

    /// No transcript could be started between the two parties.
    #[error("could not transcribe: {0}")]
    CouldNotTranscribe(String),
}
