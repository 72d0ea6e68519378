//! Notifier that hands notifications to a session task over a channel.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::actor::{
    domain::{ActorIdentity, Notification, Transcript},
    ports::{IssueNotifier, NotifierError, NotifierResult},
};
use crate::issues::domain::Issue;

/// Receiving side of a [`ChannelNotifier`], owned by the session task.
pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Notifier backed by an unbounded `tokio` channel.
///
/// Sending never waits, so lifecycle notifications stay fire-and-forget. Once
/// the session drops its [`NotificationReceiver`] the actor counts as
/// unreachable.
#[derive(Clone)]
pub struct ChannelNotifier {
    contact: String,
    sender: mpsc::UnboundedSender<Notification>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl ChannelNotifier {
    /// Transport family shared by all channel notifiers.
    pub const TRANSPORT: &'static str = "channel";

    /// Creates a notifier and the receiver its session should drain.
    #[must_use]
    pub fn new(contact: impl Into<String>) -> (Self, NotificationReceiver) {
        Self::with_clock(contact, Arc::new(DefaultClock))
    }

    /// Creates a notifier that timestamps transcripts with `clock`.
    #[must_use]
    pub fn with_clock(
        contact: impl Into<String>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> (Self, NotificationReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let notifier = Self {
            contact: contact.into(),
            sender,
            clock,
        };
        (notifier, receiver)
    }

    /// Returns whether the session is still draining notifications.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }

    fn dispatch(&self, notification: Notification) {
        if let Err(err) = self.sender.send(notification) {
            tracing::trace!(
                contact = %self.contact,
                kind = err.0.kind(),
                "session closed, notification dropped"
            );
        }
    }
}

#[async_trait]
impl IssueNotifier for ChannelNotifier {
    fn contact_info(&self) -> String {
        format!("session: {}", self.contact)
    }

    fn transport(&self) -> &'static str {
        Self::TRANSPORT
    }

    async fn begin_transcript(&self, other: &dyn IssueNotifier) -> NotifierResult<Transcript> {
        if other.transport() != Self::TRANSPORT {
            return Err(NotifierError::CouldNotTranscribe(format!(
                "cannot track {} from a {} notifier",
                other.transport(),
                Self::TRANSPORT
            )));
        }
        if !self.is_open() {
            return Err(NotifierError::CouldNotTranscribe(format!(
                "session for {} is closed",
                self.contact
            )));
        }
        Ok(Transcript::begin(
            self.contact_info(),
            other.contact_info(),
            &*self.clock,
        ))
    }

    async fn notify_text(&self, message: &str) -> NotifierResult<()> {
        self.sender
            .send(Notification::Text {
                message: message.to_owned(),
            })
            .map_err(|_| {
                NotifierError::CouldNotNotify(format!("session for {} is closed", self.contact))
            })
    }

    fn notify_fixer_ready(&self, fixer: &ActorIdentity, issue: &Issue) {
        self.dispatch(Notification::FixerReady {
            fixer: fixer.clone(),
            issue: Box::new(issue.clone()),
        });
    }

    fn notify_finder_ready(&self, finder: &ActorIdentity, issue: &Issue) {
        self.dispatch(Notification::FinderReady {
            finder: finder.clone(),
            issue: Box::new(issue.clone()),
        });
    }

    fn notify_finder_gone(&self, finder: &ActorIdentity, issue: &Issue) {
        self.dispatch(Notification::FinderGone {
            finder: finder.clone(),
            issue: Box::new(issue.clone()),
        });
    }

    fn notify_fixer_gone(&self, fixer: &ActorIdentity, issue: &Issue) {
        self.dispatch(Notification::FixerGone {
            fixer: fixer.clone(),
            issue: Box::new(issue.clone()),
        });
    }
}
