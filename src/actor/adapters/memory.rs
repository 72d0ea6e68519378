//! In-process notifier that records what it receives.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::actor::{
    domain::{ActorIdentity, Notification, Transcript},
    ports::{IssueNotifier, NotifierError, NotifierResult},
};
use crate::issues::domain::Issue;

/// Thread-safe notifier that stores delivered notifications in memory.
///
/// Useful for embedding fixdesk in a single process and for tests. The
/// notifier can be marked unreachable to simulate a dropped connection.
#[derive(Clone)]
pub struct RecordingNotifier {
    contact: String,
    clock: Arc<dyn Clock + Send + Sync>,
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug)]
struct RecordingState {
    reachable: bool,
    received: Vec<Notification>,
    transcripts: Vec<Transcript>,
}

impl RecordingNotifier {
    /// Transport family shared by all recording notifiers.
    pub const TRANSPORT: &'static str = "in_process";

    /// Creates a reachable notifier with the given contact string.
    #[must_use]
    pub fn new(contact: impl Into<String>) -> Self {
        Self::with_clock(contact, Arc::new(DefaultClock))
    }

    /// Creates a reachable notifier that timestamps transcripts with `clock`.
    #[must_use]
    pub fn with_clock(contact: impl Into<String>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            contact: contact.into(),
            clock,
            state: Arc::new(RwLock::new(RecordingState {
                reachable: true,
                received: Vec::new(),
                transcripts: Vec::new(),
            })),
        }
    }

    /// Marks the actor as reachable or unreachable.
    pub fn set_reachable(&self, reachable: bool) {
        self.write().reachable = reachable;
    }

    /// Returns every notification delivered so far, oldest first.
    #[must_use]
    pub fn received(&self) -> Vec<Notification> {
        self.read().received.clone()
    }

    /// Returns every transcript this notifier has begun.
    #[must_use]
    pub fn transcripts(&self) -> Vec<Transcript> {
        self.read().transcripts.clone()
    }

    fn is_reachable(&self) -> bool {
        self.read().reachable
    }

    fn record(&self, notification: Notification) -> bool {
        let mut state = self.write();
        if !state.reachable {
            return false;
        }
        state.received.push(notification);
        true
    }

    fn read(&self) -> RwLockReadGuard<'_, RecordingState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RecordingState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl IssueNotifier for RecordingNotifier {
    fn contact_info(&self) -> String {
        format!("in-process: {}", self.contact)
    }

    fn transport(&self) -> &'static str {
        Self::TRANSPORT
    }

    async fn begin_transcript(&self, other: &dyn IssueNotifier) -> NotifierResult<Transcript> {
        if other.transport() != Self::TRANSPORT {
            return Err(NotifierError::CouldNotTranscribe(format!(
                "cannot track {} from an {} notifier",
                other.transport(),
                Self::TRANSPORT
            )));
        }
        if !self.is_reachable() {
            return Err(NotifierError::CouldNotTranscribe(format!(
                "{} is not reachable",
                self.contact
            )));
        }

        let transcript = Transcript::begin(self.contact_info(), other.contact_info(), &*self.clock);
        self.write().transcripts.push(transcript.clone());
        Ok(transcript)
    }

    async fn notify_text(&self, message: &str) -> NotifierResult<()> {
        let notification = Notification::Text {
            message: message.to_owned(),
        };
        if self.record(notification) {
            Ok(())
        } else {
            Err(NotifierError::CouldNotNotify(format!(
                "{} is not reachable",
                self.contact
            )))
        }
    }

    fn notify_fixer_ready(&self, fixer: &ActorIdentity, issue: &Issue) {
        self.record(Notification::FixerReady {
            fixer: fixer.clone(),
            issue: Box::new(issue.clone()),
        });
    }

    fn notify_finder_ready(&self, finder: &ActorIdentity, issue: &Issue) {
        self.record(Notification::FinderReady {
            finder: finder.clone(),
            issue: Box::new(issue.clone()),
        });
    }

    fn notify_finder_gone(&self, finder: &ActorIdentity, issue: &Issue) {
        self.record(Notification::FinderGone {
            finder: finder.clone(),
            issue: Box::new(issue.clone()),
        });
    }

    fn notify_fixer_gone(&self, fixer: &ActorIdentity, issue: &Issue) {
        self.record(Notification::FixerGone {
            fixer: fixer.clone(),
            issue: Box::new(issue.clone()),
        });
    }
}
