//! Registered actor handle and notification forwarding.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use crate::actor::{
    domain::{ActorIdentity, Transcript},
    ports::{IssueNotifier, NotifierError, NotifierResult},
};
use crate::issues::domain::{Issue, TicketNumber};

type Engagements = BTreeMap<TicketNumber, Issue>;

/// One registered finder or fixer.
///
/// The handle observes the actor's connection through a weak reference: the
/// session layer owns the notifier, and once it drops it the handle behaves
/// as if the actor were offline. Notifications to an offline actor are
/// dropped without error.
#[derive(Debug)]
pub struct ActorHandle {
    identity: ActorIdentity,
    notifier: RwLock<Option<Weak<dyn IssueNotifier>>>,
    finding: RwLock<Engagements>,
    fixing: RwLock<Engagements>,
}

impl ActorHandle {
    /// Creates a handle with no notifier attached.
    #[must_use]
    pub fn new(identity: ActorIdentity) -> Self {
        Self {
            identity,
            notifier: RwLock::new(None),
            finding: RwLock::new(Engagements::new()),
            fixing: RwLock::new(Engagements::new()),
        }
    }

    /// Returns the actor identity.
    #[must_use]
    pub const fn identity(&self) -> &ActorIdentity {
        &self.identity
    }

    /// Attaches the live connection, replacing any previous one.
    ///
    /// Only a weak reference is kept: the caller owning the session must
    /// hold the `Arc` for as long as the session lasts. Attaching a
    /// temporary leaves the handle disconnected as soon as it is dropped.
    pub fn attach_notifier<N>(&self, notifier: &Arc<N>)
    where
        N: IssueNotifier + 'static,
    {
        let weak = Arc::downgrade(notifier);
        let weak: Weak<dyn IssueNotifier> = weak;
        *write(&self.notifier) = Some(weak);
        tracing::debug!(actor = %self.identity, "notifier attached");
    }

    /// Forgets the current connection.
    pub fn detach_notifier(&self) {
        *write(&self.notifier) = None;
        tracing::debug!(actor = %self.identity, "notifier detached");
    }

    /// Returns whether a live notifier is attached.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.live_notifier().is_some()
    }

    /// Returns how to reach the actor, when connected.
    #[must_use]
    pub fn contact_info(&self) -> Option<String> {
        self.live_notifier().map(|notifier| notifier.contact_info())
    }

    /// Begins a transcript between this actor and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::CouldNotTranscribe`] when either actor is not
    /// connected, or whatever the notifier reports when it cannot track the
    /// conversation.
    pub async fn begin_transcript(&self, other: &Self) -> NotifierResult<Transcript> {
        let (Some(mine), Some(theirs)) = (self.live_notifier(), other.live_notifier()) else {
            return Err(NotifierError::CouldNotTranscribe(
                "one of the parties was not logged in".to_owned(),
            ));
        };
        mine.begin_transcript(&*theirs).await
    }

    /// Sends a text message when the actor is connected.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError::CouldNotNotify`] when the notifier is attached
    /// but cannot reach the actor.
    pub async fn send_text(&self, message: &str) -> NotifierResult<()> {
        let Some(notifier) = self.live_notifier() else {
            self.dropped("text");
            return Ok(());
        };
        notifier.notify_text(message).await
    }

    /// Tells this actor a fixer is ready to deal with an issue.
    pub fn notify_fixer_ready(&self, fixer: &ActorIdentity, issue: &Issue) {
        let Some(notifier) = self.live_notifier() else {
            self.dropped("fixer_ready");
            return;
        };
        notifier.notify_fixer_ready(fixer, issue);
    }

    /// Tells this actor a finder is ready to talk about an issue.
    pub fn notify_finder_ready(&self, finder: &ActorIdentity, issue: &Issue) {
        let Some(notifier) = self.live_notifier() else {
            self.dropped("finder_ready");
            return;
        };
        notifier.notify_finder_ready(finder, issue);
    }

    /// Tells this actor the finder it was talking to has moved on.
    pub fn notify_finder_gone(&self, finder: &ActorIdentity, issue: &Issue) {
        let Some(notifier) = self.live_notifier() else {
            self.dropped("finder_gone");
            return;
        };
        notifier.notify_finder_gone(finder, issue);
    }

    /// Tells this actor the fixer it was talking to has moved on.
    pub fn notify_fixer_gone(&self, fixer: &ActorIdentity, issue: &Issue) {
        let Some(notifier) = self.live_notifier() else {
            self.dropped("fixer_gone");
            return;
        };
        notifier.notify_fixer_gone(fixer, issue);
    }

    /// Records that this actor is discussing `issue` as its finder.
    ///
    /// Returns the previously recorded copy of the issue, if any.
    pub fn begin_finding(&self, issue: Issue) -> Option<Issue> {
        write(&self.finding).insert(issue.number(), issue)
    }

    /// Stops tracking an issue this actor was discussing as finder.
    pub fn finish_finding(&self, number: TicketNumber) -> Option<Issue> {
        write(&self.finding).remove(&number)
    }

    /// Returns the issues this actor is discussing as finder, by number.
    #[must_use]
    pub fn currently_finding(&self) -> Vec<Issue> {
        read(&self.finding).values().cloned().collect()
    }

    /// Records that this actor is discussing `issue` as its fixer.
    ///
    /// Returns the previously recorded copy of the issue, if any.
    pub fn begin_fixing(&self, issue: Issue) -> Option<Issue> {
        write(&self.fixing).insert(issue.number(), issue)
    }

    /// Stops tracking an issue this actor was discussing as fixer.
    pub fn finish_fixing(&self, number: TicketNumber) -> Option<Issue> {
        write(&self.fixing).remove(&number)
    }

    /// Returns the issues this actor is discussing as fixer, by number.
    #[must_use]
    pub fn currently_fixing(&self) -> Vec<Issue> {
        read(&self.fixing).values().cloned().collect()
    }

    // Clones the notifier out so no lock is held while it runs.
    fn live_notifier(&self) -> Option<Arc<dyn IssueNotifier>> {
        read(&self.notifier).as_ref().and_then(Weak::upgrade)
    }

    fn dropped(&self, kind: &'static str) {
        tracing::trace!(actor = %self.identity, kind, "actor offline, notification dropped");
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
