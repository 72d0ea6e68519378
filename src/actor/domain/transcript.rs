//! Transcript handles for finder/fixer conversations.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptId(Uuid);

impl TranscriptId {
    /// Creates a new random transcript identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TranscriptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TranscriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a conversation being tracked between two notifiers.
///
/// The handle only names the conversation; recording its content is up to the
/// notifier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    id: TranscriptId,
    initiator: String,
    counterpart: String,
    started_at: DateTime<Utc>,
}

impl Transcript {
    /// Starts a transcript between two contacts.
    #[must_use]
    pub fn begin(
        initiator: impl Into<String>,
        counterpart: impl Into<String>,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            id: TranscriptId::new(),
            initiator: initiator.into(),
            counterpart: counterpart.into(),
            started_at: clock.utc(),
        }
    }

    /// Returns the transcript identifier.
    #[must_use]
    pub const fn id(&self) -> TranscriptId {
        self.id
    }

    /// Returns the contact information of the side that began the transcript.
    #[must_use]
    pub fn initiator(&self) -> &str {
        &self.initiator
    }

    /// Returns the contact information of the other side.
    #[must_use]
    pub fn counterpart(&self) -> &str {
        &self.counterpart
    }

    /// Returns when the transcript began.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
