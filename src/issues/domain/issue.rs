//! Issue entity and its initial states.

use super::{QueueName, TicketNumber};
use crate::actor::domain::ActorIdentity;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// State an issue is in when it enters the registry.
///
/// Further transitions belong to the conversation workflow, not the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueState {
    /// Waiting in a named triage queue.
    InQueue {
        /// Queue holding the issue.
        queue: QueueName,
    },
    /// Reported without classification; a fixer must look at it first.
    PendingFixerAnalysis,
}

impl IssueState {
    /// Returns the queue for queued issues.
    #[must_use]
    pub const fn queue(&self) -> Option<&QueueName> {
        match self {
            Self::InQueue { queue } => Some(queue),
            Self::PendingFixerAnalysis => None,
        }
    }

    /// Returns the canonical state label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InQueue { .. } => "in_queue",
            Self::PendingFixerAnalysis => "pending_fixer_analysis",
        }
    }
}

/// An issue reported by a finder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    number: TicketNumber,
    reporter: ActorIdentity,
    description: String,
    state: IssueState,
    created_at: DateTime<Utc>,
}

impl Issue {
    /// Creates an issue with an already allocated number.
    #[must_use]
    pub fn new(
        number: TicketNumber,
        reporter: ActorIdentity,
        description: impl Into<String>,
        state: IssueState,
        clock: &impl Clock,
    ) -> Self {
        Self {
            number,
            reporter,
            description: description.into(),
            state,
            created_at: clock.utc(),
        }
    }

    /// Returns the ticket number.
    #[must_use]
    pub const fn number(&self) -> TicketNumber {
        self.number
    }

    /// Returns the identity of the finder who reported the issue.
    #[must_use]
    pub const fn reporter(&self) -> &ActorIdentity {
        &self.reporter
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &IssueState {
        &self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
