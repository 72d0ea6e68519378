//! Task entity.

use super::TicketNumber;
use crate::actor::domain::ActorIdentity;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work raised by an actor, numbered alongside issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    number: TicketNumber,
    actor: ActorIdentity,
    description: String,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with an already allocated number.
    #[must_use]
    pub fn new(
        number: TicketNumber,
        actor: ActorIdentity,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            number,
            actor,
            description: description.into(),
            created_at: clock.utc(),
        }
    }

    /// Returns the ticket number.
    #[must_use]
    pub const fn number(&self) -> TicketNumber {
        self.number
    }

    /// Returns the identity of the actor who raised the task.
    #[must_use]
    pub const fn actor(&self) -> &ActorIdentity {
        &self.actor
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
