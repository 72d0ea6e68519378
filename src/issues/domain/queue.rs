//! Named triage queues.

use super::{IssueDomainError, TicketNumber};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Validated queue name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueName(String);

impl QueueName {
    /// Name of the queue every registry creates on startup.
    pub const DEFAULT: &'static str = "default";

    /// Creates a validated queue name.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyQueueName`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IssueDomainError::EmptyQueueName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name of the default queue.
    #[must_use]
    pub fn default_queue() -> Self {
        Self(Self::DEFAULT.to_owned())
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QueueName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, first-in first-out holding area for issues awaiting triage.
///
/// The queue stores ticket numbers; the issues themselves live in the
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueQueue {
    name: QueueName,
    entries: VecDeque<TicketNumber>,
}

impl IssueQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new(name: QueueName) -> Self {
        Self {
            name,
            entries: VecDeque::new(),
        }
    }

    /// Returns the queue name.
    #[must_use]
    pub const fn name(&self) -> &QueueName {
        &self.name
    }

    /// Appends an issue to the back of the queue.
    pub fn push(&mut self, number: TicketNumber) {
        self.entries.push_back(number);
    }

    /// Removes and returns the issue at the front of the queue.
    pub fn pop(&mut self) -> Option<TicketNumber> {
        self.entries.pop_front()
    }

    /// Returns whether the queue holds the given issue.
    #[must_use]
    pub fn contains(&self, number: TicketNumber) -> bool {
        self.entries.contains(&number)
    }

    /// Iterates queued issue numbers from front to back.
    pub fn iter(&self) -> impl Iterator<Item = TicketNumber> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the number of queued issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
