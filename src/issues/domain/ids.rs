//! Ticket numbering shared by issues and tasks.

use super::IssueDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive number identifying an issue or a task.
///
/// Issues and tasks are numbered from the same sequence, so a given number
/// identifies at most one entity across both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(u64);

impl TicketNumber {
    /// The first number handed out by a fresh registry.
    pub const FIRST: Self = Self(1);

    /// Creates a validated ticket number.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidTicketNumber`] when the value is
    /// zero.
    pub const fn new(value: u64) -> Result<Self, IssueDomainError> {
        if value == 0 {
            return Err(IssueDomainError::InvalidTicketNumber(value));
        }
        Ok(Self(value))
    }

    /// Returns the number following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
