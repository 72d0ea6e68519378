//! Error types for issue domain validation.

use thiserror::Error;

/// Errors returned while constructing issue domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The ticket number is zero.
    #[error("invalid ticket number {0}, expected a positive integer")]
    InvalidTicketNumber(u64),

    /// The queue name is empty after trimming.
    #[error("queue name must not be empty")]
    EmptyQueueName,
}
