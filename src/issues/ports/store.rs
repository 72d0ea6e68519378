//! Storage port for tickets, issues, tasks, and queues.

use crate::issues::domain::{Issue, IssueQueue, QueueName, Task, TicketNumber};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue store operations.
pub type IssueStoreResult<T> = Result<T, IssueStoreError>;

/// Registry storage contract.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Ticket numbers start at 1 and advance by exactly one per allocation
/// - Two concurrent allocations never return the same number
/// - Storing a queued issue appends it to its queue in the same step
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Allocates the next ticket number from the shared counter.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::Persistence`] when the counter cannot be
    /// advanced.
    async fn allocate_number(&self) -> IssueStoreResult<TicketNumber>;

    /// Registers a queue, replacing any queue with the same name.
    async fn put_queue(&self, queue: &IssueQueue) -> IssueStoreResult<()>;

    /// Finds a queue by name.
    ///
    /// Returns `None` when no queue has the name.
    async fn find_queue(&self, name: &QueueName) -> IssueStoreResult<Option<IssueQueue>>;

    /// Returns the names of all registered queues in ascending order.
    async fn queue_names(&self) -> IssueStoreResult<Vec<QueueName>>;

    /// Stores a new issue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::DuplicateTicket`] when the number is
    /// already used, or [`IssueStoreError::QueueNotFound`] when the issue is
    /// queued on a queue that does not exist.
    async fn store_issue(&self, issue: &Issue) -> IssueStoreResult<()>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::DuplicateTicket`] when the number is
    /// already used.
    async fn store_task(&self, task: &Task) -> IssueStoreResult<()>;

    /// Finds an issue by ticket number.
    ///
    /// Returns `None` when no issue has the number, including when the number
    /// belongs to a task.
    async fn find_issue(&self, number: TicketNumber) -> IssueStoreResult<Option<Issue>>;

    /// Finds a task by ticket number.
    ///
    /// Returns `None` when no task has the number, including when the number
    /// belongs to an issue.
    async fn find_task(&self, number: TicketNumber) -> IssueStoreResult<Option<Task>>;
}

/// Errors returned by issue store implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueStoreError {
    /// No queue is registered under the name.
    #[error("queue not found: {0}")]
    QueueNotFound(QueueName),

    /// No issue has the ticket number.
    #[error("issue not found: {0}")]
    IssueNotFound(TicketNumber),

    /// No task has the ticket number.
    #[error("task not found: {0}")]
    TaskNotFound(TicketNumber),

    /// The ticket number is already used by an issue or a task.
    #[error("duplicate ticket number: {0}")]
    DuplicateTicket(TicketNumber),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns whether the error reports a missing queue, issue, or task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::QueueNotFound(_) | Self::IssueNotFound(_) | Self::TaskNotFound(_)
        )
    }
}
