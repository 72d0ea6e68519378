//! Domain model for the issue registry.
//!
//! Issues, tasks, and queues are plain values. The repository owns them; the
//! domain only validates the scalar types they are built from.

mod error;
mod ids;
mod issue;
mod queue;
mod task;

pub use error::IssueDomainError;
pub use ids::TicketNumber;
pub use issue::{Issue, IssueState};
pub use queue::{IssueQueue, QueueName};
pub use task::Task;
