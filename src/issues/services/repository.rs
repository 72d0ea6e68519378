//! Service layer for ticket allocation, queueing, and lookup.

use crate::actor::domain::ActorIdentity;
use crate::issues::{
    config::{ConfigError, RegistryConfig},
    domain::{Issue, IssueDomainError, IssueQueue, IssueState, QueueName, Task, TicketNumber},
    ports::{IssueStore, IssueStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum IssueRepositoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] IssueStoreError),
    /// Startup configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl IssueRepositoryError {
    /// Returns whether the error reports a missing queue, issue, or task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Store(err) => err.is_not_found(),
            Self::Domain(_) | Self::Config(_) => false,
        }
    }
}

/// Result type for registry service operations.
pub type IssueRepositoryResult<T> = Result<T, IssueRepositoryError>;

/// Central registry of issues, tasks, and triage queues.
///
/// All ticket numbers come from one counter owned by the store, so separate
/// repositories never share numbering.
#[derive(Clone)]
pub struct IssueRepository<S, C>
where
    S: IssueStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> IssueRepository<S, C>
where
    S: IssueStore,
    C: Clock + Send + Sync,
{
    /// Opens a registry over the store and creates its startup queues.
    ///
    /// The `default` queue is always created; `config` may add more.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Config`] when a configured queue name
    /// is invalid, or [`IssueRepositoryError::Store`] when the store rejects
    /// a queue.
    pub async fn open(
        store: Arc<S>,
        clock: Arc<C>,
        config: &RegistryConfig,
    ) -> IssueRepositoryResult<Self> {
        let repository = Self { store, clock };
        for name in config.startup_queues()? {
            repository.register_queue(name).await?;
        }
        Ok(repository)
    }

    /// Allocates the next ticket number.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Store`] when the counter cannot be
    /// advanced.
    pub async fn allocate_id(&self) -> IssueRepositoryResult<TicketNumber> {
        let number = self.store.allocate_number().await?;
        tracing::debug!(%number, "allocated ticket number");
        Ok(number)
    }

    /// Creates an empty queue, replacing any queue with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Domain`] when the name is blank.
    pub async fn create_queue(&self, name: &str) -> IssueRepositoryResult<IssueQueue> {
        let queue_name = QueueName::new(name)?;
        self.register_queue(queue_name).await
    }

    /// Returns the queue registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::QueueNotFound`] (wrapped in
    /// [`IssueRepositoryError::Store`]) when no such queue exists.
    pub async fn get_queue(&self, name: &str) -> IssueRepositoryResult<IssueQueue> {
        let queue_name = QueueName::new(name)?;
        self.resolve_queue(&queue_name).await
    }

    /// Returns the names of all registered queues in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Store`] when the store lookup fails.
    pub async fn queue_names(&self) -> IssueRepositoryResult<Vec<QueueName>> {
        Ok(self.store.queue_names().await?)
    }

    /// Creates an issue in the given initial state.
    ///
    /// Queued issues are appended to their queue. A queued state is checked
    /// against the registered queues before a number is allocated, so naming
    /// a missing queue leaves the counter untouched.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Store`] when allocation or storage
    /// fails, including when a queued state names a missing queue.
    pub async fn create_issue(
        &self,
        reporter: ActorIdentity,
        description: impl Into<String> + Send,
        initial_state: IssueState,
    ) -> IssueRepositoryResult<Issue> {
        if let Some(queue) = initial_state.queue() {
            self.resolve_queue(queue).await?;
        }
        let number = self.allocate_id().await?;
        let issue = Issue::new(number, reporter, description, initial_state, &*self.clock);
        self.store.store_issue(&issue).await?;
        tracing::debug!(
            %number,
            reporter = %issue.reporter(),
            state = issue.state().as_str(),
            "created issue"
        );
        Ok(issue)
    }

    /// Creates an issue and places it in an existing queue.
    ///
    /// The queue is resolved before a number is allocated, so a missing queue
    /// leaves the counter untouched.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::QueueNotFound`] (wrapped in
    /// [`IssueRepositoryError::Store`]) when the queue does not exist.
    pub async fn enqueue_issue(
        &self,
        reporter: ActorIdentity,
        description: impl Into<String> + Send,
        queue_name: &str,
    ) -> IssueRepositoryResult<Issue> {
        let queue = QueueName::new(queue_name)?;
        self.create_issue(reporter, description, IssueState::InQueue { queue })
            .await
    }

    /// Creates an issue in the `default` queue.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Store`] when allocation or storage
    /// fails.
    pub async fn enqueue_default(
        &self,
        reporter: ActorIdentity,
        description: impl Into<String> + Send,
    ) -> IssueRepositoryResult<Issue> {
        self.enqueue_issue(reporter, description, QueueName::DEFAULT)
            .await
    }

    /// Reports an issue with no classification and no queue.
    ///
    /// This is the lowest-friction intake path: nothing but a reporter and a
    /// description is needed.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Store`] only when the store itself
    /// fails.
    pub async fn report_issue_unclassified(
        &self,
        reporter: ActorIdentity,
        description: impl Into<String> + Send,
    ) -> IssueRepositoryResult<Issue> {
        self.create_issue(reporter, description, IssueState::PendingFixerAnalysis)
            .await
    }

    /// Creates a task numbered from the shared ticket counter.
    ///
    /// # Errors
    ///
    /// Returns [`IssueRepositoryError::Store`] when allocation or storage
    /// fails.
    pub async fn create_task(
        &self,
        actor: ActorIdentity,
        description: impl Into<String> + Send,
    ) -> IssueRepositoryResult<Task> {
        let number = self.allocate_id().await?;
        let task = Task::new(number, actor, description, &*self.clock);
        self.store.store_task(&task).await?;
        tracing::debug!(%number, actor = %task.actor(), "created task");
        Ok(task)
    }

    /// Loads an issue by ticket number.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::IssueNotFound`] (wrapped in
    /// [`IssueRepositoryError::Store`]) when no issue has the number.
    pub async fn lookup_issue(&self, number: TicketNumber) -> IssueRepositoryResult<Issue> {
        self.store
            .find_issue(number)
            .await?
            .ok_or_else(|| IssueStoreError::IssueNotFound(number).into())
    }

    /// Loads a task by ticket number.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::TaskNotFound`] (wrapped in
    /// [`IssueRepositoryError::Store`]) when no task has the number.
    pub async fn lookup_task(&self, number: TicketNumber) -> IssueRepositoryResult<Task> {
        self.store
            .find_task(number)
            .await?
            .ok_or_else(|| IssueStoreError::TaskNotFound(number).into())
    }

    async fn resolve_queue(&self, name: &QueueName) -> IssueRepositoryResult<IssueQueue> {
        let found = self.store.find_queue(name).await?;
        found.ok_or_else(|| IssueStoreError::QueueNotFound(name.clone()).into())
    }

    async fn register_queue(&self, name: QueueName) -> IssueRepositoryResult<IssueQueue> {
        let queue = IssueQueue::new(name);
        self.store.put_queue(&queue).await?;
        tracing::debug!(queue = %queue.name(), "registered queue");
        Ok(queue)
    }
}
