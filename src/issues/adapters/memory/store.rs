//! In-memory issue store.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::issues::{
    domain::{Issue, IssueQueue, QueueName, Task, TicketNumber},
    ports::{IssueStore, IssueStoreError, IssueStoreResult},
};

/// Thread-safe in-memory issue store.
///
/// Counter, entities, and queues share one lock, so allocation and queue
/// membership updates are linearized.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueStore {
    state: Arc<RwLock<InMemoryIssueState>>,
}

#[derive(Debug, Default)]
struct InMemoryIssueState {
    last_number: Option<TicketNumber>,
    issues: HashMap<TicketNumber, Issue>,
    tasks: HashMap<TicketNumber, Task>,
    queues: BTreeMap<QueueName, IssueQueue>,
}

impl InMemoryIssueState {
    fn is_used(&self, number: TicketNumber) -> bool {
        self.issues.contains_key(&number) || self.tasks.contains_key(&number)
    }
}

impl InMemoryIssueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> IssueStoreResult<RwLockReadGuard<'_, InMemoryIssueState>> {
        self.state.read().map_err(|err| {
            IssueStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> IssueStoreResult<RwLockWriteGuard<'_, InMemoryIssueState>> {
        self.state.write().map_err(|err| {
            IssueStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl IssueStore for InMemoryIssueStore {
    async fn allocate_number(&self) -> IssueStoreResult<TicketNumber> {
        let mut state = self.write()?;
        let number = state
            .last_number
            .map_or(TicketNumber::FIRST, TicketNumber::next);
        state.last_number = Some(number);
        Ok(number)
    }

    async fn put_queue(&self, queue: &IssueQueue) -> IssueStoreResult<()> {
        let mut state = self.write()?;
        state.queues.insert(queue.name().clone(), queue.clone());
        Ok(())
    }

    async fn find_queue(&self, name: &QueueName) -> IssueStoreResult<Option<IssueQueue>> {
        let state = self.read()?;
        Ok(state.queues.get(name).cloned())
    }

    async fn queue_names(&self) -> IssueStoreResult<Vec<QueueName>> {
        let state = self.read()?;
        Ok(state.queues.keys().cloned().collect())
    }

    async fn store_issue(&self, issue: &Issue) -> IssueStoreResult<()> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        if state.is_used(issue.number()) {
            return Err(IssueStoreError::DuplicateTicket(issue.number()));
        }

        if let Some(queue_name) = issue.state().queue() {
            let queue = state
                .queues
                .get_mut(queue_name)
                .ok_or_else(|| IssueStoreError::QueueNotFound(queue_name.clone()))?;
            queue.push(issue.number());
        }

        state.issues.insert(issue.number(), issue.clone());
        Ok(())
    }

    async fn store_task(&self, task: &Task) -> IssueStoreResult<()> {
        let mut state = self.write()?;
        if state.is_used(task.number()) {
            return Err(IssueStoreError::DuplicateTicket(task.number()));
        }
        state.tasks.insert(task.number(), task.clone());
        Ok(())
    }

    async fn find_issue(&self, number: TicketNumber) -> IssueStoreResult<Option<Issue>> {
        let state = self.read()?;
        Ok(state.issues.get(&number).cloned())
    }

    async fn find_task(&self, number: TicketNumber) -> IssueStoreResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&number).cloned())
    }
}
