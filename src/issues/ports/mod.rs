//! Port contracts for the issue registry.
//!
//! Ports define infrastructure-agnostic interfaces used by registry services.

pub mod store;

pub use store::{IssueStore, IssueStoreError, IssueStoreResult};

#[cfg(test)]
pub use store::MockIssueStore;
