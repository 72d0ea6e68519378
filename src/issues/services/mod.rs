//! Application services for the issue registry.

mod repository;

pub use repository::{IssueRepository, IssueRepositoryError, IssueRepositoryResult};
