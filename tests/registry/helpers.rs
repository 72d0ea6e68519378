//! Shared helpers for registry integration tests.

use std::sync::Arc;

use fixdesk::actor::domain::ActorIdentity;
use fixdesk::issues::{
    adapters::memory::InMemoryIssueStore, config::RegistryConfig, services::IssueRepository,
};
use mockable::DefaultClock;

/// Repository type used by the integration tests.
pub type TestRepository = IssueRepository<InMemoryIssueStore, DefaultClock>;

/// Opens a repository with the given configuration.
///
/// # Errors
///
/// Returns an error if the repository rejects the configuration.
pub async fn open_with(config: &RegistryConfig) -> Result<TestRepository, eyre::Report> {
    let repository = IssueRepository::open(
        Arc::new(InMemoryIssueStore::new()),
        Arc::new(DefaultClock),
        config,
    )
    .await?;
    Ok(repository)
}

/// Opens a repository with default configuration.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened.
pub async fn open_default() -> Result<TestRepository, eyre::Report> {
    open_with(&RegistryConfig::default()).await
}

/// Identity of the finder used across tests.
#[must_use]
pub fn finder_a() -> ActorIdentity {
    ActorIdentity::new("finder", "finderA")
}

/// Identity of the fixer used across tests.
#[must_use]
pub fn fixer_b() -> ActorIdentity {
    ActorIdentity::new("fixer", "fixerB")
}
