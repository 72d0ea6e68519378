//! Storage adapters for the issue registry.
//!
//! - [`memory::InMemoryIssueStore`]: thread-safe in-memory storage that
//!   serializes ticket allocation behind a single lock

pub mod memory;
