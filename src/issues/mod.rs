//! Issue and task registry for fixdesk.
//!
//! This module owns ticket number allocation, issue and task storage, named
//! triage queues, and lookup. Issues and tasks share a single ticket counter,
//! so a number handed out for a task is never handed out again for an issue.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Registry configuration in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
