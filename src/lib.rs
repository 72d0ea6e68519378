//! Fixdesk: an issue registry for finders and fixers.
//!
//! This crate tracks issues and tasks reported by connected actors and relays
//! conversation notifications between the people who find problems and the
//! people who fix them.
//!
//! # Architecture
//!
//! Fixdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, sessions)
//!
//! # Modules
//!
//! - [`issues`]: Ticket numbering, queues, and issue/task lookup
//! - [`actor`]: Actor handles and best-effort notification forwarding

pub mod actor;
pub mod issues;
