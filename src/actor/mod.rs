//! Actors and notification routing for fixdesk.
//!
//! Finders report issues and fixers resolve them. Each registered actor is
//! represented by an [`services::ActorHandle`] which relays conversation
//! lifecycle notifications to the actor's live connection, if there is one.
//! Delivery is best-effort: an offline actor simply misses the notification.
//!
//! - Domain types in [`domain`]
//! - The notifier capability in [`ports`]
//! - Notifier implementations in [`adapters`]
//! - The forwarding handle in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
