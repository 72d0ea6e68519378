//! Port contracts for actor notification.

pub mod notifier;

pub use notifier::{IssueNotifier, NotifierError, NotifierResult};
