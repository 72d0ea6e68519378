//! Notifications delivered to a connected actor.

use super::ActorIdentity;
use crate::issues::domain::Issue;
use serde::{Deserialize, Serialize};

/// A single notification as seen by the receiving actor.
///
/// `FixerReady` and `FinderReady` tell the receiver the other party is
/// available to discuss the issue now. `FinderGone` and `FixerGone` tell it
/// the other party has stepped away or reclassified the issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// Free-form text.
    Text {
        /// Message body.
        message: String,
    },
    /// A fixer is ready to work on an issue the receiver reported.
    FixerReady {
        /// The fixer.
        fixer: ActorIdentity,
        /// The issue being resolved.
        issue: Box<Issue>,
    },
    /// A finder is ready to talk to the receiver about an issue.
    FinderReady {
        /// The finder.
        finder: ActorIdentity,
        /// The issue under discussion.
        issue: Box<Issue>,
    },
    /// The finder the receiver was talking to has reclassified the issue.
    FinderGone {
        /// The finder.
        finder: ActorIdentity,
        /// The issue that was under discussion.
        issue: Box<Issue>,
    },
    /// The fixer the receiver was talking to has reclassified the issue.
    FixerGone {
        /// The fixer.
        fixer: ActorIdentity,
        /// The issue that was under discussion.
        issue: Box<Issue>,
    },
}

impl Notification {
    /// Returns the canonical notification label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::FixerReady { .. } => "fixer_ready",
            Self::FinderReady { .. } => "finder_ready",
            Self::FinderGone { .. } => "finder_gone",
            Self::FixerGone { .. } => "fixer_gone",
        }
    }

    /// Returns the issue the notification concerns, if any.
    #[must_use]
    pub fn issue(&self) -> Option<&Issue> {
        match self {
            Self::Text { .. } => None,
            Self::FixerReady { issue, .. }
            | Self::FinderReady { issue, .. }
            | Self::FinderGone { issue, .. }
            | Self::FixerGone { issue, .. } => Some(issue),
        }
    }
}
