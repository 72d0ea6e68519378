//! Actor identity supplied by the session layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Perspective and identity names identifying one registered actor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorIdentity {
    perspective_name: String,
    identity_name: String,
}

impl ActorIdentity {
    /// Identity name used when the session layer supplies none.
    pub const ANONYMOUS: &'static str = "Nobody";

    /// Creates an identity from both names.
    #[must_use]
    pub fn new(perspective_name: impl Into<String>, identity_name: impl Into<String>) -> Self {
        Self {
            perspective_name: perspective_name.into(),
            identity_name: identity_name.into(),
        }
    }

    /// Creates an identity with the anonymous identity name.
    #[must_use]
    pub fn anonymous(perspective_name: impl Into<String>) -> Self {
        Self::new(perspective_name, Self::ANONYMOUS)
    }

    /// Returns the perspective name.
    #[must_use]
    pub fn perspective_name(&self) -> &str {
        &self.perspective_name
    }

    /// Returns the identity name.
    #[must_use]
    pub fn identity_name(&self) -> &str {
        &self.identity_name
    }
}

impl fmt::Display for ActorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.identity_name, self.perspective_name)
    }
}
