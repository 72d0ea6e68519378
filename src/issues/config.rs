//! Registry configuration.
//!
//! The configuration lists the queues a registry creates when it opens, in
//! addition to the `default` queue which always exists.

use crate::issues::domain::{IssueDomainError, QueueName};
use serde::Deserialize;
use thiserror::Error;

/// Errors returned while loading registry configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid registry configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configured queue name failed validation.
    #[error("invalid queue in configuration: {0}")]
    Queue(#[from] IssueDomainError),
}

/// Settings applied when a registry is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Queues created after the default queue, in order.
    pub extra_queues: Vec<String>,
}

impl RegistryConfig {
    /// Parses configuration from a TOML document.
    ///
    /// ```toml
    /// extra_queues = ["security", "billing"]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Adds a queue to create on open.
    #[must_use]
    pub fn with_queue(mut self, name: impl Into<String>) -> Self {
        self.extra_queues.push(name.into());
        self
    }

    /// Returns every queue the registry starts with, default first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Queue`] when a configured name is blank.
    pub fn startup_queues(&self) -> Result<Vec<QueueName>, ConfigError> {
        let mut queues = vec![QueueName::default_queue()];
        for raw in &self.extra_queues {
            let name = QueueName::new(raw.as_str())?;
            if !queues.contains(&name) {
                queues.push(name);
            }
        }
        Ok(queues)
    }
}
