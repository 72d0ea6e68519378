//! Unit tests for the issue registry.
