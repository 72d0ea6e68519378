//! Unit tests for actor handles and notifier adapters.
