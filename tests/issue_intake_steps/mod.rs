//! Step definitions for issue intake scenarios.

pub mod given;
pub mod then;
