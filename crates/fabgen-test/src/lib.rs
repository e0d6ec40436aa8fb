//! Integration test infrastructure for fabric generators
//!
//! Provides:
//! - Raw query-result payload fixtures in the shape the platform delivers
//! - Trace verification helpers
//! - End-to-end generator scenarios under `tests/`

pub mod fixtures;
mod verification;

pub use fixtures::*;
pub use verification::*;
