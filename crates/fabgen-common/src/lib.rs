//! Common infrastructure for fabric generator daemons.
//!
//! This crate provides shared functionality for event-triggered generators
//! that react to records created in the network-automation data platform:
//!
//! - [`cleanse`]: Flattening of raw GraphQL query results into plain maps
//! - [`record`]: Defaulted field access over cleaned records
//! - [`trace`]: The generator log trace, its only observable output
//! - [`Generator`]: Base trait implemented by every generator
//! - [`error`]: Error types for generator invocations
//!
//! # Architecture
//!
//! Generators follow this pattern:
//!
//! 1. The platform creates a record and invokes the generator with the
//!    already-executed result of the generator's query
//! 2. The raw result is cleaned into plain attribute maps
//! 3. The generator validates the record, derives values, and emits a
//!    leveled log trace of the configuration it would apply
//!
//! Recoverable conditions (missing record, missing required field) are
//! absorbed as logged early returns; the only hard failure is a payload
//! that does not clean down to a mapping at all.

pub mod cleanse;
pub mod error;
pub mod generator;
pub mod record;
pub mod trace;

// Re-export commonly used items at crate root
pub use cleanse::{clean_data, ensure_object};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::Generator;
pub use record::Record;
pub use trace::{Trace, TraceEvent, TraceLevel};
