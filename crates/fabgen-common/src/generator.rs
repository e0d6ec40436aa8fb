//! Generator trait and invocation contract.
//!
//! The platform invokes a generator with the already-executed result of
//! its query whenever one of the records it subscribes to is created. The
//! invocation is asynchronous by host convention and returns nothing; the
//! generator's output is its log trace.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GeneratorResult;

/// Base trait for event-triggered generators.
///
/// # Example
///
/// ```ignore
/// use fabgen_common::{Generator, GeneratorResult};
///
/// struct MyGenerator { /* ... */ }
///
/// #[async_trait]
/// impl Generator for MyGenerator {
///     fn name(&self) -> &str { "mygen" }
///
///     fn query_kinds(&self) -> &[&str] {
///         &["ServiceNetworkSegment"]
///     }
///
///     async fn generate(&mut self, data: &Value) -> GeneratorResult<()> {
///         // validate, derive, emit trace
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Generator {
    /// Returns the generator name (used for logging).
    fn name(&self) -> &str;

    /// Returns the top-level object kinds the generator's query resolves.
    fn query_kinds(&self) -> &[&str];

    /// Processes one raw query result.
    ///
    /// Errors only on structural payload problems; recoverable conditions
    /// are absorbed as logged early returns.
    async fn generate(&mut self, data: &Value) -> GeneratorResult<()>;
}
