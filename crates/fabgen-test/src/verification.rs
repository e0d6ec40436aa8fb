//! Verification helpers for generator traces
//!
//! Provides assertion helpers over the trace emitted by one generator
//! invocation.

use thiserror::Error;

use fabgen_common::{Trace, TraceLevel};

/// Verification error types
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Expected trace message containing '{needle}' not found")]
    MessageNotFound { needle: String },

    #[error("Unexpected trace message containing '{needle}' found")]
    UnexpectedMessage { needle: String },

    #[error("Expected {expected} {level} events, found {actual}")]
    LevelCountMismatch {
        level: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Expected '{first}' to appear before '{second}' in the trace")]
    OrderViolation { first: String, second: String },
}

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerificationError>;

/// Trace verification helper
pub struct TraceVerifier<'a> {
    trace: &'a Trace,
}

impl<'a> TraceVerifier<'a> {
    /// Create a new trace verifier
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }

    /// Verify that some trace message contains the needle
    pub fn assert_contains(&self, needle: &str) -> VerifyResult<()> {
        if !self.trace.contains(needle) {
            return Err(VerificationError::MessageNotFound {
                needle: needle.to_string(),
            });
        }
        Ok(())
    }

    /// Verify that no trace message contains the needle
    pub fn assert_not_contains(&self, needle: &str) -> VerifyResult<()> {
        if self.trace.contains(needle) {
            return Err(VerificationError::UnexpectedMessage {
                needle: needle.to_string(),
            });
        }
        Ok(())
    }

    /// Verify the number of events at a level
    pub fn assert_level_count(&self, level: TraceLevel, expected: usize) -> VerifyResult<()> {
        let actual = self.trace.count_level(level);
        if actual != expected {
            return Err(VerificationError::LevelCountMismatch {
                level: level.as_str(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Verify that the first matching message precedes the second
    pub fn assert_ordered(&self, first: &str, second: &str) -> VerifyResult<()> {
        let messages = self.trace.messages();
        let first_pos = messages.iter().position(|m| m.contains(first));
        let second_pos = messages.iter().position(|m| m.contains(second));

        match (first_pos, second_pos) {
            (Some(a), Some(b)) if a < b => Ok(()),
            _ => Err(VerificationError::OrderViolation {
                first: first.to_string(),
                second: second.to_string(),
            }),
        }
    }
}
