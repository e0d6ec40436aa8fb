//! Generator log trace.
//!
//! A generator's only externally observable effect is the sequence of
//! leveled log records it emits. The trace captures that sequence as an
//! ordered value while also forwarding each record to `tracing`, so the
//! contract can be asserted in tests without capturing a subscriber.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Severity of a trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceLevel {
    /// Informational record.
    Info,
    /// Recoverable condition, processing continues or skips.
    Warning,
    /// Recoverable failure, the current record is skipped.
    Error,
}

impl TraceLevel {
    /// Returns the level name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceLevel::Info => "info",
            TraceLevel::Warning => "warning",
            TraceLevel::Error => "error",
        }
    }
}

/// A single emitted log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Severity of the record.
    pub level: TraceLevel,
    /// Message text.
    pub message: String,
}

/// Ordered sequence of log records emitted by one generator invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits an informational record.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.events.push(TraceEvent {
            level: TraceLevel::Info,
            message,
        });
    }

    /// Emits a warning record.
    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.events.push(TraceEvent {
            level: TraceLevel::Warning,
            message,
        });
    }

    /// Emits an error record.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.events.push(TraceEvent {
            level: TraceLevel::Error,
            message,
        });
    }

    /// Returns the emitted events in order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Returns the message text of every event, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.message.as_str()).collect()
    }

    /// Returns true if any event message contains the needle.
    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|e| e.message.contains(needle))
    }

    /// Counts events at the given level.
    pub fn count_level(&self, level: TraceLevel) -> usize {
        self.events.iter().filter(|e| e.level == level).count()
    }

    /// Number of emitted events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discards all emitted events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trace_level_as_str() {
        assert_eq!(TraceLevel::Info.as_str(), "info");
        assert_eq!(TraceLevel::Warning.as_str(), "warning");
        assert_eq!(TraceLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_trace_preserves_order() {
        let mut trace = Trace::new();
        trace.info("first");
        trace.warning("second");
        trace.error("third");

        assert_eq!(trace.messages(), vec!["first", "second", "third"]);
        assert_eq!(trace.events()[0].level, TraceLevel::Info);
        assert_eq!(trace.events()[1].level, TraceLevel::Warning);
        assert_eq!(trace.events()[2].level, TraceLevel::Error);
    }

    #[test]
    fn test_trace_contains_and_counts() {
        let mut trace = Trace::new();
        trace.info("Processing segment: web-tier");
        trace.warning("Segment web-tier has no deployment, skipping");

        assert!(trace.contains("web-tier"));
        assert!(!trace.contains("db-tier"));
        assert_eq!(trace.count_level(TraceLevel::Info), 1);
        assert_eq!(trace.count_level(TraceLevel::Warning), 1);
        assert_eq!(trace.count_level(TraceLevel::Error), 0);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_trace_clear() {
        let mut trace = Trace::new();
        trace.info("something");
        assert!(!trace.is_empty());

        trace.clear();
        assert!(trace.is_empty());
        assert_eq!(trace.len(), 0);
    }
}
