//! Diagnostic sink for informational and error messages.
//!
//! Components that report to the operator take a `&dyn Diagnostics` instead
//! of logging through a global, so embedders decide where messages go.
//! [`TracingDiagnostics`] is the production sink and forwards to the
//! `tracing` macros; [`MemoryDiagnostics`] records messages in order for
//! assertions. Diagnostics are a separate channel from table output: the
//! grid goes to stdout, messages go wherever the sink points.

use std::sync::Mutex;

/// Severity of a recorded diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational: loaded config, echoed parameters
    Info,
    /// Failure: parse errors, validation rejections
    Error,
}

/// Sink for diagnostic messages.
pub trait Diagnostics {
    /// Report an informational message.
    fn info(&self, message: &str);

    /// Report an error message.
    fn error(&self, message: &str);
}

/// Diagnostics sink forwarding to the `tracing` macros.
///
/// The process-wide subscriber (writer, level, format) is wired by the
/// embedding binary, not here.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Diagnostics sink that records every message in emission order.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl MemoryDiagnostics {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in emission order.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.lock().clone()
    }

    /// Only the informational messages, in order.
    pub fn infos(&self) -> Vec<String> {
        self.of_severity(Severity::Info)
    }

    /// Only the error messages, in order.
    pub fn errors(&self) -> Vec<String> {
        self.of_severity(Severity::Error)
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn of_severity(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Severity, String)>> {
        // A push cannot leave the Vec inconsistent, so a poisoned lock is
        // still readable.
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn info(&self, message: &str) {
        self.lock().push((Severity::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lock().push((Severity::Error, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let diag = MemoryDiagnostics::new();
        diag.info("first");
        diag.error("second");
        diag.info("third");

        let messages = diag.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], (Severity::Info, "first".to_string()));
        assert_eq!(messages[1], (Severity::Error, "second".to_string()));
        assert_eq!(messages[2], (Severity::Info, "third".to_string()));
    }

    #[test]
    fn test_memory_sink_severity_filters() {
        let diag = MemoryDiagnostics::new();
        diag.info("a");
        diag.error("b");
        diag.error("c");

        assert_eq!(diag.infos(), vec!["a"]);
        assert_eq!(diag.errors(), vec!["b", "c"]);
    }

    #[test]
    fn test_memory_sink_starts_empty() {
        let diag = MemoryDiagnostics::new();
        assert!(diag.is_empty());
        assert!(diag.errors().is_empty());
        diag.error("boom");
        assert!(!diag.is_empty());
    }

    #[test]
    fn test_memory_sink_through_trait_object() {
        let diag = MemoryDiagnostics::new();
        let sink: &dyn Diagnostics = &diag;
        sink.info("via trait");
        assert_eq!(diag.infos(), vec!["via trait"]);
    }

    #[test]
    fn test_tracing_sink_is_callable_without_subscriber() {
        // Without a subscriber installed the events are simply dropped.
        let diag = TracingDiagnostics;
        diag.info("ignored");
        diag.error("ignored");
    }
}
