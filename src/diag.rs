// src/diag.rs
//! Injected diagnostics sink
//!
//! The orchestrator never talks to a process-wide logger directly; callers
//! hand it a sink, so tests can capture warnings deterministically.

/// Receiver for the orchestrator's diagnostics.
///
/// Implementations can be swapped without touching the decryption flow.
pub trait DiagnosticSink {
    /// Routine progress detail (e.g. a completed truncation).
    fn debug(&self, message: &str);

    /// Soft-failure signal that does not abort the operation.
    fn warn(&self, message: &str);
}

/// Default sink — forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
