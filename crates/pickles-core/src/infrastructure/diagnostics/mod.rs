//! Diagnostics sink for non-fatal configuration problems.
//!
//! Soft failures, such as a test-result file that does not exist, never reach
//! the caller as an error value.  They are reported here instead and the
//! offending input is dropped.  The production sink forwards to `tracing`;
//! [`mock::RecordingDiagnostics`] keeps them in memory for assertions.

use std::fmt;

use tracing::error;

pub mod mock;

/// A non-fatal problem found while configuring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A test-result file was not found and has been left out.
    TestResultsFileNotFound {
        /// Full name of the missing file.
        path: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TestResultsFileNotFound { path } => write!(
                f,
                "A test result file could not be found, it will be skipped: {path}"
            ),
        }
    }
}

/// Receiver of [`Diagnostic`]s.
pub trait DiagnosticSink: Send + Sync {
    /// Records an error-level diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// [`DiagnosticSink`] that emits an error-level `tracing` event per diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::TestResultsFileNotFound { path } => {
                error!(path = %path, "{diagnostic}");
            }
        }
    }
}
