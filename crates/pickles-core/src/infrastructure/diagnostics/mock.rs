//! Recording diagnostics sink for tests.

use std::sync::{Arc, Mutex};

use super::{Diagnostic, DiagnosticSink};

/// A [`DiagnosticSink`] that keeps every reported diagnostic in memory.
///
/// Clones share the same buffer, so a test can keep one handle and pass the
/// other into the configuration store.
#[derive(Clone, Default)]
pub struct RecordingDiagnostics {
    reported: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every diagnostic reported so far, oldest first.
    pub fn reported(&self) -> Vec<Diagnostic> {
        self.reported.lock().expect("lock poisoned").clone()
    }

    /// Returns the number of diagnostics reported so far.
    pub fn count(&self) -> usize {
        self.reported.lock().expect("lock poisoned").len()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        self.reported.lock().expect("lock poisoned").push(diagnostic);
    }
}
