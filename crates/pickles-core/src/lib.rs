//! # pickles-core
//!
//! Runtime configuration for the Pickles living-documentation generator.
//!
//! A single [`Configuration`] is built at start-up from two sources, direct
//! property assignment and an already-parsed [`Arguments`] bundle, and is then
//! handed to the rendering pipeline as a read-only [`DocumentationSettings`]
//! view.
//!
//! # Architecture overview
//!
//! - **`domain`** – Plain value types with no collaborators: the output and
//!   test-result format enums and the argument bundle.
//!
//! - **`application`** – The configuration store itself.  It owns the policy
//!   decisions: missing test-result files are reported and dropped, malformed
//!   format tokens fail the caller, and the experimental toggle flips the
//!   process-wide feature switch.
//!
//! - **`infrastructure`** – The narrow seams the store talks through: language
//!   registry, file-existence checks, diagnostics and the feature switch.  Each
//!   seam has an in-memory implementation usable from tests.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the most-used types at the crate root so callers can write
// `pickles_core::Configuration` instead of the full module path.
pub use application::configuration::{
    Configuration, ConfigurationError, DocumentationSettings, Services,
};
pub use domain::arguments::Arguments;
pub use domain::formats::{DocumentationFormat, ParseFormatError, TestResultsFormat};
pub use infrastructure::diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
pub use infrastructure::features::{FeatureMode, FeatureSwitch};
pub use infrastructure::file_system::{FileSystem, NativeFileSystem};
pub use infrastructure::language::{DefaultLanguageRegistry, LanguageRegistry};
