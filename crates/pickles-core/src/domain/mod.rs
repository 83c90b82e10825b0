//! Domain types for the configuration core.
//!
//! Nothing in here touches the file system, the logger or the feature switch.
//! The types are plain values that can be built and compared in tests without
//! any setup.

/// Flat bundle of already-parsed command-line values.
pub mod arguments;

/// Output rendering formats and test-result input formats.
pub mod formats;

pub use arguments::Arguments;
pub use formats::{DocumentationFormat, ParseFormatError, TestResultsFormat};
