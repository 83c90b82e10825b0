//! Configuration store for a single documentation run.
//!
//! The store is built once, configured sequentially during start-up and then
//! shared read-only with the rendering pipeline:
//!
//! ```text
//! Configuration::new(registry)      -- language = registry default
//!  ├─ set_* / enable_* / disable_*  -- structural settings
//!  ├─ add_test_results_file(s)      -- existence-filtered, never fails
//!  └─ apply_arguments(&args)        -- overlay of non-empty fields
//! &dyn DocumentationSettings        -- read-only view for the pipeline
//! ```
//!
//! # Failure policy
//!
//! Two kinds of bad input are treated differently on purpose:
//!
//! - A test-result file that does not exist is reported to the
//!   [`DiagnosticSink`] and dropped.  The caller sees success.
//! - A test-results format token that names no [`TestResultsFormat`] member
//!   fails [`Configuration::apply_arguments`] with
//!   [`ConfigurationError::InvalidArgument`].
//!
//! The argument overlay is applied field by field in a fixed order and is not
//! transactional: fields before a failing one stay applied.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::arguments::{present, Arguments};
use crate::domain::formats::{DocumentationFormat, ParseFormatError, TestResultsFormat};
use crate::infrastructure::diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
use crate::infrastructure::features::FeatureSwitch;
use crate::infrastructure::file_system::{FileSystem, NativeFileSystem};
use crate::infrastructure::language::{DefaultLanguageRegistry, LanguageRegistry};

/// Error type for configuration operations.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// An argument value could not be interpreted.
    #[error("invalid argument '{argument}': {source}")]
    InvalidArgument {
        /// Name of the offending argument field.
        argument: &'static str,
        #[source]
        source: ParseFormatError,
    },
}

/// Collaborators the store talks through.
///
/// [`Services::default`] wires the production implementations and the
/// process-wide feature switch.
#[derive(Clone)]
pub struct Services {
    pub file_system: Arc<dyn FileSystem>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
    pub features: Arc<FeatureSwitch>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            file_system: Arc::new(NativeFileSystem::new()),
            diagnostics: Arc::new(TracingDiagnostics::new()),
            features: FeatureSwitch::global(),
        }
    }
}

/// Read-only view of a finished configuration, consumed by the renderers.
pub trait DocumentationSettings {
    fn feature_folder(&self) -> Option<&Path>;
    fn output_folder(&self) -> Option<&Path>;
    fn documentation_format(&self) -> DocumentationFormat;

    /// Returns `true` if at least one test-result file was registered.
    fn has_test_results(&self) -> bool;

    /// The primary (first registered) test-result file.
    ///
    /// # Panics
    ///
    /// Panics when no file has been registered; check
    /// [`has_test_results`](Self::has_test_results) first.
    fn test_results_file(&self) -> &Path;

    /// Every registered test-result file, in registration order.
    fn test_results_files(&self) -> &[PathBuf];

    fn system_under_test_name(&self) -> Option<&str>;
    fn system_under_test_version(&self) -> Option<&str>;
    fn exclude_tags(&self) -> Option<&str>;
    fn hide_tags(&self) -> Option<&str>;

    /// `None` until a format has been supplied.
    fn test_results_format(&self) -> Option<TestResultsFormat>;

    fn language(&self) -> &str;
    fn should_include_experimental_features(&self) -> bool;
    fn should_enable_comments(&self) -> bool;
}

/// All settings for one documentation run.
pub struct Configuration {
    feature_folder: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    documentation_format: DocumentationFormat,
    test_results_files: Vec<PathBuf>,
    system_under_test_name: Option<String>,
    system_under_test_version: Option<String>,
    exclude_tags: Option<String>,
    hide_tags: Option<String>,
    test_results_format: Option<TestResultsFormat>,
    language: String,
    include_experimental_features: bool,
    enable_comments: bool,
    services: Services,
}

impl Configuration {
    /// Creates a configuration whose language is `registry`'s default, using
    /// the production collaborators.
    pub fn new(registry: &dyn LanguageRegistry) -> Self {
        Self::with_services(registry, Services::default())
    }

    /// Creates a configuration with explicit collaborators.
    pub fn with_services(registry: &dyn LanguageRegistry, services: Services) -> Self {
        Self {
            feature_folder: None,
            output_folder: None,
            documentation_format: DocumentationFormat::default(),
            test_results_files: Vec::new(),
            system_under_test_name: None,
            system_under_test_version: None,
            exclude_tags: None,
            hide_tags: None,
            test_results_format: None,
            language: registry.default_language(),
            include_experimental_features: false,
            enable_comments: true,
            services,
        }
    }

    // ── Direct property assignment ────────────────────────────────────────────

    pub fn set_feature_folder(&mut self, folder: impl Into<PathBuf>) {
        self.feature_folder = Some(folder.into());
    }

    pub fn set_output_folder(&mut self, folder: impl Into<PathBuf>) {
        self.output_folder = Some(folder.into());
    }

    pub fn set_documentation_format(&mut self, format: DocumentationFormat) {
        self.documentation_format = format;
    }

    pub fn set_system_under_test_name(&mut self, name: impl Into<String>) {
        self.system_under_test_name = Some(name.into());
    }

    pub fn set_system_under_test_version(&mut self, version: impl Into<String>) {
        self.system_under_test_version = Some(version.into());
    }

    // ── Test-result registration ──────────────────────────────────────────────

    /// Registers `file` if it exists; otherwise reports a diagnostic and
    /// drops it.
    pub fn add_test_results_file(&mut self, file: impl Into<PathBuf>) {
        let file = file.into();
        if self.services.file_system.exists(&file) {
            debug!(path = %file.display(), "test result file registered");
            self.test_results_files.push(file);
        } else {
            let path = self.services.file_system.full_name(&file);
            self.services
                .diagnostics
                .report(Diagnostic::TestResultsFileNotFound { path });
        }
    }

    /// Applies [`add_test_results_file`](Self::add_test_results_file) to each
    /// element.  `None` or an empty sequence is a no-op.
    pub fn add_test_results_files<I, P>(&mut self, files: Option<I>)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for file in files.into_iter().flatten() {
            self.add_test_results_file(file);
        }
    }

    // ── Feature toggling ──────────────────────────────────────────────────────

    /// Turns experimental features on, and forces the feature switch to
    /// report every feature enabled.
    pub fn enable_experimental_features(&mut self) {
        self.include_experimental_features = true;
        self.services.features.force_all_enabled();
        info!("experimental features enabled");
    }

    /// Turns experimental features off, and forces the feature switch to
    /// report every feature disabled.
    pub fn disable_experimental_features(&mut self) {
        self.include_experimental_features = false;
        self.services.features.force_all_disabled();
        info!("experimental features disabled");
    }

    pub fn enable_comments(&mut self) {
        self.enable_comments = true;
    }

    pub fn disable_comments(&mut self) {
        self.enable_comments = false;
    }

    // ── Argument overlay ──────────────────────────────────────────────────────

    /// Overlays every non-empty field of `args` onto the current settings.
    ///
    /// Only tag filters, system-under-test name, test-results format and
    /// language can be set this way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidArgument`] if the test-results
    /// format names no [`TestResultsFormat`].  Tag filters and the
    /// system-under-test name are already applied at that point; the language
    /// is not.
    pub fn apply_arguments(&mut self, args: &Arguments) -> Result<(), ConfigurationError> {
        if let Some(tags) = present(&args.exclude_tags) {
            debug!(exclude_tags = tags, "argument applied");
            self.exclude_tags = Some(tags.to_string());
        }
        if let Some(tags) = present(&args.hide_tags) {
            debug!(hide_tags = tags, "argument applied");
            self.hide_tags = Some(tags.to_string());
        }
        if let Some(name) = present(&args.system_under_test_name) {
            debug!(system_under_test_name = name, "argument applied");
            self.system_under_test_name = Some(name.to_string());
        }
        if let Some(token) = present(&args.test_results_format) {
            let format = token
                .parse::<TestResultsFormat>()
                .map_err(|source| ConfigurationError::InvalidArgument {
                    argument: "test_results_format",
                    source,
                })?;
            debug!(%format, "argument applied");
            self.test_results_format = Some(format);
        }
        if let Some(language) = present(&args.language) {
            debug!(language, "argument applied");
            self.language = language.to_string();
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(&DefaultLanguageRegistry::new())
    }
}

impl DocumentationSettings for Configuration {
    fn feature_folder(&self) -> Option<&Path> {
        self.feature_folder.as_deref()
    }

    fn output_folder(&self) -> Option<&Path> {
        self.output_folder.as_deref()
    }

    fn documentation_format(&self) -> DocumentationFormat {
        self.documentation_format
    }

    fn has_test_results(&self) -> bool {
        !self.test_results_files.is_empty()
    }

    fn test_results_file(&self) -> &Path {
        match self.test_results_files.first() {
            Some(file) => file.as_path(),
            None => panic!("no test result file registered; check has_test_results() first"),
        }
    }

    fn test_results_files(&self) -> &[PathBuf] {
        &self.test_results_files
    }

    fn system_under_test_name(&self) -> Option<&str> {
        self.system_under_test_name.as_deref()
    }

    fn system_under_test_version(&self) -> Option<&str> {
        self.system_under_test_version.as_deref()
    }

    fn exclude_tags(&self) -> Option<&str> {
        self.exclude_tags.as_deref()
    }

    fn hide_tags(&self) -> Option<&str> {
        self.hide_tags.as_deref()
    }

    fn test_results_format(&self) -> Option<TestResultsFormat> {
        self.test_results_format
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn should_include_experimental_features(&self) -> bool {
        self.include_experimental_features
    }

    fn should_enable_comments(&self) -> bool {
        self.enable_comments
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("feature_folder", &self.feature_folder)
            .field("output_folder", &self.output_folder)
            .field("documentation_format", &self.documentation_format)
            .field("test_results_files", &self.test_results_files)
            .field("system_under_test_name", &self.system_under_test_name)
            .field("system_under_test_version", &self.system_under_test_version)
            .field("exclude_tags", &self.exclude_tags)
            .field("hide_tags", &self.hide_tags)
            .field("test_results_format", &self.test_results_format)
            .field("language", &self.language)
            .field("include_experimental_features", &self.include_experimental_features)
            .field("enable_comments", &self.enable_comments)
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
