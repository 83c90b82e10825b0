//! Turns user input into a configured [`Configuration`].
//!
//! Input arrives from up to three places, merged field by field with this
//! precedence:
//!
//! ```text
//! command-line flag  >  environment variable  >  settings file  >  built-in default
//! ```
//!
//! clap already folds environment variables into the flag values, so this
//! module only has to layer the command line over the settings file
//! ([`Invocation::or`]) and then hand the result to the store
//! ([`configure`]).
//!
//! Structural settings (folders, output format, version, toggles, result
//! files) go through the store's setters.  The remaining values go through
//! [`Configuration::apply_arguments`] exactly once.

use std::path::PathBuf;

use pickles_core::{
    Arguments, Configuration, ConfigurationError, DocumentationFormat, DocumentationSettings,
    LanguageRegistry,
};
use tracing::{info, warn};

/// Everything the user asked for, from one source or several merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub feature_directory: Option<PathBuf>,
    pub output_directory: Option<PathBuf>,
    pub documentation_format: Option<DocumentationFormat>,
    pub system_under_test_version: Option<String>,
    /// Candidate result files; missing ones are dropped by the store.
    pub test_results_files: Vec<PathBuf>,
    /// `None` leaves the feature switch untouched.
    pub experimental_features: Option<bool>,
    /// `None` keeps comments enabled.
    pub comments: Option<bool>,
    pub arguments: Arguments,
}

impl Invocation {
    /// Fills every field `self` leaves open from `fallback`.
    ///
    /// Result files are taken as a whole: a non-empty list in `self` replaces
    /// the fallback list rather than extending it.
    pub fn or(self, fallback: Invocation) -> Invocation {
        Invocation {
            feature_directory: self.feature_directory.or(fallback.feature_directory),
            output_directory: self.output_directory.or(fallback.output_directory),
            documentation_format: self.documentation_format.or(fallback.documentation_format),
            system_under_test_version: self
                .system_under_test_version
                .or(fallback.system_under_test_version),
            test_results_files: if self.test_results_files.is_empty() {
                fallback.test_results_files
            } else {
                self.test_results_files
            },
            experimental_features: self.experimental_features.or(fallback.experimental_features),
            comments: self.comments.or(fallback.comments),
            arguments: self.arguments.or(fallback.arguments),
        }
    }
}

/// Applies `invocation` to `config`.
///
/// # Errors
///
/// Propagates [`ConfigurationError`] from the argument overlay.  Structural
/// settings are applied before the overlay and stay applied on failure.
pub fn configure(
    invocation: &Invocation,
    config: &mut Configuration,
) -> Result<(), ConfigurationError> {
    if let Some(dir) = &invocation.feature_directory {
        config.set_feature_folder(dir);
    }
    if let Some(dir) = &invocation.output_directory {
        config.set_output_folder(dir);
    }
    if let Some(format) = invocation.documentation_format {
        config.set_documentation_format(format);
    }
    if let Some(version) = &invocation.system_under_test_version {
        config.set_system_under_test_version(version.as_str());
    }
    match invocation.experimental_features {
        Some(true) => config.enable_experimental_features(),
        Some(false) => config.disable_experimental_features(),
        None => {}
    }
    match invocation.comments {
        Some(false) => config.disable_comments(),
        Some(true) | None => config.enable_comments(),
    }

    config.add_test_results_files(Some(&invocation.test_results_files));
    if !invocation.test_results_files.is_empty() && !config.has_test_results() {
        warn!(
            "none of the {} linked test result file(s) exist; results will not be shown",
            invocation.test_results_files.len()
        );
    }

    config.apply_arguments(&invocation.arguments)
}

/// Builds a configuration for `invocation` with the production collaborators
/// and logs what it ended up with.
///
/// # Errors
///
/// See [`configure`].
pub fn build_configuration(
    invocation: &Invocation,
    registry: &dyn LanguageRegistry,
) -> Result<Configuration, ConfigurationError> {
    let mut config = Configuration::new(registry);
    configure(invocation, &mut config)?;
    check_language(&config, registry);

    info!(
        language = config.language(),
        format = %config.documentation_format(),
        test_results = config.test_results_files().len(),
        "configuration ready"
    );
    Ok(config)
}

/// Warns when the configured language has no keyword table.
///
/// The store accepts any language code; this is only a hint for the user.
pub fn check_language(config: &dyn DocumentationSettings, registry: &dyn LanguageRegistry) -> bool {
    let supported = registry.is_supported(config.language());
    if !supported {
        warn!(
            language = config.language(),
            "language is not one of the built-in Gherkin languages"
        );
    }
    supported
}

// ── Tests ─────────────────────────────────────────────────────────────────────
