//! Optional TOML settings file.
//!
//! Teams that run the generator from CI usually keep the same handful of
//! options in a file next to their feature files and pass it with
//! `--settings`.  Every key is optional; an absent key falls back to the
//! command line or the built-in default.  Example:
//!
//! ```toml
//! feature_directory = "features"
//! output_directory = "docs"
//! documentation_format = "dhtml"
//! system_under_test_version = "2.4.1"
//! test_results_files = ["TestResult.xml"]
//! experimental_features = false
//! comments = true
//!
//! [arguments]
//! system_under_test_name = "Shop"
//! test_results_format = "nunit3"
//! language = "en"
//! exclude_tags = "@ignore"
//! hide_tags = "@internal"
//! ```
//!
//! Relative paths are resolved against the directory containing the file.
//! The file is only ever read; nothing is written back.

use std::path::{Path, PathBuf};

use pickles_core::{Arguments, DocumentationFormat, ParseFormatError};
use serde::Deserialize;
use thiserror::Error;

use crate::bootstrap::Invocation;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("I/O error reading settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed as TOML but is not meaningful.
    #[error("invalid value for '{field}': {source}")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: ParseFormatError,
    },
}

/// On-disk shape of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub feature_directory: Option<PathBuf>,
    pub output_directory: Option<PathBuf>,
    /// Output format name, matched case-insensitively.
    pub documentation_format: Option<String>,
    pub system_under_test_version: Option<String>,
    pub test_results_files: Vec<PathBuf>,
    pub experimental_features: Option<bool>,
    pub comments: Option<bool>,
    pub arguments: Arguments,
}

impl SettingsFile {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`toml::de::Error`] if the text is not valid TOML or a key has
    /// the wrong type.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Converts the file into an [`Invocation`], resolving relative paths
    /// against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidValue`] if `documentation_format` names
    /// no known format.
    pub fn into_invocation(self, base_dir: &Path) -> Result<Invocation, SettingsError> {
        let documentation_format = self
            .documentation_format
            .as_deref()
            .map(str::parse::<DocumentationFormat>)
            .transpose()
            .map_err(|source| SettingsError::InvalidValue {
                field: "documentation_format",
                source,
            })?;

        Ok(Invocation {
            feature_directory: self.feature_directory.map(|p| resolve(base_dir, p)),
            output_directory: self.output_directory.map(|p| resolve(base_dir, p)),
            documentation_format,
            system_under_test_version: self.system_under_test_version,
            test_results_files: self
                .test_results_files
                .into_iter()
                .map(|p| resolve(base_dir, p))
                .collect(),
            experimental_features: self.experimental_features,
            comments: self.comments,
            arguments: self.arguments,
        })
    }
}

/// Reads and parses the settings file at `path`.
///
/// A missing file is an error: the user named it explicitly.
///
/// # Errors
///
/// Returns [`SettingsError::Io`] if the file cannot be read and
/// [`SettingsError::Parse`] if the TOML is malformed.
pub fn load_settings(path: &Path) -> Result<SettingsFile, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SettingsFile::from_toml(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `path` and converts it into an [`Invocation`].
///
/// # Errors
///
/// See [`load_settings`] and [`SettingsFile::into_invocation`].
pub fn load_invocation(path: &Path) -> Result<Invocation, SettingsError> {
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    load_settings(path)?.into_invocation(base_dir)
}

fn resolve(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_empty_settings() {
        let settings = SettingsFile::from_toml("").expect("empty TOML is valid");
        assert_eq!(settings, SettingsFile::default());
    }

    #[test]
    fn test_full_settings_file_deserializes() {
        // Arrange
        let toml_str = r#"
feature_directory = "features"
output_directory = "docs"
documentation_format = "dhtml"
system_under_test_version = "2.4.1"
test_results_files = ["a.xml", "b.xml"]
experimental_features = true
comments = false

[arguments]
system_under_test_name = "Shop"
test_results_format = "nunit3"
language = "fr"
"#;

        // Act
        let settings = SettingsFile::from_toml(toml_str).expect("deserialize");

        // Assert
        assert_eq!(settings.feature_directory, Some(PathBuf::from("features")));
        assert_eq!(settings.documentation_format.as_deref(), Some("dhtml"));
        assert_eq!(settings.test_results_files.len(), 2);
        assert_eq!(settings.experimental_features, Some(true));
        assert_eq!(settings.comments, Some(false));
        assert_eq!(settings.arguments.language.as_deref(), Some("fr"));
        assert_eq!(settings.arguments.hide_tags, None);
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        assert!(SettingsFile::from_toml("comments = \"yes\"").is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        assert!(SettingsFile::from_toml("[[[ not valid toml").is_err());
    }

    #[test]
    fn test_into_invocation_resolves_relative_paths() {
        let settings = SettingsFile {
            feature_directory: Some(PathBuf::from("features")),
            test_results_files: vec![PathBuf::from("out/TestResult.xml")],
            ..SettingsFile::default()
        };

        let invocation = settings.into_invocation(Path::new("/repo")).unwrap();

        assert_eq!(invocation.feature_directory, Some(PathBuf::from("/repo/features")));
        assert_eq!(
            invocation.test_results_files,
            vec![PathBuf::from("/repo/out/TestResult.xml")]
        );
    }

    #[test]
    fn test_into_invocation_keeps_absolute_paths() {
        let absolute = std::env::temp_dir().join("docs");
        let settings = SettingsFile {
            output_directory: Some(absolute.clone()),
            ..SettingsFile::default()
        };

        let invocation = settings.into_invocation(Path::new("/repo")).unwrap();

        assert_eq!(invocation.output_directory, Some(absolute));
    }

    #[test]
    fn test_into_invocation_parses_documentation_format() {
        let settings = SettingsFile {
            documentation_format: Some("Markdown".to_string()),
            ..SettingsFile::default()
        };

        let invocation = settings.into_invocation(Path::new("")).unwrap();

        assert_eq!(
            invocation.documentation_format,
            Some(DocumentationFormat::Markdown)
        );
    }

    #[test]
    fn test_into_invocation_rejects_unknown_documentation_format() {
        let settings = SettingsFile {
            documentation_format: Some("pdf".to_string()),
            ..SettingsFile::default()
        };

        let result = settings.into_invocation(Path::new(""));

        assert!(matches!(
            result,
            Err(SettingsError::InvalidValue {
                field: "documentation_format",
                ..
            })
        ));
    }

    #[test]
    fn test_load_settings_missing_file_is_io_error() {
        let path = PathBuf::from("/nonexistent/path/that/cannot/exist/pickles.toml");
        assert!(matches!(load_settings(&path), Err(SettingsError::Io { .. })));
    }
}
