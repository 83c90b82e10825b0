//! Printable snapshot of a finished configuration.
//!
//! `pickles --print-config toml` shows exactly what the rendering pipeline
//! would receive after all sources were merged and result files filtered.

use clap::ValueEnum;
use pickles_core::{DocumentationFormat, DocumentationSettings, TestResultsFormat};
use serde::Serialize;
use thiserror::Error;

/// Output format for the configuration report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// TOML, readable back as a settings file.
    #[default]
    Toml,
    /// Pretty-printed JSON for tooling.
    Json,
}

/// Error type for report rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render report as TOML: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("failed to render report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable copy of every setting exposed through [`DocumentationSettings`].
///
/// Keys and nesting mirror [`SettingsFile`](crate::settings::SettingsFile), so
/// a rendered TOML report can be passed back with `--settings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,
    pub documentation_format: DocumentationFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_under_test_version: Option<String>,
    pub test_results_files: Vec<String>,
    pub experimental_features: bool,
    pub comments: bool,
    /// Rendered as the `[arguments]` table; must stay the last field so TOML
    /// emits it after the plain values.
    pub arguments: ReportArguments,
}

/// The values that travel through the argument overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportArguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_under_test_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_results_format: Option<TestResultsFormat>,
    pub language: String,
}

impl ConfigurationReport {
    /// Captures the current state of `settings`.
    pub fn from_settings(settings: &dyn DocumentationSettings) -> Self {
        Self {
            feature_directory: settings.feature_folder().map(|p| p.display().to_string()),
            output_directory: settings.output_folder().map(|p| p.display().to_string()),
            documentation_format: settings.documentation_format(),
            system_under_test_version: settings.system_under_test_version().map(str::to_string),
            test_results_files: settings
                .test_results_files()
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            experimental_features: settings.should_include_experimental_features(),
            comments: settings.should_enable_comments(),
            arguments: ReportArguments {
                exclude_tags: settings.exclude_tags().map(str::to_string),
                hide_tags: settings.hide_tags().map(str::to_string),
                system_under_test_name: settings.system_under_test_name().map(str::to_string),
                test_results_format: settings.test_results_format(),
                language: settings.language().to_string(),
            },
        }
    }

    /// Renders the report in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        Ok(match format {
            ReportFormat::Toml => toml::to_string_pretty(self)?,
            ReportFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}
