//! End-to-end scenarios for the configuration store.
//!
//! These tests drive `Configuration` only through its public API, with the
//! in-memory collaborators from `infrastructure::*::mock` or with real files
//! in a temporary directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pickles_core::infrastructure::diagnostics::mock::RecordingDiagnostics;
use pickles_core::infrastructure::file_system::mock::MockFileSystem;
use pickles_core::{
    Arguments, Configuration, ConfigurationError, DefaultLanguageRegistry, Diagnostic,
    DocumentationSettings, FeatureMode, FeatureSwitch, LanguageRegistry, Services,
    TestResultsFormat,
};
use uuid::Uuid;

struct FixedLanguage(&'static str);

impl LanguageRegistry for FixedLanguage {
    fn default_language(&self) -> String {
        self.0.to_string()
    }

    fn supported_languages(&self) -> Vec<String> {
        vec![self.0.to_string()]
    }
}

fn services(fs: &MockFileSystem, diagnostics: &RecordingDiagnostics) -> Services {
    Services {
        file_system: Arc::new(fs.clone()),
        diagnostics: Arc::new(diagnostics.clone()),
        features: Arc::new(FeatureSwitch::new()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_full_configuration_scenario() {
    // Arrange: registry says "en"; r1 and r2 exist, m does not.
    let fs = MockFileSystem::with_files(["r1.xml", "r2.xml"]);
    let diagnostics = RecordingDiagnostics::new();
    let mut config = Configuration::with_services(&FixedLanguage("en"), services(&fs, &diagnostics));

    // Act
    config.add_test_results_file("r1.xml");
    config.add_test_results_file("r2.xml");
    config.add_test_results_file("m.xml");
    config
        .apply_arguments(&Arguments {
            language: Some("fr".to_string()),
            test_results_format: Some("xUnit".to_string()),
            ..Arguments::default()
        })
        .expect("arguments are valid");

    // Assert
    assert_eq!(config.language(), "fr");
    assert_eq!(config.test_results_format(), Some(TestResultsFormat::XUnit));
    assert_eq!(
        config.test_results_files(),
        &[PathBuf::from("r1.xml"), PathBuf::from("r2.xml")]
    );
    assert!(config.has_test_results());
    assert_eq!(config.test_results_file(), Path::new("r1.xml"));
    assert_eq!(diagnostics.count(), 1);
    assert!(matches!(
        &diagnostics.reported()[0],
        Diagnostic::TestResultsFileNotFound { path } if path.ends_with("m.xml")
    ));
}

#[test]
fn test_language_defaults_to_registry_until_overlaid() {
    let fs = MockFileSystem::new();
    let diagnostics = RecordingDiagnostics::new();
    let mut config = Configuration::with_services(&FixedLanguage("de"), services(&fs, &diagnostics));

    assert_eq!(config.language(), "de");

    config
        .apply_arguments(&Arguments {
            language: Some("sv".to_string()),
            ..Arguments::default()
        })
        .unwrap();
    assert_eq!(config.language(), "sv");
}

#[test]
fn test_format_token_is_case_insensitive() {
    let mut config = Configuration::with_services(
        &DefaultLanguageRegistry::new(),
        services(&MockFileSystem::new(), &RecordingDiagnostics::new()),
    );

    config
        .apply_arguments(&Arguments {
            test_results_format: Some("NUNIT3".to_string()),
            ..Arguments::default()
        })
        .unwrap();

    assert_eq!(config.test_results_format(), Some(TestResultsFormat::NUnit3));
}

#[test]
fn test_bad_format_leaves_earlier_fields_applied() {
    let mut config = Configuration::with_services(
        &DefaultLanguageRegistry::new(),
        services(&MockFileSystem::new(), &RecordingDiagnostics::new()),
    );

    let result = config.apply_arguments(&Arguments {
        exclude_tags: Some("@ignore".to_string()),
        test_results_format: Some("not-a-format".to_string()),
        ..Arguments::default()
    });

    assert!(matches!(result, Err(ConfigurationError::InvalidArgument { .. })));
    assert_eq!(config.exclude_tags(), Some("@ignore"));
    assert_eq!(config.test_results_format(), None);
}

#[test]
fn test_injected_feature_switch_receives_toggles() {
    let features = Arc::new(FeatureSwitch::new());
    let mut config = Configuration::with_services(
        &DefaultLanguageRegistry::new(),
        Services {
            features: Arc::clone(&features),
            ..services(&MockFileSystem::new(), &RecordingDiagnostics::new())
        },
    );

    config.enable_experimental_features();
    assert!(features.is_enabled("any-feature"));

    config.disable_experimental_features();
    assert_eq!(features.mode(), FeatureMode::AlwaysDisabled);
    assert!(!config.should_include_experimental_features());
}

#[test]
fn test_native_file_system_filters_real_files() {
    // Arrange
    let dir = std::env::temp_dir().join(format!("pickles_test_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let present = dir.join("TestResult.xml");
    std::fs::write(&present, "<test-run/>").unwrap();
    let absent = dir.join("missing.xml");

    let diagnostics = RecordingDiagnostics::new();
    let mut config = Configuration::with_services(
        &DefaultLanguageRegistry::new(),
        Services {
            diagnostics: Arc::new(diagnostics.clone()),
            features: Arc::new(FeatureSwitch::new()),
            ..Services::default()
        },
    );

    // Act
    config.add_test_results_files(Some([present.clone(), absent.clone()]));

    // Assert
    assert_eq!(config.test_results_files(), &[present]);
    assert_eq!(
        diagnostics.reported(),
        vec![Diagnostic::TestResultsFileNotFound {
            path: absent.display().to_string()
        }]
    );

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}
