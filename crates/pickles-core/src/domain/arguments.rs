//! The flat argument bundle handed to [`Configuration::apply_arguments`].
//!
//! Tokenising the command line is the front end's job; by the time values
//! reach this type they are plain strings.  Every field is optional and an
//! empty string is treated exactly like an absent value, so a front end may
//! forward whatever it parsed without filtering.
//!
//! [`Configuration::apply_arguments`]: crate::application::configuration::Configuration::apply_arguments

use serde::{Deserialize, Serialize};

/// Already-parsed command-line values that overlay the configuration defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arguments {
    /// Tag expression for scenarios to leave out of the documentation.
    pub exclude_tags: Option<String>,
    /// Tag expression for tags to hide from the rendered output.
    pub hide_tags: Option<String>,
    /// Name of the system under test, shown in the documentation header.
    pub system_under_test_name: Option<String>,
    /// Test-result format token, e.g. `"NUnit3"`; parsed case-insensitively.
    pub test_results_format: Option<String>,
    /// Gherkin language code of the feature files, e.g. `"fr"`.
    pub language: Option<String>,
}

impl Arguments {
    /// Creates an empty bundle; applying it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no field carries a non-empty value.
    pub fn is_empty(&self) -> bool {
        [
            &self.exclude_tags,
            &self.hide_tags,
            &self.system_under_test_name,
            &self.test_results_format,
            &self.language,
        ]
        .into_iter()
        .all(|field| present(field).is_none())
    }

    /// Fills every absent field of `self` from `fallback`.
    ///
    /// Used by the CLI to layer command-line values over a settings file.
    pub fn or(self, fallback: Arguments) -> Arguments {
        Arguments {
            exclude_tags: either(self.exclude_tags, fallback.exclude_tags),
            hide_tags: either(self.hide_tags, fallback.hide_tags),
            system_under_test_name: either(
                self.system_under_test_name,
                fallback.system_under_test_name,
            ),
            test_results_format: either(self.test_results_format, fallback.test_results_format),
            language: either(self.language, fallback.language),
        }
    }
}

/// Returns the field's value only when it is set and non-empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn either(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    if present(&primary).is_some() {
        primary
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_arguments_are_empty() {
        assert!(Arguments::new().is_empty());
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let args = Arguments {
            language: Some(String::new()),
            hide_tags: Some(String::new()),
            ..Arguments::default()
        };
        assert!(args.is_empty());
        assert_eq!(present(&args.language), None);
    }

    #[test]
    fn test_present_returns_non_empty_value() {
        let field = Some("fr".to_string());
        assert_eq!(present(&field), Some("fr"));
    }

    #[test]
    fn test_or_prefers_primary_and_falls_back_per_field() {
        // Arrange
        let primary = Arguments {
            language: Some("fr".to_string()),
            exclude_tags: Some(String::new()),
            ..Arguments::default()
        };
        let fallback = Arguments {
            language: Some("de".to_string()),
            exclude_tags: Some("@wip".to_string()),
            hide_tags: Some("@internal".to_string()),
            ..Arguments::default()
        };

        // Act
        let merged = primary.or(fallback);

        // Assert
        assert_eq!(merged.language.as_deref(), Some("fr"));
        assert_eq!(merged.exclude_tags.as_deref(), Some("@wip"));
        assert_eq!(merged.hide_tags.as_deref(), Some("@internal"));
        assert_eq!(merged.system_under_test_name, None);
    }
}
