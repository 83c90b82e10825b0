//! Format enums shared by the configuration store and the CLI.
//!
//! Both enums parse from user-supplied tokens case-insensitively and only by
//! member name: `"nunit3"`, `"NUnit3"` and `"NUNIT3"` all resolve to
//! [`TestResultsFormat::NUnit3`], while numeric or partial tokens are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a token does not name a member of a format enum.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}; expected one of: {expected}")]
pub struct ParseFormatError {
    /// Human-readable enum name, e.g. `"test results format"`.
    pub kind: &'static str,
    /// The rejected token, as supplied.
    pub value: String,
    /// Comma-separated list of accepted names.
    pub expected: String,
}

/// Output rendering format for the generated documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentationFormat {
    /// Static HTML site.
    #[default]
    Html,
    /// Word (`.docx`) document.
    Word,
    /// JSON feature tree for custom tooling.
    Json,
    /// Excel (`.xlsx`) workbook.
    Excel,
    /// Dynamic HTML single-page application.
    Dhtml,
    /// Cucumber-style JSON.
    Cucumber,
    /// Markdown files.
    Markdown,
}

impl DocumentationFormat {
    /// Every member, in declaration order.
    pub const ALL: [DocumentationFormat; 7] = [
        DocumentationFormat::Html,
        DocumentationFormat::Word,
        DocumentationFormat::Json,
        DocumentationFormat::Excel,
        DocumentationFormat::Dhtml,
        DocumentationFormat::Cucumber,
        DocumentationFormat::Markdown,
    ];

    /// Canonical member name.
    pub fn name(self) -> &'static str {
        match self {
            DocumentationFormat::Html => "Html",
            DocumentationFormat::Word => "Word",
            DocumentationFormat::Json => "Json",
            DocumentationFormat::Excel => "Excel",
            DocumentationFormat::Dhtml => "Dhtml",
            DocumentationFormat::Cucumber => "Cucumber",
            DocumentationFormat::Markdown => "Markdown",
        }
    }
}

/// Format of the test-runner output files linked into the documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestResultsFormat {
    #[serde(rename = "NUnit")]
    NUnit,
    #[serde(rename = "NUnit3")]
    NUnit3,
    #[serde(rename = "xUnit")]
    XUnit,
    #[serde(rename = "xUnit2")]
    XUnit2,
    #[serde(rename = "MsTest")]
    MsTest,
    #[serde(rename = "CucumberJson")]
    CucumberJson,
    #[serde(rename = "SpecRun")]
    SpecRun,
    #[serde(rename = "VsTest")]
    VsTest,
}

impl TestResultsFormat {
    /// Every member, in declaration order.
    pub const ALL: [TestResultsFormat; 8] = [
        TestResultsFormat::NUnit,
        TestResultsFormat::NUnit3,
        TestResultsFormat::XUnit,
        TestResultsFormat::XUnit2,
        TestResultsFormat::MsTest,
        TestResultsFormat::CucumberJson,
        TestResultsFormat::SpecRun,
        TestResultsFormat::VsTest,
    ];

    /// Canonical member name, as written on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TestResultsFormat::NUnit => "NUnit",
            TestResultsFormat::NUnit3 => "NUnit3",
            TestResultsFormat::XUnit => "xUnit",
            TestResultsFormat::XUnit2 => "xUnit2",
            TestResultsFormat::MsTest => "MsTest",
            TestResultsFormat::CucumberJson => "CucumberJson",
            TestResultsFormat::SpecRun => "SpecRun",
            TestResultsFormat::VsTest => "VsTest",
        }
    }
}

/// Finds the member of `all` whose name matches `token`, ignoring ASCII case
/// and surrounding whitespace.
fn parse_by_name<T: Copy>(
    kind: &'static str,
    token: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, ParseFormatError> {
    let wanted = token.trim();
    all.iter()
        .copied()
        .find(|member| name(*member).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseFormatError {
            kind,
            value: token.to_string(),
            expected: all.iter().map(|m| name(*m)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for DocumentationFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name("documentation format", s, &Self::ALL, Self::name)
    }
}

impl FromStr for TestResultsFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name("test results format", s, &Self::ALL, Self::name)
    }
}

impl fmt::Display for DocumentationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TestResultsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_format_default_is_html() {
        assert_eq!(DocumentationFormat::default(), DocumentationFormat::Html);
    }

    #[test]
    fn test_test_results_format_parses_exact_name() {
        // Arrange / Act
        let parsed: TestResultsFormat = "NUnit3".parse().expect("NUnit3 is a member");

        // Assert
        assert_eq!(parsed, TestResultsFormat::NUnit3);
    }

    #[test]
    fn test_test_results_format_parse_ignores_case() {
        assert_eq!("nunit3".parse(), Ok(TestResultsFormat::NUnit3));
        assert_eq!("XUNIT".parse(), Ok(TestResultsFormat::XUnit));
        assert_eq!("cucumberjson".parse(), Ok(TestResultsFormat::CucumberJson));
    }

    #[test]
    fn test_test_results_format_does_not_confuse_prefixes() {
        // "xUnit" must not match "xUnit2" and vice versa.
        assert_eq!("xunit2".parse(), Ok(TestResultsFormat::XUnit2));
        assert_eq!("xunit".parse(), Ok(TestResultsFormat::XUnit));
    }

    #[test]
    fn test_test_results_format_rejects_unknown_token() {
        // Arrange / Act
        let err = "not-a-format".parse::<TestResultsFormat>().unwrap_err();

        // Assert
        assert_eq!(err.value, "not-a-format");
        assert_eq!(err.kind, "test results format");
        assert!(err.expected.contains("NUnit3"));
        assert!(err.to_string().contains("'not-a-format'"));
    }

    #[test]
    fn test_test_results_format_rejects_numeric_token() {
        assert!("1".parse::<TestResultsFormat>().is_err());
    }

    #[test]
    fn test_documentation_format_parse_ignores_case() {
        assert_eq!("markdown".parse(), Ok(DocumentationFormat::Markdown));
        assert_eq!("DHTML".parse(), Ok(DocumentationFormat::Dhtml));
    }

    #[test]
    fn test_documentation_format_rejects_unknown_token() {
        let err = "pdf".parse::<DocumentationFormat>().unwrap_err();
        assert_eq!(err.kind, "documentation format");
    }

    #[test]
    fn test_display_matches_canonical_name_for_every_member() {
        for format in TestResultsFormat::ALL {
            assert_eq!(format.to_string(), format.name());
            assert_eq!(format.name().parse(), Ok(format));
        }
        for format in DocumentationFormat::ALL {
            assert_eq!(format.to_string(), format.name());
        }
    }
}
