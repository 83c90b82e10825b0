//! Gherkin language registry.
//!
//! The configuration store only needs one thing from the registry: the
//! language to assume when the user does not pass `--language`.  The registry
//! also enumerates the languages the parser ships keywords for, which the CLI
//! uses for its diagnostics.

/// Source of the default feature-file language.
#[cfg_attr(test, mockall::automock)]
pub trait LanguageRegistry: Send + Sync {
    /// Language code used when none is configured, e.g. `"en"`.
    fn default_language(&self) -> String;

    /// Every language code the registry knows about.
    fn supported_languages(&self) -> Vec<String>;

    /// Returns `true` if `code` is one of [`supported_languages`](Self::supported_languages).
    fn is_supported(&self, code: &str) -> bool {
        self.supported_languages()
            .iter()
            .any(|known| known.eq_ignore_ascii_case(code))
    }
}

/// Language codes with built-in Gherkin keyword tables.
const BUILT_IN_LANGUAGES: &[&str] = &[
    "en", "af", "ar", "bg", "ca", "cs", "cy-GB", "da", "de", "en-au", "en-lol", "en-pirate",
    "en-Scouse", "eo", "es", "et", "fi", "fr", "he", "hr", "hu", "id", "is", "it", "ja", "ko",
    "lt", "lu", "lv", "nl", "no", "pl", "pt", "ro", "ru", "sk", "sr-Cyrl", "sr-Latn", "sv", "tr",
    "uk", "uz", "vi", "zh-CN", "zh-TW",
];

/// Registry backed by the built-in keyword tables; defaults to English.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLanguageRegistry;

impl DefaultLanguageRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageRegistry for DefaultLanguageRegistry {
    fn default_language(&self) -> String {
        "en".to_string()
    }

    fn supported_languages(&self) -> Vec<String> {
        BUILT_IN_LANGUAGES.iter().map(|code| code.to_string()).collect()
    }
}
