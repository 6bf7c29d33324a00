//! Language registry: the static table of configured languages.
//!
//! The table order is significant. The first entry is the default language
//! and the language toggle cycles through the entries in table order.

use crate::error::{Result, WidgetError};
use crate::i18n::strings::{ENGLISH_BUNDLE, HINDI_BUNDLE};
use crate::i18n::{Language, LocaleBundle};
use std::sync::OnceLock;

/// Writing system a language's bundle is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Devanagari,
}

impl Script {
    /// Unicode script class usable inside a regex.
    pub fn pattern(&self) -> &'static str {
        match self {
            Script::Latin => r"\p{Latin}",
            Script::Devanagari => r"\p{Devanagari}",
        }
    }
}

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Hindi")
    pub name: &'static str,

    /// Self-label shown on the language toggle (e.g., "हिन्दी")
    pub native_name: &'static str,

    /// Script the bundle text is written in
    pub script: Script,

    /// All localized strings for this language
    pub bundle: &'static LocaleBundle,
}

/// Ordered table of configured languages.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Build a registry from an explicit table. Rejects an empty table.
    pub fn new(languages: Vec<LanguageConfig>) -> Result<Self> {
        if languages.is_empty() {
            return Err(WidgetError::EmptyCatalog);
        }
        Ok(Self { languages })
    }

    /// The built-in English/Hindi registry, initialized on first access.
    pub fn builtin() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Resolve a code into a validated `Language`.
    pub fn language(&self, code: &str) -> Result<Language> {
        self.get_by_code(code)
            .map(|config| Language::new(config.code))
            .ok_or_else(|| WidgetError::UnknownLanguage(code.to_string()))
    }

    /// All configured languages in cycle order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// The first configured language.
    pub fn default_language(&self) -> Language {
        Language::new(self.languages[0].code)
    }

    /// The language after `current` in cycle order, wrapping at the end.
    ///
    /// An unconfigured `current` falls back to the default language.
    pub fn next_after(&self, current: Language) -> Language {
        match self.languages.iter().position(|l| l.code == current.code()) {
            Some(idx) => Language::new(self.languages[(idx + 1) % self.languages.len()].code),
            None => self.default_language(),
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Default language configurations: English (default) and Hindi.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            script: Script::Latin,
            bundle: &ENGLISH_BUNDLE,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            script: Script::Devanagari,
            bundle: &HINDI_BUNDLE,
        },
    ]
}
