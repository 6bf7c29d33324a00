//! Bundle validation.
//!
//! Empty fields are errors: the catalog refuses to start with them. Text that
//! does not use the language's script is only a warning, since some terms
//! (e.g. "Hypoxia") are deliberately left in English.

use crate::i18n::{LanguageConfig, Script};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Names of empty fields
    pub errors: Vec<String>,

    /// Non-critical findings, e.g. text that looks untranslated
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale bundles.
pub struct BundleValidator;

static LATIN_REGEX: OnceLock<Regex> = OnceLock::new();
static DEVANAGARI_REGEX: OnceLock<Regex> = OnceLock::new();
static LETTER_REGEX: OnceLock<Regex> = OnceLock::new();

impl BundleValidator {
    /// Check every field of the language's bundle.
    pub fn validate(config: &LanguageConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (field, value) in config.bundle.fields() {
            if value.trim().is_empty() {
                report.errors.push(field.to_string());
                continue;
            }

            if !Self::uses_script(value, config.script) {
                report.warnings.push(format!(
                    "Field '{}' of '{}' contains no {:?} text: {:?}",
                    field, config.code, config.script, value
                ));
            }
        }

        report
    }

    /// True when the text has no letters at all or at least one in `script`.
    fn uses_script(text: &str, script: Script) -> bool {
        let letters = LETTER_REGEX.get_or_init(|| Regex::new(r"\p{L}").unwrap());
        if !letters.is_match(text) {
            return true;
        }

        let cell = match script {
            Script::Latin => &LATIN_REGEX,
            Script::Devanagari => &DEVANAGARI_REGEX,
        };
        cell.get_or_init(|| Regex::new(script.pattern()).unwrap())
            .is_match(text)
    }
}
