//! Content catalog: every piece of text the widget can show.
//!
//! Built once at startup and never mutated. Lookups are pure.

use crate::content::{ChecklistItem, SAFETY_CHECKLIST};
use crate::error::{Result, WidgetError};
use crate::i18n::{BundleValidator, Language, LanguageConfig, LanguageRegistry, LocaleBundle};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ContentCatalog {
    registry: LanguageRegistry,
    checklist: Vec<ChecklistItem>,
}

impl ContentCatalog {
    /// Build a catalog, rejecting any bundle with an empty field.
    ///
    /// Script mismatches are logged as warnings and do not fail construction.
    pub fn new(registry: LanguageRegistry, checklist: Vec<ChecklistItem>) -> Result<Self> {
        for config in registry.list() {
            let report = BundleValidator::validate(config);

            for warning in &report.warnings {
                warn!("{}", warning);
            }

            if let Some(field) = report.errors.first() {
                return Err(WidgetError::IncompleteBundle {
                    language: config.code.to_string(),
                    field: field.clone(),
                });
            }
        }

        debug!(
            "Content catalog ready: {} languages, {} checklist items",
            registry.len(),
            checklist.len()
        );

        Ok(Self {
            registry,
            checklist,
        })
    }

    /// The built-in English/Hindi oxygen therapy content.
    pub fn builtin() -> Result<Self> {
        Self::new(LanguageRegistry::builtin().clone(), SAFETY_CHECKLIST.to_vec())
    }

    pub fn get_bundle(&self, code: &str) -> Result<&'static LocaleBundle> {
        self.registry
            .get_by_code(code)
            .map(|config| config.bundle)
            .ok_or_else(|| WidgetError::UnknownLanguage(code.to_string()))
    }

    pub fn list_checklist_items(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    pub fn languages(&self) -> &[LanguageConfig] {
        self.registry.list()
    }

    pub fn language(&self, code: &str) -> Result<Language> {
        self.registry.language(code)
    }

    pub fn default_language(&self) -> Language {
        self.registry.default_language()
    }

    pub fn next_language(&self, current: Language) -> Language {
        self.registry.next_after(current)
    }

    /// Self-label of a language, as shown on the toggle that switches to it.
    pub fn native_name(&self, language: Language) -> Result<&'static str> {
        self.registry
            .get_by_code(language.code())
            .map(|config| config.native_name)
            .ok_or_else(|| WidgetError::UnknownLanguage(language.code().to_string()))
    }
}
