//! Language type: a code that has been resolved against a registry.

use serde::Serialize;

/// A configured language.
///
/// Obtained from `LanguageRegistry::language` (or the constants below for the
/// built-in table), so holding one means the code was configured at the time
/// it was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl Language {
    /// English, the default language of the built-in registry.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Hindi.
    pub const HINDI: Language = Language { code: "hi" };

    pub(crate) const fn new(code: &'static str) -> Language {
        Language { code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
