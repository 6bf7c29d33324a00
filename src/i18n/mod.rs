//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: the ordered table of configured languages and their bundles
//! - `language`: `Language`, a code resolved against the registry
//! - `strings`: `LocaleBundle` and the built-in English/Hindi bundles
//! - `validator`: bundle completeness and script checks
//!
//! # Example
//!
//! ```rust
//! use alarmis_widget::i18n::LanguageRegistry;
//!
//! let registry = LanguageRegistry::builtin();
//! let hindi = registry.next_after(registry.default_language());
//! assert_eq!(hindi.code(), "hi");
//! ```

mod language;
mod registry;
pub(crate) mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry, Script};
pub use strings::{LocaleBundle, ENGLISH_BUNDLE, HINDI_BUNDLE};
pub use validator::{BundleValidator, ValidationReport};
