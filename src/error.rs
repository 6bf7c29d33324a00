use thiserror::Error;

/// Errors raised by the widget core.
///
/// Only catalog construction and asset fulfilment can fail in normal
/// operation. `IndexOutOfRange` indicates a broken invariant upstream of the
/// projection and should never reach a learner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Tab index {index} out of range (expected 0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Bundle for '{language}' has an empty field: {field}")]
    IncompleteBundle { language: String, field: String },

    #[error("Catalog has no configured languages")]
    EmptyCatalog,

    #[error("Asset unavailable: {0}")]
    Asset(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
