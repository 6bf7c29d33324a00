//! Bilingual clinical learning widget.
//!
//! A `ContentCatalog` holds every localized string, a `SelectionState`
//! records what is on screen, and `project` turns the two into a
//! `RenderTree` for whatever `RenderBoundary` paints it. `LearningWidget`
//! ties them together and repaints once per transition.

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod interaction;
pub mod projection;
pub mod render;
pub mod state;
pub mod widget;

pub use content::{AssetDescriptor, AssetProvider, ChecklistItem, ContentCatalog};
pub use error::WidgetError;
pub use interaction::Interaction;
pub use projection::{project, RenderTree};
pub use render::RenderBoundary;
pub use state::{SelectionState, Tab, View};
pub use widget::LearningWidget;
