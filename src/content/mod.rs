//! Language-independent content: the catalog, the bilingual checklist and
//! the downloadable study material.

mod asset;
mod catalog;
mod checklist;

pub use asset::{
    format_size, AssetDescriptor, AssetProvider, DirectoryAssetProvider, StaticAssetProvider,
    DEFAULT_ASSET_FILE, DEFAULT_SIZE_LABEL,
};
pub use catalog::ContentCatalog;
pub use checklist::{ChecklistItem, SAFETY_CHECKLIST};
