//! The widget controller: owns the selection state and drives repaints.
//!
//! Every transition replaces the state, projects it, and repaints exactly
//! once before returning. No-op transitions (an out-of-range tab, a flip
//! outside the Definition tab) still repaint the unchanged tree.

use crate::content::{AssetDescriptor, AssetProvider, ContentCatalog};
use crate::error::Result;
use crate::interaction::Interaction;
use crate::projection::project;
use crate::render::RenderBoundary;
use crate::state::{SelectionState, Tab, View};
use std::path::PathBuf;
use tracing::{error, info};

pub struct LearningWidget<'a, R, A> {
    catalog: &'a ContentCatalog,
    state: SelectionState,
    renderer: R,
    assets: A,
    /// Resolved from `assets` once; shown and downloaded as-is
    asset: AssetDescriptor,
}

impl<'a, R, A> LearningWidget<'a, R, A>
where
    R: RenderBoundary,
    A: AssetProvider,
{
    /// Widget in the catalog's default state. Nothing is painted yet.
    ///
    /// Fails when the asset provider cannot describe its file.
    pub fn new(catalog: &'a ContentCatalog, renderer: R, assets: A) -> Result<Self> {
        let asset = assets.descriptor()?;
        Ok(Self {
            catalog,
            state: SelectionState::new(catalog),
            renderer,
            assets,
            asset,
        })
    }

    /// Widget starting in `code` instead of the default language.
    pub fn with_language(
        catalog: &'a ContentCatalog,
        code: &str,
        renderer: R,
        assets: A,
    ) -> Result<Self> {
        let language = catalog.language(code)?;
        let asset = assets.descriptor()?;
        Ok(Self {
            catalog,
            state: SelectionState::with_language(language),
            renderer,
            assets,
            asset,
        })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &ContentCatalog {
        self.catalog
    }

    pub fn asset(&self) -> &AssetDescriptor {
        &self.asset
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Paint the current state without changing it.
    pub fn repaint(&mut self) {
        match project(&self.state, self.catalog, &self.asset) {
            Ok(tree) => self.renderer.repaint(&tree),
            Err(e) => error!("Projection failed for {:?}: {}", self.state, e),
        }
    }

    fn commit(&mut self, next: SelectionState) {
        self.state = next;
        self.repaint();
    }

    // ==================== Transitions ====================

    pub fn toggle_language(&mut self) {
        let next = self.state.toggle_language(self.catalog);
        info!("Language switched to {}", next.language());
        self.commit(next);
    }

    pub fn toggle_view(&mut self) {
        self.commit(self.state.toggle_view());
    }

    pub fn select_tab(&mut self, index: usize) {
        self.commit(self.state.select_tab(index));
    }

    pub fn toggle_card_flip(&mut self) {
        self.commit(self.state.toggle_card_flip());
    }

    /// Hand the study material to the asset provider.
    ///
    /// Returns `Ok(None)` when the download trigger is not on screen.
    pub fn download(&mut self) -> Result<Option<PathBuf>> {
        if self.state.view() != View::Learning || self.state.active_tab() != Tab::StudyMaterial {
            return Ok(None);
        }

        let path = self.assets.fulfill(&self.asset)?;
        info!("Study material available at {}", path.display());
        Ok(Some(path))
    }

    /// Route an interaction to its transition or to the download trigger.
    pub fn dispatch(&mut self, interaction: Interaction) -> Result<Option<PathBuf>> {
        match interaction {
            Interaction::ToggleLanguage => self.toggle_language(),
            Interaction::ToggleView => self.toggle_view(),
            Interaction::SelectTab { index } => self.select_tab(index),
            Interaction::ToggleCardFlip => self.toggle_card_flip(),
            Interaction::Download => return self.download(),
        }
        Ok(None)
    }
}
