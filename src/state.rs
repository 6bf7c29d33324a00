//! Selection state: what the widget is currently showing.
//!
//! The state is a small `Copy` value. Each transition takes the current value
//! and returns the next one, so observers never see a half-applied change.

use crate::content::ContentCatalog;
use crate::error::{Result, WidgetError};
use crate::i18n::Language;
use serde::Serialize;
use tracing::debug;

/// Number of learning tabs.
pub const TAB_COUNT: usize = 4;

/// Learning tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Introduction,
    Definition,
    Purpose,
    StudyMaterial,
}

impl Tab {
    pub const ALL: [Tab; TAB_COUNT] = [
        Tab::Introduction,
        Tab::Definition,
        Tab::Purpose,
        Tab::StudyMaterial,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Introduction => 0,
            Tab::Definition => 1,
            Tab::Purpose => 2,
            Tab::StudyMaterial => 3,
        }
    }

    pub fn from_index(index: usize) -> Result<Tab> {
        Tab::ALL
            .get(index)
            .copied()
            .ok_or(WidgetError::IndexOutOfRange {
                index,
                len: TAB_COUNT,
            })
    }
}

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Learning,
    Dashboard,
}

impl View {
    pub fn toggled(self) -> View {
        match self {
            View::Learning => View::Dashboard,
            View::Dashboard => View::Learning,
        }
    }
}

/// The single mutable entity of the widget.
///
/// Only `select_tab` clears `card_flipped`; view and language toggles keep
/// whichever face was showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    language: Language,
    view: View,
    active_tab: Tab,
    card_flipped: bool,
}

impl SelectionState {
    /// Default state for a catalog: its first language, learning view, first tab.
    pub fn new(catalog: &ContentCatalog) -> Self {
        Self::with_language(catalog.default_language())
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            view: View::Learning,
            active_tab: Tab::Introduction,
            card_flipped: false,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn active_tab_index(&self) -> usize {
        self.active_tab.index()
    }

    pub fn card_flipped(&self) -> bool {
        self.card_flipped
    }

    // ==================== Transitions ====================

    /// Next configured language in cycle order. Nothing else changes.
    pub fn toggle_language(self, catalog: &ContentCatalog) -> Self {
        let language = catalog.next_language(self.language);
        debug!("language {} -> {}", self.language, language);
        Self { language, ..self }
    }

    /// Learning <-> Dashboard. Tab and flip flag are preserved.
    pub fn toggle_view(self) -> Self {
        Self {
            view: self.view.toggled(),
            ..self
        }
    }

    /// Select a tab by index and show the card's front face.
    ///
    /// An out-of-range index leaves the state untouched.
    pub fn select_tab(self, index: usize) -> Self {
        match Tab::from_index(index) {
            Ok(active_tab) => Self {
                active_tab,
                card_flipped: false,
                ..self
            },
            Err(e) => {
                debug!("select_tab ignored: {}", e);
                self
            }
        }
    }

    /// Flip the definition card. Does nothing on other tabs.
    pub fn toggle_card_flip(self) -> Self {
        if self.active_tab != Tab::Definition {
            return self;
        }
        Self {
            card_flipped: !self.card_flipped,
            ..self
        }
    }
}
