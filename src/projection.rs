//! View projection: `(SelectionState, ContentCatalog, AssetDescriptor) -> RenderTree`.
//!
//! Pure. Every string in the tree comes from the active language's bundle,
//! except the checklist, which always carries both renderings.

use crate::content::{AssetDescriptor, ChecklistItem, ContentCatalog};
use crate::error::Result;
use crate::i18n::LocaleBundle;
use crate::state::{SelectionState, Tab, View};
use serde::Serialize;

pub const BRAND: &str = "Alarmis.in";

/// Static dashboard figures. Placeholders, not computed.
pub const ACTIVE_LEARNERS: &str = "1,240";
pub const AVERAGE_MASTERY: &str = "88%";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub header: Header,
    pub body: Body,
}

/// Navbar shown above both views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub brand: &'static str,
    pub search_placeholder: &'static str,
    /// Self-label of the language the toggle switches to
    pub language_toggle_label: &'static str,
    pub view_toggle_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Body {
    Learning(LearningBody),
    Dashboard(DashboardBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningBody {
    pub title: &'static str,
    pub navigation: Vec<NavTab>,
    /// Label of the active tab, repeated above the block
    pub badge: &'static str,
    pub block: ContentBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavTab {
    pub tab: Tab,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Introduction {
        text: &'static str,
    },
    Definition {
        face: CardFace,
    },
    Purpose {
        quotation: &'static str,
    },
    StudyMaterial {
        asset: AssetView,
        download_label: &'static str,
        checklist_title: &'static str,
        checklist: Vec<ChecklistItem>,
    },
}

/// Visible face of the definition card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "face", rename_all = "snake_case")]
pub enum CardFace {
    Front {
        term: &'static str,
        prompt: &'static str,
    },
    Back {
        explanation: &'static str,
    },
}

/// Asset descriptor as displayed: file facts plus a localized language tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetView {
    pub filename: String,
    pub size_label: String,
    pub language_tag: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardBlock {
    pub title: &'static str,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

/// Derive the renderable tree for a state.
///
/// `asset` is the descriptor supplied by the asset provider; it is only shown
/// on the Study Material tab. Fails only with `UnknownLanguage` when the state
/// was built against a different catalog.
pub fn project(
    state: &SelectionState,
    catalog: &ContentCatalog,
    asset: &AssetDescriptor,
) -> Result<RenderTree> {
    let bundle = catalog.get_bundle(state.language().code())?;
    let toggle_target = catalog.next_language(state.language());

    let header = Header {
        brand: BRAND,
        search_placeholder: bundle.search_placeholder,
        language_toggle_label: catalog.native_name(toggle_target)?,
        view_toggle_label: match state.view() {
            View::Learning => bundle.view_dashboard_label,
            View::Dashboard => bundle.back_label,
        },
    };

    let body = match state.view() {
        View::Dashboard => Body::Dashboard(dashboard(bundle)),
        View::Learning => Body::Learning(LearningBody {
            title: bundle.title,
            navigation: navigation(bundle, state.active_tab()),
            badge: bundle.tab_labels[state.active_tab_index()],
            block: content_block(state, bundle, catalog, asset),
        }),
    };

    Ok(RenderTree { header, body })
}

fn navigation(bundle: &'static LocaleBundle, active: Tab) -> Vec<NavTab> {
    Tab::ALL
        .iter()
        .map(|&tab| NavTab {
            tab,
            label: bundle.tab_labels[tab.index()],
            selected: tab == active,
        })
        .collect()
}

fn content_block(
    state: &SelectionState,
    bundle: &'static LocaleBundle,
    catalog: &ContentCatalog,
    asset: &AssetDescriptor,
) -> ContentBlock {
    match state.active_tab() {
        Tab::Introduction => ContentBlock::Introduction {
            text: bundle.intro_text,
        },
        Tab::Definition => ContentBlock::Definition {
            face: if state.card_flipped() {
                CardFace::Back {
                    explanation: bundle.definition_back,
                }
            } else {
                CardFace::Front {
                    term: bundle.definition_front,
                    prompt: bundle.flip_prompt,
                }
            },
        },
        Tab::Purpose => ContentBlock::Purpose {
            quotation: bundle.purpose_text,
        },
        Tab::StudyMaterial => ContentBlock::StudyMaterial {
            asset: AssetView {
                filename: asset.filename.clone(),
                size_label: asset.size_label.clone(),
                language_tag: bundle.asset_language_tag,
            },
            download_label: bundle.download_label,
            checklist_title: bundle.checklist_title,
            checklist: catalog.list_checklist_items().to_vec(),
        },
    }
}

fn dashboard(bundle: &'static LocaleBundle) -> DashboardBlock {
    DashboardBlock {
        title: bundle.dashboard_title,
        metrics: vec![
            Metric {
                label: bundle.learners_label,
                value: ACTIVE_LEARNERS,
            },
            Metric {
                label: bundle.mastery_label,
                value: AVERAGE_MASTERY,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn catalog() -> ContentCatalog {
        ContentCatalog::builtin().expect("builtin catalog")
    }

    fn asset() -> AssetDescriptor {
        AssetDescriptor::default()
    }

    fn learning(tree: &RenderTree) -> &LearningBody {
        match &tree.body {
            Body::Learning(body) => body,
            Body::Dashboard(_) => panic!("expected learning view"),
        }
    }

    // ==================== Header Tests ====================

    #[test]
    fn test_header_in_english_offers_hindi() {
        let catalog = catalog();
        let tree = project(&SelectionState::new(&catalog), &catalog, &asset()).unwrap();
        assert_eq!(tree.header.brand, "Alarmis.in");
        assert_eq!(tree.header.language_toggle_label, "हिन्दी");
        assert_eq!(tree.header.view_toggle_label, "View Dashboard");
        assert_eq!(tree.header.search_placeholder, "Search clinical terms...");
    }

    #[test]
    fn test_header_in_hindi_offers_english() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).toggle_language(&catalog);
        let tree = project(&state, &catalog, &asset()).unwrap();
        assert_eq!(tree.header.language_toggle_label, "English");
    }

    // ==================== Navigation Tests ====================

    #[test]
    fn test_navigation_marks_active_tab() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).select_tab(2);
        let tree = project(&state, &catalog, &asset()).unwrap();
        let body = learning(&tree);

        let selected: Vec<_> = body.navigation.iter().filter(|t| t.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].tab, Tab::Purpose);
        assert_eq!(body.badge, "Purpose");
    }

    // ==================== Block Tests ====================

    #[test]
    fn test_introduction_block() {
        let catalog = catalog();
        let tree = project(&SelectionState::new(&catalog), &catalog, &asset()).unwrap();
        let body = learning(&tree);
        assert_eq!(body.title, "Oxygen Therapy");
        assert!(matches!(
            body.block,
            ContentBlock::Introduction { text } if text.starts_with("Oxygen therapy is")
        ));
    }

    #[test]
    fn test_definition_front_then_back() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).select_tab(1);

        let front = project(&state, &catalog, &asset()).unwrap();
        assert_eq!(
            learning(&front).block,
            ContentBlock::Definition {
                face: CardFace::Front {
                    term: "Hypoxia",
                    prompt: "Click for clinical application",
                }
            }
        );

        let back = project(&state.toggle_card_flip(), &catalog, &asset()).unwrap();
        assert_eq!(
            learning(&back).block,
            ContentBlock::Definition {
                face: CardFace::Back {
                    explanation: "A state where the body is deprived of adequate oxygen supply at the tissue level.",
                }
            }
        );
    }

    #[test]
    fn test_purpose_block() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).select_tab(2);
        let tree = project(&state, &catalog, &asset()).unwrap();
        assert!(matches!(
            learning(&tree).block,
            ContentBlock::Purpose { quotation } if quotation.starts_with("To maintain")
        ));
    }

    #[test]
    fn test_study_material_language_tag_follows_language() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).select_tab(3);

        for (state, tag) in [
            (state, "Bilingual"),
            (state.toggle_language(&catalog), "द्विभाषी"),
        ] {
            let tree = project(&state, &catalog, &asset()).unwrap();
            match &learning(&tree).block {
                ContentBlock::StudyMaterial { asset, .. } => {
                    assert_eq!(asset.filename, "Safety_Protocol_v2.pdf");
                    assert_eq!(asset.size_label, "1.4 MB");
                    assert_eq!(asset.language_tag, tag);
                }
                other => panic!("unexpected block {:?}", other),
            }
        }
    }

    #[test]
    fn test_study_material_shows_supplied_descriptor() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).select_tab(3);
        let supplied = AssetDescriptor {
            filename: "protocol.pdf".to_string(),
            size_label: "4.0 KB".to_string(),
        };

        let tree = project(&state, &catalog, &supplied).unwrap();
        match &learning(&tree).block {
            ContentBlock::StudyMaterial { asset, .. } => {
                assert_eq!(asset.filename, "protocol.pdf");
                assert_eq!(asset.size_label, "4.0 KB");
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_checklist_identical_across_languages() {
        let catalog = catalog();
        let en = SelectionState::new(&catalog).select_tab(3);
        let hi = en.toggle_language(&catalog);

        let checklist = |state: SelectionState| match project(&state, &catalog, &asset())
            .unwrap()
            .body
        {
            Body::Learning(LearningBody {
                block: ContentBlock::StudyMaterial { checklist, .. },
                ..
            }) => checklist,
            other => panic!("unexpected body {:?}", other),
        };

        assert_eq!(checklist(en), checklist(hi));
        assert_eq!(checklist(en), catalog.list_checklist_items().to_vec());
    }

    // ==================== Dashboard Tests ====================

    #[test]
    fn test_dashboard_replaces_learning_body() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).select_tab(1).toggle_view();
        let tree = project(&state, &catalog, &asset()).unwrap();

        assert_eq!(tree.header.view_toggle_label, "Back to Learning");
        match tree.body {
            Body::Dashboard(block) => {
                assert_eq!(block.title, "Institutional Overview");
                assert_eq!(block.metrics[0].value, "1,240");
                assert_eq!(block.metrics[1].value, "88%");
            }
            Body::Learning(_) => panic!("expected dashboard"),
        }
    }

    // ==================== Error Tests ====================

    #[test]
    fn test_state_from_foreign_catalog_is_unknown_language() {
        let catalog = catalog();
        let state = SelectionState::with_language(Language::new("fr"));
        assert!(project(&state, &catalog, &asset()).is_err());
    }

    #[test]
    fn test_tree_serializes_with_tags() {
        let catalog = catalog();
        let state = SelectionState::new(&catalog).select_tab(1);
        let json = serde_json::to_value(project(&state, &catalog, &asset()).unwrap()).unwrap();
        assert_eq!(json["body"]["view"], "learning");
        assert_eq!(json["body"]["block"]["kind"], "definition");
        assert_eq!(json["body"]["block"]["face"]["face"], "front");
    }
}
