//! Preview binary - paints every screen of the widget once, in every language
//!
//! Usage:
//!   cargo run --bin preview            # Plain text
//!   cargo run --bin preview -- --json  # One JSON frame per line
//!
//! Useful for reviewing translations without clicking through the widget.

use alarmis_widget::content::{AssetProvider, ContentCatalog, StaticAssetProvider};
use alarmis_widget::render::{JsonRenderer, RenderBoundary, TextRenderer};
use alarmis_widget::state::{SelectionState, TAB_COUNT};
use alarmis_widget::project;
use anyhow::{Context, Result};
use std::io;
use tracing::info;

/// Every distinct screen reachable from the default state of one language.
fn screens(start: SelectionState) -> Vec<SelectionState> {
    let mut states: Vec<SelectionState> = (0..TAB_COUNT).map(|i| start.select_tab(i)).collect();
    states.push(start.select_tab(1).toggle_card_flip());
    states.push(start.toggle_view());
    states
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alarmis_widget=info".parse()?)
                .add_directive("preview=info".parse()?),
        )
        .init();

    let json = std::env::args().any(|arg| arg == "--json");
    let catalog = ContentCatalog::builtin().context("Built-in content failed validation")?;
    let asset = StaticAssetProvider::default().descriptor()?;

    let mut renderer: Box<dyn RenderBoundary> = if json {
        Box::new(JsonRenderer::new(io::stdout()))
    } else {
        Box::new(TextRenderer::new(io::stdout()))
    };

    let mut state = SelectionState::new(&catalog);
    for config in catalog.languages() {
        info!("Previewing {} ({})", config.name, config.code);

        for screen in screens(state) {
            let tree = project(&screen, &catalog, &asset)?;
            renderer.repaint(&tree);
            if !json {
                println!();
            }
        }

        state = state.toggle_language(&catalog);
    }

    Ok(())
}
