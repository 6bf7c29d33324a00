use alarmis_widget::config::{Config, RenderFormat};
use alarmis_widget::content::{
    AssetProvider, ContentCatalog, DirectoryAssetProvider, StaticAssetProvider,
};
use alarmis_widget::render::{JsonRenderer, RenderBoundary, TextRenderer};
use alarmis_widget::{Interaction, LearningWidget};
use anyhow::{Context, Result};
use std::io::{self, BufRead};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never interleave with painted frames
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alarmis_widget=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let assets: Box<dyn AssetProvider> = match &config.asset_dir {
        Some(dir) => Box::new(DirectoryAssetProvider::new(
            dir,
            &config.download_dir,
            &config.asset_file,
        )),
        None => Box::new(StaticAssetProvider::default()),
    };

    let catalog = ContentCatalog::builtin().context("Built-in content failed validation")?;

    let renderer: Box<dyn RenderBoundary> = match config.render_format {
        RenderFormat::Text => Box::new(TextRenderer::new(io::stdout())),
        RenderFormat::Json => Box::new(JsonRenderer::new(io::stdout())),
    };

    let mut widget = match &config.language {
        Some(code) => LearningWidget::with_language(&catalog, code, renderer, assets)
            .with_context(|| format!("Failed to start widget in WIDGET_LANGUAGE '{}'", code))?,
        None => LearningWidget::new(&catalog, renderer, assets)
            .context("Study material unavailable")?,
    };

    info!("Starting widget in '{}'", widget.state().language());
    widget.repaint();

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read interaction")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        let Some(interaction) = Interaction::parse(trimmed) else {
            warn!("Unknown command: {}", trimmed);
            continue;
        };

        match widget.dispatch(interaction) {
            Ok(Some(path)) => info!("Downloaded to {}", path.display()),
            Ok(None) => {}
            Err(e) => warn!("Download failed: {}", e),
        }
    }

    info!("Widget closed");
    Ok(())
}
