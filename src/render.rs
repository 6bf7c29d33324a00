//! Render boundary: whatever paints a `RenderTree`.
//!
//! The widget only needs `RenderBoundary`. The text and JSON renderers here
//! back the demo binaries.

use crate::projection::{Body, CardFace, ContentBlock, RenderTree};
use std::io::Write;
use tracing::warn;

/// Consumer of projections. Called exactly once per transition.
pub trait RenderBoundary {
    fn repaint(&mut self, tree: &RenderTree);
}

/// Paints a tree as plain text.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderBoundary for TextRenderer<W> {
    fn repaint(&mut self, tree: &RenderTree) {
        let text = render_text(tree);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!("Failed to paint frame: {}", e);
        }
    }
}

/// Writes each tree as one JSON line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderBoundary for JsonRenderer<W> {
    fn repaint(&mut self, tree: &RenderTree) {
        let result = serde_json::to_writer(&mut self.out, tree)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());

        if let Err(e) = result {
            warn!("Failed to write frame: {}", e);
        }
    }
}

impl<R: RenderBoundary + ?Sized> RenderBoundary for Box<R> {
    fn repaint(&mut self, tree: &RenderTree) {
        (**self).repaint(tree)
    }
}

/// Plain-text rendering of a tree.
pub fn render_text(tree: &RenderTree) -> String {
    let header = &tree.header;
    let mut lines = vec![format!(
        "[{}]  ({})  <{}>  <{}>",
        header.brand,
        header.search_placeholder,
        header.language_toggle_label,
        header.view_toggle_label
    )];

    match &tree.body {
        Body::Dashboard(block) => {
            lines.push(format!("== {} ==", block.title));
            for metric in &block.metrics {
                lines.push(format!("  {}: {}", metric.label, metric.value));
            }
        }
        Body::Learning(body) => {
            lines.push(format!("== {} ==", body.title));
            let strip: Vec<String> = body
                .navigation
                .iter()
                .enumerate()
                .map(|(i, tab)| {
                    if tab.selected {
                        format!("[{}:{}]", i, tab.label)
                    } else {
                        format!(" {}:{} ", i, tab.label)
                    }
                })
                .collect();
            lines.push(strip.join(" "));
            lines.push(format!("-- {} --", body.badge));

            match &body.block {
                ContentBlock::Introduction { text } => lines.push(text.to_string()),
                ContentBlock::Definition { face } => match face {
                    CardFace::Front { term, prompt } => {
                        lines.push(format!("  {}", term));
                        lines.push(format!("  ({})", prompt));
                    }
                    CardFace::Back { explanation } => lines.push(format!("  {}", explanation)),
                },
                ContentBlock::Purpose { quotation } => lines.push(format!("\"{}\"", quotation)),
                ContentBlock::StudyMaterial {
                    asset,
                    download_label,
                    checklist_title,
                    checklist,
                } => {
                    lines.push(format!(
                        "{}  {} • {}  <{}>",
                        asset.filename, asset.size_label, asset.language_tag, download_label
                    ));
                    lines.push(checklist_title.to_string());
                    for item in checklist {
                        lines.push(format!("  ✓ {}", item.primary_text));
                        lines.push(format!("    {}", item.secondary_text));
                    }
                }
            }
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
