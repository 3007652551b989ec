//! Artifact builders.
//!
//! Each builder reads the published icon set and writes its own artifacts;
//! builders are independent of one another.

mod document;
mod layout;
mod preview;
mod sprite;
mod stroke;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{IconError, Result};
use crate::render::{RenderRequest, Renderer, Viewport};

pub use document::{symbol_template, CompositeDocument, Placement};
pub use layout::{Cell, GridLayout};
pub use preview::{build_preview, preview_document};
pub use sprite::{
    build_sprite, inner_markup, strip_stroke_width, BuiltSprite, Sprite, SpriteAssembler,
    SYMBOL_ATTRIBUTES,
};
pub use stroke::{build_stroke, stroke_document};

/// A composite document written to disk along with its snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltDocument {
    pub path: PathBuf,
    pub snapshot: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Number of placed references.
    pub count: usize,
}

/// Write a generated document, creating parent directories.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| IconError::io(parent, "Failed to create output directory", e))?;
    }

    fs::write(path, content).map_err(|e| IconError::io(path, "Failed to write document", e))?;
    info!(path = %path.display(), bytes = content.len(), "wrote document");

    Ok(())
}

/// Image path for a document snapshot: the document path with `.png`.
pub fn snapshot_path(document: &Path) -> PathBuf {
    document.with_extension("png")
}

/// Render an opaque snapshot of a written document.
///
/// Failures are logged and returned; a missing snapshot is never silent.
pub fn render_snapshot(
    renderer: &dyn Renderer,
    document: &Path,
    viewport: Viewport,
) -> Result<PathBuf> {
    let output = snapshot_path(document);
    let request = RenderRequest::new(document, &output, viewport);

    if let Err(err) = renderer.render(&request) {
        error!(document = %document.display(), error = %err, "snapshot render failed");
        return Err(err);
    }

    Ok(output)
}
