//! SVG rasterization using resvg/usvg.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::debug;

use crate::error::{IconError, Result};

use super::{write_png, RenderRequest, Renderer, Viewport};

/// Renders documents with resvg, one fresh session per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResvgRenderer;

impl ResvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ResvgRenderer {
    fn render(&self, request: &RenderRequest) -> Result<()> {
        let session = RenderSession::open(&request.document)?;
        let image = session.capture(request.viewport, request.transparent)?;
        write_png(&image, &request.output)?;

        debug!(
            document = %session.document().display(),
            output = %request.output.display(),
            width = image.width(),
            height = image.height(),
            "rendered document"
        );
        Ok(())
    }
}

/// A parsed document ready for capture.
///
/// Dropping the session releases the parsed tree; nothing outlives it.
pub struct RenderSession {
    document: PathBuf,
    tree: Tree,
}

impl RenderSession {
    /// Resolve the document to an absolute path and parse it.
    pub fn open(document: &Path) -> Result<Self> {
        let document = fs::canonicalize(document).map_err(|e| IconError::Render {
            path: document.to_path_buf(),
            message: format!("Failed to resolve document: {}", e),
        })?;

        let data = fs::read(&document).map_err(|e| IconError::Render {
            path: document.clone(),
            message: format!("Failed to read document: {}", e),
        })?;

        let options = Options {
            resources_dir: document.parent().map(Path::to_path_buf),
            ..Options::default()
        };

        let tree = Tree::from_data(&data, &options).map_err(|e| IconError::Render {
            path: document.clone(),
            message: format!("Failed to parse document: {}", e),
        })?;

        Ok(Self { document, tree })
    }

    /// Absolute path of the opened document.
    pub fn document(&self) -> &Path {
        &self.document
    }

    /// Document size in user units, rounded up.
    pub fn document_size(&self) -> (u32, u32) {
        let size = self.tree.size();
        (size.width().ceil() as u32, size.height().ceil() as u32)
    }

    /// Capture the full extent of the document.
    ///
    /// The page is at least as large as the viewport and grows to fit the
    /// document. Without `transparent`, the page background is white.
    pub fn capture(&self, viewport: Viewport, transparent: bool) -> Result<RgbaImage> {
        let (doc_width, doc_height) = self.document_size();
        let scale = viewport.scale.max(1);
        let page_width = viewport.width.max(doc_width);
        let page_height = viewport.height.max(doc_height);
        let too_large = || IconError::Render {
            path: self.document.clone(),
            message: format!(
                "Cannot allocate a {}x{} page at scale {}",
                page_width, page_height, scale
            ),
        };

        let width = page_width.checked_mul(scale).ok_or_else(too_large)?;
        let height = page_height.checked_mul(scale).ok_or_else(too_large)?;
        let mut pixmap = Pixmap::new(width, height).ok_or_else(too_large)?;

        if !transparent {
            pixmap.fill(Color::WHITE);
        }

        let transform = Transform::from_scale(scale as f32, scale as f32);
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        Ok(pixmap_to_rgba_image(&pixmap))
    }
}

fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (pixel, out) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        // tiny_skia stores premultiplied alpha
        let c = pixel.demultiply();
        *out = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    img
}
