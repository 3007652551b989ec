//! Rasterization of generated documents.
//!
//! The builders only depend on the [`Renderer`] contract: render the
//! document at this path, at this viewport, into this image. The default
//! implementation is [`ResvgRenderer`]. Requests are always issued one at
//! a time; each opens its own render session and releases it before the
//! next begins.

mod png;
mod raster;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use png::{export_pngs, write_png};
pub use raster::{RenderSession, ResvgRenderer};

/// Page size and device scale used for a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Integer device scale factor (pixels per document unit).
    pub scale: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, scale: u32) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(100, 100, 1)
    }
}

/// A single render: document in, image out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Document to render.
    pub document: PathBuf,
    /// Destination image path.
    pub output: PathBuf,
    pub viewport: Viewport,
    /// Leave the page background transparent instead of white.
    pub transparent: bool,
}

impl RenderRequest {
    pub fn new(document: impl Into<PathBuf>, output: impl Into<PathBuf>, viewport: Viewport) -> Self {
        Self {
            document: document.into(),
            output: output.into(),
            viewport,
            transparent: false,
        }
    }

    /// Request a transparent page background.
    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

/// Renders a document to a raster image.
///
/// Errors must be returned to the caller, never swallowed.
pub trait Renderer {
    fn render(&self, request: &RenderRequest) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, request: &RenderRequest) -> Result<()> {
        (**self).render(request)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Test doubles for the render contract.

    use std::cell::RefCell;

    use super::*;
    use crate::error::IconError;

    /// Records requests and writes a placeholder file for each.
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub requests: RefCell<Vec<RenderRequest>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&self, request: &RenderRequest) -> Result<()> {
            std::fs::write(&request.output, b"png").map_err(|e| {
                IconError::io(&request.output, "Failed to write placeholder", e)
            })?;
            self.requests.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    /// Fails every request.
    pub struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&self, request: &RenderRequest) -> Result<()> {
            Err(IconError::Render {
                path: request.document.clone(),
                message: "rasterization failed".to_string(),
            })
        }
    }
}
