//! iconkit - SVG icon set build pipeline
//!
//! Normalizes authored icon markup and builds the distributable artifacts
//! of an icon set: a symbol sprite (with and without stroke widths), a
//! preview grid, a stroke-width comparison sheet, raster snapshots of
//! both, and per-icon PNG exports.

pub mod build;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod icon;
pub mod normalize;
pub mod output;
pub mod render;

pub use build::{
    build_preview, build_sprite, build_stroke, preview_document, stroke_document, BuiltDocument,
    BuiltSprite, CompositeDocument, GridLayout, Placement, Sprite, SpriteAssembler,
};
pub use discovery::{discover, Manifest, Project};
pub use error::{IconError, Result};
pub use icon::{Icon, IconSet};
pub use normalize::{normalize_file, normalize_files, Normalizer, RewriteRule};
pub use render::{export_pngs, RenderRequest, Renderer, ResvgRenderer, Viewport};
