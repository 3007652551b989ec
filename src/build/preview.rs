//! Preview grid: every icon laid out on one canvas.

use crate::discovery::{PreviewConfig, Project};
use crate::error::{IconError, Result};
use crate::icon::IconSet;
use crate::render::Renderer;

use super::{render_snapshot, symbol_template, write_document, BuiltDocument, CompositeDocument, Placement};

/// Lay out every icon in a grid.
///
/// Templates are keyed by the bare icon name and placed in icon-set order.
pub fn preview_document(icons: &IconSet, config: &PreviewConfig) -> Result<CompositeDocument> {
    if icons.is_empty() {
        return Err(IconError::Build {
            message: "No icons to preview".to_string(),
            help: Some("Check that the icons directory contains .svg files".to_string()),
        });
    }

    let layout = config.layout();
    let (width, height) = layout.canvas_size(icons.len())?;
    let mut doc = CompositeDocument::new(width, height, &config.color, &config.background);

    for (icon, cell) in icons.iter().zip(layout.cells(icons.len())) {
        doc.push(
            symbol_template(&icon.markup, &icon.name, None),
            Placement {
                id: icon.name.clone(),
                x: cell.x,
                y: cell.y,
                size: layout.icon_size,
            },
        );
    }

    Ok(doc)
}

/// Scan the published icons, write the preview document and render its
/// snapshot.
pub fn build_preview(project: &Project, renderer: &dyn Renderer) -> Result<BuiltDocument> {
    let config = &project.manifest.preview;
    let icons = project.load_icons()?;
    let doc = preview_document(&icons, config)?;

    let path = project.resolve(&config.path);
    write_document(&path, &doc.to_string())?;
    let snapshot = render_snapshot(renderer, &path, config.viewport)?;

    Ok(BuiltDocument {
        path,
        snapshot,
        width: doc.width,
        height: doc.height,
        count: icons.len(),
    })
}
