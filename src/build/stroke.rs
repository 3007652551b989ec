//! Stroke comparison: one icon drawn at several stroke widths.

use crate::discovery::{Project, StrokeConfig};
use crate::error::{IconError, Result};
use crate::icon::Icon;
use crate::render::Renderer;

use super::{render_snapshot, symbol_template, write_document, BuiltDocument, CompositeDocument, Placement};

/// Lay out the reference icon once per stroke width, in a single row.
pub fn stroke_document(icon: &Icon, config: &StrokeConfig) -> Result<CompositeDocument> {
    let layout = config.layout();
    let count = config.widths.len();
    let (width, height) = layout.canvas_size(count)?;
    let mut doc = CompositeDocument::new(width, height, &config.color, &config.background);

    for (stroke, cell) in config.widths.iter().zip(layout.cells(count)) {
        let id = format!("icon-{}", stroke);
        doc.push(
            symbol_template(&icon.markup, &id, Some(stroke.as_str())),
            Placement {
                id,
                x: cell.x,
                y: cell.y,
                size: layout.icon_size,
            },
        );
    }

    Ok(doc)
}

/// Read the reference icon, write the comparison document and render its
/// snapshot.
pub fn build_stroke(project: &Project, renderer: &dyn Renderer) -> Result<BuiltDocument> {
    let config = &project.manifest.stroke;
    let icon_path = project.icons_dir().join(format!("{}.svg", config.icon));

    if !icon_path.is_file() {
        return Err(IconError::Build {
            message: format!("Reference icon not found: {}", icon_path.display()),
            help: Some("Set stroke.icon in icons.yaml to an existing icon name".to_string()),
        });
    }

    let icon = Icon::load(&icon_path)?;
    let doc = stroke_document(&icon, config)?;

    let path = project.resolve(&config.path);
    write_document(&path, &doc.to_string())?;
    let snapshot = render_snapshot(renderer, &path, config.viewport)?;

    Ok(BuiltDocument {
        path,
        snapshot,
        width: doc.width,
        height: doc.height,
        count: config.widths.len(),
    })
}
