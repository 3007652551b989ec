//! Stroke command implementation.

use crate::build::{build_stroke, BuiltDocument};
use crate::discovery::Project;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::{Renderer, ResvgRenderer};

use super::ProjectArgs;

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let project = args.project()?;
    stroke(&project, printer, &ResvgRenderer::new())?;
    Ok(())
}

pub fn stroke(
    project: &Project,
    printer: &Printer,
    renderer: &dyn Renderer,
) -> Result<BuiltDocument> {
    printer.status(
        "Rendering",
        &format!("stroke variants of {}", project.manifest.stroke.icon),
    );
    let built = build_stroke(project, renderer)?;

    printer.wrote(
        "Wrote",
        &built.path,
        &format!("({})", plural(built.count, "width", "widths")),
    );
    printer.wrote("Captured", &built.snapshot, "");

    Ok(built)
}
