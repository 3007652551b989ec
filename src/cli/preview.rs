//! Preview command implementation.

use crate::build::{build_preview, BuiltDocument};
use crate::discovery::Project;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::{Renderer, ResvgRenderer};

use super::ProjectArgs;

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let project = args.project()?;
    preview(&project, printer, &ResvgRenderer::new())?;
    Ok(())
}

pub fn preview(
    project: &Project,
    printer: &Printer,
    renderer: &dyn Renderer,
) -> Result<BuiltDocument> {
    printer.status("Rendering", "preview grid");
    let built = build_preview(project, renderer)?;

    printer.wrote(
        "Wrote",
        &built.path,
        &format!(
            "({}, {}x{})",
            plural(built.count, "icon", "icons"),
            built.width,
            built.height
        ),
    );
    printer.wrote("Captured", &built.snapshot, "");

    Ok(built)
}
