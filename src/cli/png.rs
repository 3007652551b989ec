//! PNG export command implementation.

use std::path::PathBuf;

use crate::discovery::Project;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{export_pngs, Renderer, ResvgRenderer};

use super::ProjectArgs;

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let project = args.project()?;
    png(&project, printer, &ResvgRenderer::new())?;
    Ok(())
}

pub fn png(project: &Project, printer: &Printer, renderer: &dyn Renderer) -> Result<Vec<PathBuf>> {
    let config = &project.manifest.png;
    let icons = scan_icons(project)?;
    let out_dir = project.resolve(&config.dir);

    printer.status(
        "Exporting",
        &format!(
            "{} at {}px",
            plural(icons.len(), "icon", "icons"),
            config.size.saturating_mul(config.scale)
        ),
    );
    let written = export_pngs(&icons, &out_dir, config, renderer)?;
    printer.info(
        "Exported",
        &format!("{} to {}", plural(written.len(), "PNG", "PNGs"), display_path(&out_dir)),
    );

    Ok(written)
}

fn scan_icons(project: &Project) -> Result<Vec<PathBuf>> {
    crate::discovery::scan_directory(&project.icons_dir(), &project.manifest)
}
