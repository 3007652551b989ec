//! Build command implementation.
//!
//! Runs the whole pipeline: normalize the authored icons, then build the
//! sprite, preview and stroke artifacts from the published set.

use clap::Args;

use crate::discovery::Project;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::render::{Renderer, ResvgRenderer};

use super::ProjectArgs;

/// Run every build step in order
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Leave authored icons untouched
    #[arg(long)]
    pub skip_optimize: bool,

    /// Also export one PNG per icon
    #[arg(long)]
    pub png: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let project = args.project.project()?;
    build(&project, &args, printer, &ResvgRenderer::new())
}

/// Run the pipeline against a discovered project.
///
/// Steps run strictly in sequence; the first failure stops the build.
pub fn build(
    project: &Project,
    args: &BuildArgs,
    printer: &Printer,
    renderer: &dyn Renderer,
) -> Result<()> {
    if !project.has_manifest {
        printer.warning("Defaulting", "no icons.yaml found, using built-in settings");
    }

    if !args.skip_optimize {
        super::optimize::optimize(project, printer)?;
    }

    let sprite = super::sprite::sprite(project, printer)?;
    super::preview::preview(project, printer, renderer)?;
    super::stroke::stroke(project, printer, renderer)?;

    if args.png {
        super::png::png(project, printer, renderer)?;
    }

    printer.status("Finished", &plural(sprite.count, "icon", "icons"));
    Ok(())
}
