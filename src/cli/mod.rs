pub mod build;
pub mod completions;
pub mod init;
pub mod optimize;
pub mod png;
pub mod preview;
pub mod sprite;
pub mod stroke;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::{discover, Project};
use crate::error::Result;

/// iconkit - SVG icon set build tool
#[derive(Parser, Debug)]
#[command(name = "iconkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: optimize, sprite, preview and stroke
    Build(build::BuildArgs),

    /// Normalize authored icon markup in place
    Optimize(ProjectArgs),

    /// Build the sprite documents
    Sprite(ProjectArgs),

    /// Build the preview grid and its snapshot
    Preview(ProjectArgs),

    /// Build the stroke comparison sheet and its snapshot
    Stroke(ProjectArgs),

    /// Export one PNG per icon
    Png(ProjectArgs),

    /// Initialize an icon project (generates icons.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Arguments shared by commands that operate on a project.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing icons.yaml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl ProjectArgs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Discover the project at `root`.
    pub fn project(&self) -> Result<Project> {
        discover(&self.root)
    }
}
