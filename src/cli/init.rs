//! Init command implementation.
//!
//! Writes an `icons.yaml` manifest holding every default setting.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize an icon project by generating an icons.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Directory of authored icons, relative to the project
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Overwrite an existing icons.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(IconError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut manifest = Manifest::default();
    if let Some(source) = args.source {
        manifest.source = source;
    }

    let yaml = serde_yaml::to_string(&manifest).map_err(|e| IconError::Build {
        message: format!("Failed to serialize manifest: {}", e),
        help: None,
    })?;

    fs::write(&manifest_path, yaml)
        .map_err(|e| IconError::io(&manifest_path, "Failed to write manifest", e))?;

    let source_dir = Manifest::resolve(&args.path, &manifest.source);
    match scan_directory(&source_dir, &manifest) {
        Ok(icons) => printer.info(
            "Discovered",
            &format!("{} in {}", plural(icons.len(), "icon", "icons"), display_path(&source_dir)),
        ),
        Err(_) => printer.warning(
            "Missing",
            &format!("source directory {}", display_path(&source_dir)),
        ),
    }

    printer.wrote("Created", &manifest_path, "");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(path: &std::path::Path, force: bool) -> InitArgs {
        InitArgs {
            path: path.to_path_buf(),
            source: None,
            force,
        }
    }

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempdir().unwrap();

        run(args(dir.path(), false), &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join("icons.yaml")).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_init_custom_source() {
        let dir = tempdir().unwrap();
        let mut init = args(dir.path(), false);
        init.source = Some(PathBuf::from("svg"));

        run(init, &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join("icons.yaml")).unwrap();
        assert_eq!(manifest.source, PathBuf::from("svg"));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icons.yaml"), "source: raw\n").unwrap();

        let result = run(args(dir.path(), false), &Printer::plain());
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icons.yaml"), "source: raw\n").unwrap();

        run(args(dir.path(), true), &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join("icons.yaml")).unwrap();
        assert_eq!(manifest.source, PathBuf::from("src/_icons"));
    }
}
