//! Optimize command implementation.
//!
//! Rewrites authored icons into their canonical form in place.

use crate::discovery::Project;
use crate::error::Result;
use crate::normalize::{normalize_files, Normalizer};
use crate::output::{display_path, plural, Printer};

use super::ProjectArgs;

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let project = args.project()?;
    optimize(&project, printer)?;
    Ok(())
}

/// Normalize every authored icon. Returns how many files were rewritten.
pub fn optimize(project: &Project, printer: &Printer) -> Result<usize> {
    let files = project.source_files()?;
    printer.status(
        "Optimizing",
        &format!(
            "{} in {}",
            plural(files.len(), "icon", "icons"),
            display_path(&project.source_dir())
        ),
    );

    let changed = normalize_files(&files, &Normalizer::default())?;
    printer.info("Rewrote", &plural(changed, "file", "files"));

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_optimize_rewrites_source_icons() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("src/_icons");
        fs::create_dir_all(&source).unwrap();
        fs::write(
            source.join("line.svg"),
            "<svg>\n<polyline points=\"1 2 3 4\"></polyline>\n</svg>",
        )
        .unwrap();
        fs::write(source.join("ok.svg"), "<svg>\n  <path d=\"M1 1\" />\n</svg>").unwrap();

        run(ProjectArgs::new(dir.path()), &Printer::plain()).unwrap();

        assert_eq!(
            fs::read_to_string(source.join("line.svg")).unwrap(),
            "<svg>\n  <line x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\" />\n</svg>"
        );
    }

    #[test]
    fn test_optimize_twice_changes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("src/_icons");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("a.svg"), "<svg>\n<circle r=\"1\"></circle>\n</svg>").unwrap();

        let project = crate::discovery::discover(dir.path()).unwrap();
        let printer = Printer::plain();

        assert_eq!(optimize(&project, &printer).unwrap(), 1);
        assert_eq!(optimize(&project, &printer).unwrap(), 0);
    }

    #[test]
    fn test_optimize_missing_source_dir() {
        let dir = tempdir().unwrap();
        assert!(run(ProjectArgs::new(dir.path()), &Printer::plain()).is_err());
    }
}
