//! Sprite command implementation.

use crate::build::{build_sprite, BuiltSprite};
use crate::discovery::Project;
use crate::error::Result;
use crate::output::{plural, Printer};

use super::ProjectArgs;

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let project = args.project()?;
    sprite(&project, printer)?;
    Ok(())
}

pub fn sprite(project: &Project, printer: &Printer) -> Result<BuiltSprite> {
    let built = build_sprite(project)?;
    let detail = format!("({})", plural(built.count, "symbol", "symbols"));

    printer.wrote("Wrote", &built.path, &detail);
    printer.wrote("Wrote", &built.nostroke_path, &detail);

    Ok(built)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_sprite_uses_manifest_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        fs::write(
            dir.path().join("icons/x.svg"),
            "<svg viewBox=\"0 0 24 24\">\n  <path d=\"M1 1\" />\n</svg>",
        )
        .unwrap();
        fs::write(
            dir.path().join("icons.yaml"),
            "source: icons\nsprite:\n  path: dist/sprite.svg\n  nostroke_path: dist/sprite-nostroke.svg\n  prefix: ti\n",
        )
        .unwrap();

        run(ProjectArgs::new(dir.path()), &Printer::plain()).unwrap();

        let full = fs::read_to_string(dir.path().join("dist/sprite.svg")).unwrap();
        assert!(full.contains(r#"<symbol id="ti-x""#));
        assert!(dir.path().join("dist/sprite-nostroke.svg").exists());
    }
}
