//! PNG output.
//!
//! Writes captured images and exports one PNG per icon.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::discovery::{icon_name, PngConfig};
use crate::error::{IconError, Result};

use super::{RenderRequest, Renderer, Viewport};

/// Write an image to a PNG file, creating parent directories.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| IconError::io(parent, "Failed to create output directory", e))?;
    }

    image
        .save(path)
        .map_err(|e| IconError::io(path, "Failed to write PNG", e))?;

    Ok(())
}

/// Rasterize every icon file to `{out_dir}/{name}.png`.
///
/// Existing PNGs in `out_dir` are removed first so stale icons never
/// survive a rebuild. Icons are rendered strictly one after another.
pub fn export_pngs(
    icons: &[PathBuf],
    out_dir: &Path,
    config: &PngConfig,
    renderer: &dyn Renderer,
) -> Result<Vec<PathBuf>> {
    clean_pngs(out_dir)?;
    fs::create_dir_all(out_dir)
        .map_err(|e| IconError::io(out_dir, "Failed to create output directory", e))?;

    let viewport = Viewport::new(config.size, config.size, config.scale);
    let mut written = Vec::with_capacity(icons.len());

    for icon in icons {
        let name = icon_name(icon).ok_or_else(|| IconError::Io {
            path: icon.clone(),
            message: "Icon file name is not valid UTF-8".to_string(),
        })?;
        let output = out_dir.join(format!("{}.png", name));

        renderer.render(&RenderRequest::new(icon, &output, viewport).transparent(true))?;
        written.push(output);
    }

    info!(count = written.len(), dir = %out_dir.display(), "exported icon PNGs");
    Ok(written)
}

fn clean_pngs(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    let entries =
        fs::read_dir(dir).map_err(|e| IconError::io(dir, "Failed to read output directory", e))?;

    for entry in entries {
        let path = entry
            .map_err(|e| IconError::io(dir, "Failed to read output directory", e))?
            .path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

        if is_png && path.is_file() {
            fs::remove_file(&path).map_err(|e| IconError::io(&path, "Failed to remove PNG", e))?;
        }
    }

    Ok(())
}
