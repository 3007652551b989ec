//! File system scanner for discovering icon files.
//!
//! Scans a single directory level for `.svg` files. Results are sorted by
//! file name so grid positions are reproducible across runs and platforms.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{IconError, Result};

use super::manifest::Manifest;

/// Scan a directory for icon files, sorted by file name.
///
/// A missing directory or an unreadable entry is an error; icons are never
/// silently skipped.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IconError::Io {
            path: root.to_path_buf(),
            message: "Icon directory does not exist".to_string(),
        });
    }

    let mut icons = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| IconError::Io {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: format!("Failed to scan icon directory: {}", e),
        })?;
        let path = entry.path();

        if !entry.file_type().is_file() || manifest.is_excluded(path) {
            continue;
        }

        if is_icon_file(path) {
            icons.push(path.to_path_buf());
        }
    }

    Ok(icons)
}

/// Check whether a path names an SVG icon.
pub fn is_icon_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Derive an icon identity from its file name.
pub fn icon_name(path: &Path) -> Option<&str> {
    path.file_stem()?.to_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_icon_file() {
        assert!(is_icon_file(Path::new("arrow-left.svg")));
        assert!(is_icon_file(Path::new("icons/ARROW.SVG")));
        assert!(!is_icon_file(Path::new("readme.md")));
        assert!(!is_icon_file(Path::new("svg")));
    }

    #[test]
    fn test_icon_name() {
        assert_eq!(icon_name(Path::new("icons/arrow-left.svg")), Some("arrow-left"));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(dir.path(), &Manifest::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_sorted_by_name() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("zoom.svg"), "<svg />").unwrap();
        fs::write(dir.path().join("alert.svg"), "<svg />").unwrap();
        fs::write(dir.path().join("menu.svg"), "<svg />").unwrap();
        fs::write(dir.path().join("notes.txt"), "not an icon").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default()).unwrap();
        let names: Vec<&str> = result.iter().filter_map(|p| icon_name(p)).collect();

        assert_eq!(names, vec!["alert", "menu", "zoom"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.svg"), "<svg />").unwrap();
        fs::write(dir.path().join("top.svg"), "<svg />").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default()).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].ends_with("top.svg"));
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("keep.svg"), "<svg />").unwrap();
        fs::write(dir.path().join("skip-draft.svg"), "<svg />").unwrap();

        let manifest = Manifest {
            excludes: vec!["*-draft.svg".to_string()],
            ..Default::default()
        };

        let result = scan_directory(dir.path(), &manifest).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].ends_with("keep.svg"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Manifest::default());
        assert!(matches!(result, Err(IconError::Io { .. })));
    }
}
