//! Icon and icon set types.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::icon_name;
use crate::error::{IconError, Result};

/// A single icon: a named 24×24 vector drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Identity, taken from the file stem (e.g. `arrow-left`).
    pub name: String,
    /// Full markup of the icon document.
    pub markup: String,
}

impl Icon {
    pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }

    /// Read an icon from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let name = icon_name(path).ok_or_else(|| IconError::Io {
            path: path.to_path_buf(),
            message: "Icon file name is not valid UTF-8".to_string(),
        })?;

        let markup =
            fs::read_to_string(path).map_err(|e| IconError::io(path, "Failed to read icon", e))?;

        Ok(Self::new(name, markup))
    }
}

/// An ordered set of icons with unique names.
///
/// Order is the order icons were supplied in; discovery supplies them
/// sorted by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    icons: Vec<Icon>,
}

impl IconSet {
    /// Build a set, rejecting duplicate names.
    pub fn new(icons: Vec<Icon>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for icon in &icons {
            if !seen.insert(icon.name.as_str()) {
                return Err(IconError::Build {
                    message: format!("Duplicate icon name: {}", icon.name),
                    help: Some("Icon file names must be unique".to_string()),
                });
            }
        }
        Ok(Self { icons })
    }

    /// Read every file into an icon set, in the given order.
    pub fn load(paths: &[PathBuf]) -> Result<Self> {
        let icons = paths
            .iter()
            .map(|p| Icon::load(p))
            .collect::<Result<Vec<_>>>()?;
        Self::new(icons)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Icon> {
        self.icons.iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a Icon;
    type IntoIter = std::slice::Iter<'a, Icon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_icon_set_preserves_order() {
        let set = IconSet::new(vec![Icon::new("b", ""), Icon::new("a", "")]).unwrap();
        let names: Vec<&str> = set.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = IconSet::new(vec![Icon::new("a", "1"), Icon::new("a", "2")]);
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("circle.svg");
        fs::write(&path, "<svg><circle /></svg>").unwrap();

        let set = IconSet::load(&[path]).unwrap();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![&Icon::new("circle", "<svg><circle /></svg>")]
        );
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempdir().unwrap();
        let result = IconSet::load(&[dir.path().join("missing.svg")]);
        assert!(matches!(result, Err(IconError::Io { .. })));
    }
}
