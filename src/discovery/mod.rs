//! Project discovery for iconkit.
//!
//! Locates the `icons.yaml` manifest (falling back to defaults when absent)
//! and scans the authored and published icon directories it names.
//!
//! # Example
//!
//! ```ignore
//! use iconkit::discovery::discover;
//!
//! let project = discover("./tabler-icons")?;
//! let icons = project.load_icons()?;
//! println!("Found {} icons", icons.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::icon::IconSet;

pub use manifest::{Manifest, PngConfig, PreviewConfig, SpriteConfig, StrokeConfig};
pub use scanner::{icon_name, is_icon_file, scan_directory};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "icons.yaml";

/// A discovered icon project.
#[derive(Debug, Clone)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no icons.yaml found).
    pub manifest: Manifest,

    /// Whether an icons.yaml manifest was found.
    pub has_manifest: bool,
}

impl Project {
    /// Create a project from an explicit manifest.
    pub fn new(root: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Self {
            root: root.into(),
            manifest,
            has_manifest: false,
        }
    }

    /// Resolve a manifest-relative path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        Manifest::resolve(&self.root, path)
    }

    /// Directory of authored icons.
    pub fn source_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.source)
    }

    /// Directory of published icons.
    pub fn icons_dir(&self) -> PathBuf {
        self.resolve(self.manifest.icons_dir())
    }

    /// Authored icon files, sorted by name.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        scan_directory(&self.source_dir(), &self.manifest)
    }

    /// Scan and read the published icon set.
    pub fn load_icons(&self) -> Result<IconSet> {
        let files = scan_directory(&self.icons_dir(), &self.manifest)?;
        IconSet::load(&files)
    }
}

/// Discover an icon project rooted at `root`.
///
/// Loads `icons.yaml` when present; otherwise every setting takes its
/// default.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    Ok(Project {
        root,
        manifest,
        has_manifest,
    })
}
