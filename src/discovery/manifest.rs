//! Project manifest (icons.yaml) parsing.
//!
//! The manifest defines where authored and published icons live, where
//! generated artifacts are written, and the layout constants used by the
//! preview and stroke builders. Every field has a default, so an absent
//! or empty manifest describes the standard layout.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::build::GridLayout;
use crate::error::{IconError, Result};
use crate::render::Viewport;

/// Project manifest loaded from icons.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory of authored icons, normalized in place.
    pub source: PathBuf,

    /// Directory of published icons read by the builders.
    /// Defaults to `source` when unset.
    pub icons: Option<PathBuf>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    pub sprite: SpriteConfig,
    pub preview: PreviewConfig,
    pub stroke: StrokeConfig,
    pub png: PngConfig,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src/_icons"),
            icons: None,
            excludes: vec![],
            sprite: SpriteConfig::default(),
            preview: PreviewConfig::default(),
            stroke: StrokeConfig::default(),
            png: PngConfig::default(),
        }
    }
}

/// Sprite output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Full-stroke sprite document.
    pub path: PathBuf,
    /// Sprite document with stroke-width declarations removed.
    pub nostroke_path: PathBuf,
    /// Prefix for symbol identifiers (`{prefix}-{icon}`).
    pub prefix: String,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("tabler-sprite.svg"),
            nostroke_path: PathBuf::from("tabler-sprite-nostroke.svg"),
            prefix: "tabler".to_string(),
        }
    }
}

/// Preview grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub path: PathBuf,
    pub columns: u32,
    pub icon_size: u32,
    pub padding: u32,
    pub outer_padding: u32,
    /// Foreground colour for `currentColor` strokes.
    pub color: String,
    pub background: String,
    pub viewport: Viewport,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".github/icons.svg"),
            columns: 17,
            icon_size: 24,
            padding: 29,
            outer_padding: 5,
            color: default_color(),
            background: default_background(),
            viewport: Viewport::new(100, 100, 1),
        }
    }
}

impl PreviewConfig {
    /// Grid layout described by these settings.
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.columns, self.icon_size, self.padding, self.outer_padding)
    }
}

/// Stroke comparison settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    pub path: PathBuf,
    /// Reference icon identity.
    pub icon: String,
    /// Stroke widths, in display order. Kept as written so identifiers
    /// match the source text (`icon-.5`, not `icon-0.5`).
    pub widths: Vec<String>,
    pub icon_size: u32,
    pub padding: u32,
    pub outer_padding: u32,
    pub color: String,
    pub background: String,
    pub viewport: Viewport,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("icons-stroke.svg"),
            icon: "disabled".to_string(),
            widths: [".5", "1", "1.5", "2", "2.75"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            icon_size: 64,
            padding: 16,
            outer_padding: 5,
            color: default_color(),
            background: default_background(),
            viewport: Viewport::new(100, 100, 1),
        }
    }
}

impl StrokeConfig {
    /// Single-row layout with one column per stroke width.
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(
            self.widths.len() as u32,
            self.icon_size,
            self.padding,
            self.outer_padding,
        )
    }
}

/// Per-icon PNG export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PngConfig {
    pub dir: PathBuf,
    pub size: u32,
    pub scale: u32,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("icons-png"),
            size: 24,
            scale: 10,
        }
    }
}

fn default_color() -> String {
    "#354052".to_string()
}

fn default_background() -> String {
    "#fff".to_string()
}

impl Manifest {
    /// Load manifest from an icons.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IconError::io(path, "Failed to read manifest", e))?;

        Self::parse(&content)
    }

    /// Parse and validate a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null rather than an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check icons.yaml syntax".to_string()),
        })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Check layout constants and colours.
    ///
    /// Every length is bounded so grid and page arithmetic stays within
    /// `u32` for any realistic icon count.
    pub fn validate(&self) -> Result<()> {
        if self.stroke.widths.is_empty() {
            return Err(invalid("stroke.widths must list at least one width"));
        }
        check_layout("preview", &self.preview.layout())?;
        check_layout("stroke", &self.stroke.layout())?;

        let mut seen = BTreeSet::new();
        if let Some(dup) = self.stroke.widths.iter().find(|w| !seen.insert(w.as_str())) {
            return Err(invalid(&format!("stroke.widths lists {} more than once", dup)));
        }

        check_range("png.size", self.png.size, MAX_LENGTH)?;
        check_range("png.scale", self.png.scale, MAX_SCALE)?;
        for (section, viewport) in [
            ("preview", &self.preview.viewport),
            ("stroke", &self.stroke.viewport),
        ] {
            check_range(&format!("{}.viewport.width", section), viewport.width, MAX_VIEWPORT)?;
            check_range(&format!("{}.viewport.height", section), viewport.height, MAX_VIEWPORT)?;
            check_range(&format!("{}.viewport.scale", section), viewport.scale, MAX_SCALE)?;
        }

        for (key, value) in [
            ("preview.color", &self.preview.color),
            ("preview.background", &self.preview.background),
            ("stroke.color", &self.stroke.color),
            ("stroke.background", &self.stroke.background),
        ] {
            if Srgb::<u8>::from_str(value).is_err() {
                return Err(IconError::Build {
                    message: format!("{} is not a hex colour: {}", key, value),
                    help: Some("Use a value like \"#354052\" or \"#fff\"".to_string()),
                });
            }
        }

        Ok(())
    }

    /// Directory the builders scan for published icons.
    pub fn icons_dir(&self) -> &Path {
        self.icons.as_deref().unwrap_or(&self.source)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir))
                    || path.starts_with(&format!("{}/", dir));
            }
            return path.ends_with(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Resolve a manifest-relative path against the project root.
    pub fn resolve(root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

/// Upper bound for grid columns.
const MAX_COLUMNS: u32 = 1024;
/// Upper bound for icon sizes, paddings and PNG sizes, in pixels.
const MAX_LENGTH: u32 = 4096;
/// Upper bound for viewport width and height.
const MAX_VIEWPORT: u32 = 16384;
/// Upper bound for device scale factors.
const MAX_SCALE: u32 = 32;

fn check_layout(section: &str, layout: &GridLayout) -> Result<()> {
    check_range(&format!("{}.columns", section), layout.columns, MAX_COLUMNS)?;
    check_range(&format!("{}.icon_size", section), layout.icon_size, MAX_LENGTH)?;

    if layout.padding > MAX_LENGTH || layout.outer_padding > MAX_LENGTH {
        return Err(invalid(&format!(
            "{} padding must be at most {}",
            section, MAX_LENGTH
        )));
    }
    Ok(())
}

fn check_range(key: &str, value: u32, max: u32) -> Result<()> {
    if value == 0 || value > max {
        return Err(invalid(&format!(
            "{} must be between 1 and {} (got {})",
            key, max, value
        )));
    }
    Ok(())
}

fn invalid(message: &str) -> IconError {
    IconError::Build {
        message: message.to_string(),
        help: Some("Check icons.yaml layout settings".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("source: icons-src").unwrap();

        assert_eq!(manifest.source, PathBuf::from("icons-src"));
        assert_eq!(manifest.icons_dir(), Path::new("icons-src"));
        assert_eq!(manifest.preview.columns, 17);
        assert_eq!(manifest.sprite.prefix, "tabler");
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
source: src/_icons
icons: _site/icons
excludes:
  - "*.bak"
sprite:
  path: dist/sprite.svg
  prefix: ti
preview:
  columns: 10
  padding: 12
  background: "#000000"
  viewport:
    width: 200
    height: 150
    scale: 2
stroke:
  icon: circle
  widths: ["1", "3"]
png:
  dir: out/png
  scale: 4
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.icons_dir(), Path::new("_site/icons"));
        assert_eq!(manifest.excludes, vec!["*.bak"]);
        assert_eq!(manifest.sprite.path, PathBuf::from("dist/sprite.svg"));
        assert_eq!(
            manifest.sprite.nostroke_path,
            PathBuf::from("tabler-sprite-nostroke.svg")
        );
        assert_eq!(manifest.sprite.prefix, "ti");
        assert_eq!(manifest.preview.columns, 10);
        assert_eq!(manifest.preview.icon_size, 24);
        assert_eq!(manifest.preview.padding, 12);
        assert_eq!(manifest.preview.viewport, Viewport::new(200, 150, 2));
        assert_eq!(manifest.stroke.icon, "circle");
        assert_eq!(manifest.stroke.widths, vec!["1", "3"]);
        assert_eq!(manifest.stroke.layout().columns, 2);
        assert_eq!(manifest.png.dir, PathBuf::from("out/png"));
        assert_eq!(manifest.png.size, 24);
        assert_eq!(manifest.png.scale, 4);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Manifest::parse("preview: [not, a, map]");
        assert!(matches!(result, Err(IconError::Parse { .. })));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let result = Manifest::parse("preview:\n  columns: 0");
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_empty_stroke_widths_rejected() {
        let result = Manifest::parse("stroke:\n  widths: []");
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_oversize_icon_size_rejected() {
        let result = Manifest::parse("preview:\n  icon_size: 4000000000\n");
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_oversize_scale_rejected() {
        let result = Manifest::parse("png:\n  scale: 100000\n");
        assert!(matches!(result, Err(IconError::Build { .. })));

        let result = Manifest::parse("stroke:\n  viewport:\n    width: 4000000000\n");
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_limits_fit_the_grid() {
        // The largest accepted preview still lays out a full release
        let yaml = "preview:\n  columns: 1024\n  icon_size: 4096\n  padding: 4096\n  outer_padding: 4096\n";
        let manifest = Manifest::parse(yaml).unwrap();
        assert!(manifest.preview.layout().canvas_size(60_000).is_ok());
    }

    #[test]
    fn test_duplicate_stroke_widths_rejected() {
        let result = Manifest::parse("stroke:\n  widths: [\"1\", \"2\", \"1\"]\n");
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_bad_colour_rejected() {
        let result = Manifest::parse("preview:\n  color: tomato-ish");
        assert!(matches!(result, Err(IconError::Build { .. })));
    }

    #[test]
    fn test_default_stroke_widths() {
        let manifest = Manifest::default();
        assert_eq!(manifest.stroke.widths, vec![".5", "1", "1.5", "2", "2.75"]);
        assert_eq!(manifest.stroke.icon, "disabled");
    }

    #[test]
    fn test_exclude_patterns() {
        let manifest = Manifest {
            excludes: vec![
                "*.bak".to_string(),
                "**/draft/*".to_string(),
                "old/*".to_string(),
            ],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("icons/a.svg.bak")));
        assert!(manifest.is_excluded(Path::new("icons/draft/b.svg")));
        assert!(manifest.is_excluded(Path::new("old/c.svg")));
        assert!(!manifest.is_excluded(Path::new("icons/d.svg")));
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let root = Path::new("/project");
        assert_eq!(
            Manifest::resolve(root, Path::new("icons-png")),
            PathBuf::from("/project/icons-png")
        );
        assert_eq!(
            Manifest::resolve(root, Path::new("/tmp/out")),
            PathBuf::from("/tmp/out")
        );
    }
}
