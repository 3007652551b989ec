//! Sprite assembly.
//!
//! Bundles every icon into one document of `<symbol>` templates, plus a
//! variant without stroke-width declarations so consumers can set the
//! width from CSS.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::discovery::Project;
use crate::error::Result;
use crate::icon::IconSet;

use super::document::flatten;
use super::write_document;

static ROOT_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<svg\b[^>]*>|</svg>").expect("Invalid regex pattern for root tags")
});

static STROKE_WIDTH_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s*stroke-width\s*=\s*(?:"[^"]*"|'[^']*')"#)
        .expect("Invalid regex pattern for stroke width attributes")
});

static STROKE_WIDTH_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"stroke-width\s*:\s*[^;"']*;?\s*"#)
        .expect("Invalid regex pattern for stroke width properties")
});

/// Presentation attributes every sprite symbol carries.
pub const SYMBOL_ATTRIBUTES: &str = r#"viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

/// The two sprite documents built from one icon set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    /// Every symbol with its stroke width.
    pub full: String,
    /// The same document with all stroke-width declarations removed.
    pub nostroke: String,
}

/// Assembles icon sets into sprite documents.
#[derive(Debug, Clone)]
pub struct SpriteAssembler {
    prefix: String,
}

impl SpriteAssembler {
    /// Create an assembler deriving ids as `{prefix}-{icon}`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Symbol identifier for an icon.
    pub fn symbol_id(&self, name: &str) -> String {
        format!("{}-{}", self.prefix, name)
    }

    /// Build both sprite documents. Output depends only on icon content
    /// and order.
    pub fn assemble(&self, icons: &IconSet) -> Sprite {
        let mut symbols = String::new();

        for icon in icons {
            symbols.push_str(&format!(
                r#"<symbol id="{}" {}>{}</symbol>"#,
                self.symbol_id(&icon.name),
                SYMBOL_ATTRIBUTES,
                inner_markup(&icon.markup)
            ));
        }

        let full = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><defs>{}</defs></svg>"#,
            symbols
        );
        let nostroke = strip_stroke_width(&full);

        Sprite { full, nostroke }
    }
}

impl Default for SpriteAssembler {
    fn default() -> Self {
        Self::new("tabler")
    }
}

/// Paths of the written sprite documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltSprite {
    pub path: PathBuf,
    pub nostroke_path: PathBuf,
    pub count: usize,
}

/// Scan the published icons and write both sprite documents.
pub fn build_sprite(project: &Project) -> Result<BuiltSprite> {
    let config = &project.manifest.sprite;
    let icons = project.load_icons()?;
    let sprite = SpriteAssembler::new(config.prefix.as_str()).assemble(&icons);

    let path = project.resolve(&config.path);
    let nostroke_path = project.resolve(&config.nostroke_path);
    write_document(&path, &sprite.full)?;
    write_document(&nostroke_path, &sprite.nostroke)?;

    Ok(BuiltSprite {
        path,
        nostroke_path,
        count: icons.len(),
    })
}

/// An icon's drawing without its root element, on one line.
pub fn inner_markup(markup: &str) -> String {
    flatten(&ROOT_TAGS.replace_all(markup, ""))
}

/// Remove every stroke-width declaration: attributes in either quote
/// style, then properties inside `style` attributes.
pub fn strip_stroke_width(markup: &str) -> String {
    let without_attrs = STROKE_WIDTH_ATTR.replace_all(markup, "");
    STROKE_WIDTH_STYLE
        .replace_all(&without_attrs, "")
        .into_owned()
}
