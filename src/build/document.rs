//! Composite documents: symbol templates plus positioned references.
//!
//! Shared by the preview grid and the stroke comparison sheet.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ROOT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<svg\b([^>]*)>").expect("Invalid regex pattern for root element")
});

static ROOT_SIZING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s(?:xmlns|width|height)="[^"]*""#)
        .expect("Invalid regex pattern for root sizing attributes")
});

static ROOT_STROKE_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sstroke-width="[^"]*""#).expect("Invalid regex pattern for stroke width")
});

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("Invalid regex pattern for line breaks"));

static BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("Invalid regex pattern for inter-tag space"));

/// Turn an icon document into a single-line `<symbol>` template.
///
/// The root element is renamed to `symbol` with the given id. Its
/// `xmlns`, `width` and `height` attributes are dropped so the referencing
/// `<use>` controls sizing; the viewBox and presentation attributes stay.
/// When `stroke_width` is given, the root stroke-width is replaced (or
/// added).
pub fn symbol_template(markup: &str, id: &str, stroke_width: Option<&str>) -> String {
    let Some(caps) = ROOT_OPEN.captures(markup) else {
        // Not an svg document; wrap it as-is
        return format!(r#"<symbol id="{}">{}</symbol>"#, id, flatten(markup.trim()));
    };

    let whole = caps.get(0).map_or(0..0, |m| m.range());
    let mut attrs = ROOT_SIZING.replace_all(&caps[1], "").into_owned();

    if let Some(width) = stroke_width {
        let replacement = format!(r#" stroke-width="{}""#, width);
        if ROOT_STROKE_WIDTH.is_match(&attrs) {
            attrs = ROOT_STROKE_WIDTH
                .replace(&attrs, replacement.as_str())
                .into_owned();
        } else {
            attrs.push_str(&replacement);
        }
    }

    let rest = &markup[whole.end..];
    let body = rest.rfind("</svg>").map_or(rest, |end| &rest[..end]);

    format!(
        r#"<symbol id="{}"{}>{}</symbol>"#,
        id,
        attrs.trim_end(),
        flatten(body)
    )
}

/// Collapse markup onto one line.
///
/// Line breaks inside a tag become a single space; whitespace between
/// adjacent tags is removed.
pub(crate) fn flatten(text: &str) -> String {
    let joined = LINE_BREAK.replace_all(text.trim(), " ");
    BETWEEN_TAGS.replace_all(&joined, "><").into_owned()
}

/// A reference to a symbol at a fixed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// A canvas holding symbol templates and the references that place them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDocument {
    pub width: u32,
    pub height: u32,
    /// Default foreground colour for `currentColor` strokes.
    pub color: String,
    /// Fill of the opaque background rectangle.
    pub background: String,
    pub symbols: Vec<String>,
    pub placements: Vec<Placement>,
}

impl CompositeDocument {
    pub fn new(width: u32, height: u32, color: &str, background: &str) -> Self {
        Self {
            width,
            height,
            color: color.to_string(),
            background: background.to_string(),
            symbols: Vec::new(),
            placements: Vec::new(),
        }
    }

    /// Add a template and its reference.
    pub fn push(&mut self, symbol: String, placement: Placement) {
        self.symbols.push(symbol);
        self.placements.push(placement);
    }
}

impl fmt::Display for CompositeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);

        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 {w} {h}" width="{w}" height="{h}" style="color: {}">"#,
            self.color
        )?;
        writeln!(
            f,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"></rect>"#,
            self.background
        )?;

        for symbol in &self.symbols {
            writeln!(f, "\t{}", symbol)?;
        }
        writeln!(f)?;

        for p in &self.placements {
            writeln!(
                f,
                "\t<use xlink:href=\"#{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" />",
                p.id, p.x, p.y, p.size, p.size
            )?;
        }

        write!(f, "\n</svg>")
    }
}
