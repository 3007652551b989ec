//! The ordered rewrite rules applied by the normalizer.
//!
//! Each rule is a pure text transform. Rules run in the order listed in
//! [`DEFAULT_RULES`]; later rules rely on the shape produced by earlier ones
//! (for example, the indent rule expects self-closing tags to already be
//! unified).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A single named rewrite over icon markup.
#[derive(Clone, Copy)]
pub struct RewriteRule {
    /// Short kebab-case name, used in logs.
    pub name: &'static str,
    /// What the rule guarantees about its output.
    pub description: &'static str,
    apply: fn(&str) -> Cow<'_, str>,
}

impl RewriteRule {
    /// Create a rule from a name, description and transform.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        apply: fn(&str) -> Cow<'_, str>,
    ) -> Self {
        Self {
            name,
            description,
            apply,
        }
    }

    /// Apply the rule, borrowing the input when nothing matched.
    pub fn apply<'a>(&self, markup: &'a str) -> Cow<'a, str> {
        (self.apply)(markup)
    }
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .finish()
    }
}

static CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"></(?:polyline|polygon|line|rect|circle|ellipse|path)>")
        .expect("Invalid regex pattern for closing tags")
});

static CORNER_RADII: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"rx="([^"]+)"\s+ry="([^"]+)""#).expect("Invalid regex pattern for corner radii")
});

static SELF_CLOSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*/+>").expect("Invalid regex pattern for self-closing markers")
});

static ELEMENT_INDENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*<(line|circle|path|polyline|polygon|rect|ellipse)\b")
        .expect("Invalid regex pattern for element indentation")
});

static TWO_POINT_POLYLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"polyline points="\s*(-?[0-9.]+)[\s,]+(-?[0-9.]+)[\s,]+(-?[0-9.]+)[\s,]+(-?[0-9.]+)\s*""#,
    )
    .expect("Invalid regex pattern for two-point polylines")
});

/// An unsigned SVG number: `12`, `12.`, `1.5` or `.5`. A second dot
/// starts the next number, so `.5.5` is two values.
const NUMBER: &str = r"(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)";

static ARC_PARAMS: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"([aA])({n})\s({n})\s({n})\s?([01])\s?([01])\s?(-?{n})\s?(-?{n})",
        n = NUMBER
    );
    Regex::new(&pattern).expect("Invalid regex pattern for arc parameters")
});

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("Invalid regex pattern for blank lines"));

fn unify_closing_tags(markup: &str) -> Cow<'_, str> {
    CLOSING_TAG.replace_all(markup, "/>")
}

fn collapse_corner_radii(markup: &str) -> Cow<'_, str> {
    CORNER_RADII.replace_all(markup, |caps: &Captures| {
        if caps[1] == caps[2] {
            format!(r#"rx="{}""#, &caps[1])
        } else {
            caps[0].to_string()
        }
    })
}

fn space_self_closing(markup: &str) -> Cow<'_, str> {
    SELF_CLOSING.replace_all(markup, " />")
}

fn indent_elements(markup: &str) -> Cow<'_, str> {
    ELEMENT_INDENT.replace_all(markup, "\n  <$1")
}

fn polyline_to_line(markup: &str) -> Cow<'_, str> {
    TWO_POINT_POLYLINE.replace_all(markup, r#"line x1="$1" y1="$2" x2="$3" y2="$4""#)
}

fn space_arc_params(markup: &str) -> Cow<'_, str> {
    ARC_PARAMS.replace_all(markup, "$1$2 $3 $4 $5 $6 $7 $8")
}

fn collapse_blank_lines(markup: &str) -> Cow<'_, str> {
    BLANK_LINES.replace_all(markup, "\n")
}

/// The default rule chain, in application order.
pub const DEFAULT_RULES: &[RewriteRule] = &[
    RewriteRule::new(
        "unify-closing-tags",
        "shape elements never carry a separate closing tag",
        unify_closing_tags,
    ),
    RewriteRule::new(
        "collapse-corner-radii",
        "equal rx/ry pairs are written as a single rx",
        collapse_corner_radii,
    ),
    RewriteRule::new(
        "space-self-closing",
        "every self-closing marker is preceded by exactly one space",
        space_self_closing,
    ),
    RewriteRule::new(
        "indent-elements",
        "shape elements starting a line are indented by two spaces",
        indent_elements,
    ),
    RewriteRule::new(
        "polyline-to-line",
        "two-point polylines become line elements",
        polyline_to_line,
    ),
    RewriteRule::new(
        "space-arc-params",
        "arc parameter groups are single-space separated",
        space_arc_params,
    ),
    RewriteRule::new(
        "collapse-blank-lines",
        "no two consecutive line breaks remain",
        collapse_blank_lines,
    ),
];
