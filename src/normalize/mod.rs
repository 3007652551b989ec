//! Icon markup normalization.
//!
//! Rewrites authored icon markup into a canonical textual form by running
//! an ordered list of [`RewriteRule`]s. The rewrite itself is a pure
//! string transform; [`normalize_file`] and [`normalize_files`] are the thin
//! filesystem boundary that rewrites icons in place.
//!
//! # Example
//!
//! ```
//! use iconkit::normalize::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! let out = normalizer.normalize(r#"<polyline points="0 0 10 10"></polyline>"#);
//! assert_eq!(out, r#"<line x1="0" y1="0" x2="10" y2="10" />"#);
//! ```

mod rules;

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IconError, Result};

pub use rules::{RewriteRule, DEFAULT_RULES};

/// Applies an ordered chain of rewrite rules to icon markup.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<RewriteRule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl Normalizer {
    /// Create a normalizer with a custom rule chain.
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Append a rule to the end of the chain.
    pub fn with_rule(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Rewrite markup into its canonical form.
    ///
    /// Malformed markup is not rejected; rules that fail to match leave the
    /// text unchanged.
    pub fn normalize(&self, markup: &str) -> String {
        let mut current = Cow::Borrowed(markup);

        for rule in &self.rules {
            let rewritten = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            if rewritten != *current {
                debug!(rule = rule.name, "rewrite rule changed markup");
            }
            current = Cow::Owned(rewritten);
        }

        current.into_owned()
    }
}

/// Normalize one icon file in place.
///
/// Returns `true` if the file content changed. Unchanged files are not
/// rewritten.
pub fn normalize_file(path: &Path, normalizer: &Normalizer) -> Result<bool> {
    let source = fs::read_to_string(path)
        .map_err(|e| IconError::io(path, "Failed to read icon", e))?;

    let normalized = normalizer.normalize(&source);
    if normalized == source {
        return Ok(false);
    }

    fs::write(path, normalized).map_err(|e| IconError::io(path, "Failed to write icon", e))?;
    debug!(path = %path.display(), "normalized icon");

    Ok(true)
}

/// Normalize a batch of icon files, returning how many changed.
///
/// Stops at the first filesystem error.
pub fn normalize_files(paths: &[PathBuf], normalizer: &Normalizer) -> Result<usize> {
    let mut changed = 0;
    for path in paths {
        if normalize_file(path, normalizer)? {
            changed += 1;
        }
    }
    Ok(changed)
}
