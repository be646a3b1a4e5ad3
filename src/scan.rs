//! Doc-comment scanning of project sources
//!
//! The fixture tools never load a project's code; they read the model
//! sources and lift type-table declarations straight out of `///` doc
//! comments. Scanning is line based: a run of doc lines is attached to
//! the next `struct` or `enum` item heading, and items whose doc carries
//! the type-table marker are kept.

use crate::docstring;
use crate::settings::Settings;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A type-table item found in a model source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedTable {
    /// The app the models file belongs to.
    pub app: String,
    /// The item's type name.
    pub type_name: String,
    /// The item's doc comment, with comment prefixes stripped.
    pub doc: String,
}

/// Item heading a doc block can attach to.
static ITEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:struct|enum)\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

/// Strip the doc-comment prefix from a source line.
///
/// One space after `///` belongs to the prefix; anything beyond that is
/// doc indentation and is preserved.
fn doc_line_text(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("///")?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Scan one source file's text for type-table declarations.
///
/// Attributes and blank lines may sit between a doc block and its item.
/// Any other line breaks the attachment and discards the pending block.
pub fn scan_source(app: &str, source: &str) -> Vec<ScannedTable> {
    let mut found = Vec::new();
    let mut doc_lines: Vec<&str> = Vec::new();

    for line in source.lines() {
        if let Some(text) = doc_line_text(line) {
            doc_lines.push(text);
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("#[") {
            continue;
        }

        if let Some(caps) = ITEM_REGEX.captures(line) {
            if !doc_lines.is_empty() {
                let doc = doc_lines.join("\n");
                if docstring::is_typetable(Some(&doc)) {
                    found.push(ScannedTable {
                        app: app.to_string(),
                        type_name: caps[1].to_string(),
                        doc,
                    });
                }
            }
        }
        doc_lines.clear();
    }

    found
}

/// Errors while scanning a project tree.
#[derive(Debug)]
pub enum ScanError {
    /// A models source exists but could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io { source, .. } => Some(source),
        }
    }
}

/// Locate an app's models source under the project root.
///
/// `<app>/models.rs` wins; `<app>/src/models.rs` is the fallback for
/// apps laid out as their own crate.
fn models_path(root: &Path, app: &str) -> Option<PathBuf> {
    let direct = root.join(app).join("models.rs");
    if direct.is_file() {
        return Some(direct);
    }
    let nested = root.join(app).join("src").join("models.rs");
    if nested.is_file() {
        return Some(nested);
    }
    None
}

/// Scan every installed app for type tables.
///
/// Apps are scanned in listed order; an app without a models source is
/// skipped, and the main app is never scanned.
pub fn scan_project(root: &Path, settings: &Settings) -> Result<Vec<ScannedTable>, ScanError> {
    let mut found = Vec::new();
    for app in &settings.apps {
        if settings.main_app.as_deref() == Some(app.as_str()) {
            continue;
        }
        let path = match models_path(root, app) {
            Some(path) => path,
            None => continue,
        };
        let source = fs::read_to_string(&path).map_err(|e| ScanError::Io {
            path: path.clone(),
            source: e,
        })?;
        found.extend(scan_source(app, &source));
    }
    Ok(found)
}
