//! Docstring value extraction for type tables
//!
//! A type table announces itself in its doc comment with the marker
//! sentence `A type table.` and declares its rows in a sentence starting
//! with `Example values are`, for example:
//!
//!     A type table.
//!
//!     Example values are 'foo,' 'bar,' and 'bazz.'
//!
//! Extraction collapses the comment into one logical line per paragraph,
//! finds the declaration line and pulls each single-quoted token out of it.
//! All functions here are pure; the comment text is the only input.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Marker sentence identifying a type-table doc comment.
pub const TYPETABLE_MARKER: &str = "A type table.";

/// Prefix of the line that declares example values.
pub const VALUES_PREFIX: &str = "Example values are";

/// Non-greedy match of one single-quoted token. Each quote pair is
/// matched independently, so `'foo,' 'bar,' 'baz.'` yields three
/// captures rather than one spanning match.
static QUOTED_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"'(.*?)'").unwrap());

/// Check whether a doc comment marks its item as a type table.
///
/// Exact substring containment, anywhere in the text. An item without a
/// doc comment is simply not a type table.
pub fn is_typetable(doc: Option<&str>) -> bool {
    doc.map_or(false, |text| text.contains(TYPETABLE_MARKER))
}

/// Collapse a doc comment into one logical line per paragraph.
///
/// Paragraphs are maximal runs of lines separated by fully blank lines.
/// Every line is trimmed, lines that trim to nothing are dropped, and
/// the survivors are joined with single spaces. Output lines carry no
/// leading or trailing whitespace; reapplying to a returned line yields
/// that line unchanged.
pub fn docstring_lines(doc: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for raw in doc.lines() {
        if raw.is_empty() {
            flush_paragraph(&mut paragraph, &mut lines);
        } else {
            paragraph.push(raw);
        }
    }
    flush_paragraph(&mut paragraph, &mut lines);

    lines
}

/// Join the accumulated paragraph lines into one logical line.
fn flush_paragraph(paragraph: &mut Vec<&str>, out: &mut Vec<String>) {
    let joined = paragraph
        .drain(..)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        out.push(joined);
    }
}

/// Find the declaration line among normalized docstring lines.
///
/// Only the first line starting with [`VALUES_PREFIX`] counts; quoted
/// text on earlier lines is unrelated and ignored. `None` means "no
/// values declared", not an error.
pub fn find_values_line(lines: &[String]) -> Option<&str> {
    lines
        .iter()
        .map(String::as_str)
        .find(|line| line.starts_with(VALUES_PREFIX))
}

/// Pull every single-quoted value out of a declaration line.
///
/// Values keep their case and interior characters; trailing comma and
/// period punctuation is stripped so lists written like
/// `'foo,' 'bar,' and 'baz.'` come out clean. A trailing unmatched
/// quote ends the set of complete pairs and is otherwise ignored.
pub fn values_from_line(line: &str) -> Vec<String> {
    QUOTED_VALUE_REGEX
        .captures_iter(line)
        .map(|cap| {
            cap[1]
                .trim_end_matches(|c| c == ',' || c == '.')
                .to_string()
        })
        .collect()
}

/// Extract declared values from a complete doc comment.
///
/// Composes normalization, declaration-line lookup and quoted-value
/// parsing. A comment without a declaration line yields an empty list.
pub fn extract_values(doc: &str) -> Vec<String> {
    let lines = docstring_lines(doc);
    match find_values_line(&lines) {
        Some(line) => values_from_line(line),
        None => Vec::new(),
    }
}

/// Problems reported by the strict extraction path.
///
/// [`extract_values`] mirrors the historical lenient behavior of
/// producing partial or empty results from malformed comments; the
/// `check` tooling surfaces these conditions instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The doc comment lacks the `A type table.` marker.
    MissingMarker,
    /// The marker is present but no declaration line follows.
    MissingDeclaration,
    /// More than one declaration line (the count is reported).
    MultipleDeclarations(usize),
    /// Odd number of single quotes on the declaration line.
    UnbalancedQuotes(String),
    /// A declaration line that declares nothing.
    NoValues(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MissingMarker => {
                write!(f, "doc comment is not marked with '{TYPETABLE_MARKER}'")
            }
            ExtractError::MissingDeclaration => {
                write!(f, "no line starting with '{VALUES_PREFIX}' found")
            }
            ExtractError::MultipleDeclarations(count) => {
                write!(f, "{count} declaration lines found, expected exactly one")
            }
            ExtractError::UnbalancedQuotes(line) => {
                write!(f, "unbalanced single quotes in declaration: {line}")
            }
            ExtractError::NoValues(line) => {
                write!(f, "declaration line has no quoted values: {line}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Strict variant of [`extract_values`].
///
/// Malformed input becomes a typed error instead of a silent partial
/// result: the marker must be present, exactly one declaration line must
/// exist, its quotes must balance and it must declare at least one value.
pub fn extract_values_checked(doc: &str) -> Result<Vec<String>, ExtractError> {
    if !is_typetable(Some(doc)) {
        return Err(ExtractError::MissingMarker);
    }

    let lines = docstring_lines(doc);
    let declarations: Vec<&str> = lines
        .iter()
        .map(String::as_str)
        .filter(|line| line.starts_with(VALUES_PREFIX))
        .collect();

    let line = match declarations.as_slice() {
        [] => return Err(ExtractError::MissingDeclaration),
        [line] => *line,
        more => return Err(ExtractError::MultipleDeclarations(more.len())),
    };

    if line.matches('\'').count() % 2 != 0 {
        return Err(ExtractError::UnbalancedQuotes(line.to_string()));
    }

    let values = values_from_line(line);
    if values.is_empty() {
        return Err(ExtractError::NoValues(line.to_string()));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_rejects_unmarked_doc() {
        assert!(!is_typetable(Some("Some ordinary helper type.")));
    }

    #[test]
    fn test_detector_rejects_missing_doc() {
        assert!(!is_typetable(None));
    }

    #[test]
    fn test_detector_accepts_marker_mid_paragraph() {
        assert!(is_typetable(Some("Racial categories. A type table. See docs.")));
    }

    #[test]
    fn test_detector_is_case_sensitive() {
        assert!(!is_typetable(Some("a type table.")));
    }

    #[test]
    fn test_single_paragraph_collapses_to_one_line() {
        let lines = docstring_lines("foo\n    bar");
        assert_eq!(lines, vec!["foo bar"]);
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        let lines = docstring_lines("Hello.\n\nfoo\n\nbar");
        assert_eq!(lines, vec!["Hello.", "foo", "bar"]);
    }

    #[test]
    fn test_trailing_whitespace_lines_are_dropped() {
        let lines = docstring_lines("foo\n\nbar\n        ");
        assert_eq!(lines, vec!["foo", "bar"]);
    }

    #[test]
    fn test_runs_of_blank_lines_are_one_boundary() {
        let lines = docstring_lines("foo\n\n\n\nbar");
        assert_eq!(lines, vec!["foo", "bar"]);
    }

    #[test]
    fn test_normalizer_is_idempotent_on_own_output() {
        let lines = docstring_lines("foo\n  bar\n\nbaz");
        for line in &lines {
            assert_eq!(docstring_lines(line), vec![line.clone()]);
        }
    }

    #[test]
    fn test_empty_doc_has_no_lines() {
        assert!(docstring_lines("").is_empty());
        assert!(docstring_lines("\n   \n\n").is_empty());
    }

    #[test]
    fn test_find_values_line_picks_first_match() {
        let lines = docstring_lines(
            "A type table.\n\nExample values are 'a.'\n\nExample values are 'b.'",
        );
        assert_eq!(find_values_line(&lines), Some("Example values are 'a.'"));
    }

    #[test]
    fn test_find_values_line_ignores_earlier_quoted_text() {
        let lines = docstring_lines(
            "Genders, e.g. 'binary' systems.\n\nExample values are 'Male' and 'Female.'",
        );
        assert_eq!(
            find_values_line(&lines),
            Some("Example values are 'Male' and 'Female.'")
        );
    }

    #[test]
    fn test_find_values_line_misses() {
        let lines = docstring_lines("Nothing declared here.");
        assert_eq!(find_values_line(&lines), None);
    }

    #[test]
    fn test_values_from_two_token_list() {
        let values = values_from_line("Example values are 'foo' and 'bar.'");
        assert_eq!(values, vec!["foo", "bar"]);
    }

    #[test]
    fn test_values_from_comma_heavy_list() {
        let values = values_from_line("Example values are 'biz,' 'buz' and 'baz.'");
        assert_eq!(values, vec!["biz", "buz", "baz"]);
    }

    #[test]
    fn test_values_keep_case_and_interior_punctuation() {
        let values = values_from_line("Example values are 'Black/African American,' 'White.'");
        assert_eq!(values, vec!["Black/African American", "White"]);
    }

    #[test]
    fn test_trailing_unmatched_quote_is_ignored() {
        let values = values_from_line("Example values are 'foo,' 'bar,' and 'baz");
        assert_eq!(values, vec!["foo", "bar"]);
    }

    #[test]
    fn test_values_from_line_without_quotes() {
        assert!(values_from_line("Example values are unquoted.").is_empty());
    }

    #[test]
    fn test_extract_values_end_to_end() {
        let doc = "A type table.\n\nExample values are 'foo,' 'bar,' and 'bazz.'";
        assert_eq!(extract_values(doc), vec!["foo", "bar", "bazz"]);
    }

    #[test]
    fn test_extract_values_joins_multiline_declaration() {
        let doc = "A type table.\n\nExample values are 'foo,'\n'bar,' and 'bazz.'";
        assert_eq!(extract_values(doc), vec!["foo", "bar", "bazz"]);
    }

    #[test]
    fn test_extract_values_without_declaration_is_empty() {
        assert!(extract_values("A type table.\n\nNo values here.").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = "A type table.\n\nExample values are 'x' and 'y.'";
        assert_eq!(extract_values(doc), extract_values(doc));
    }

    #[test]
    fn test_checked_requires_marker() {
        let result = extract_values_checked("Example values are 'foo.'");
        assert_eq!(result, Err(ExtractError::MissingMarker));
    }

    #[test]
    fn test_checked_requires_declaration() {
        let result = extract_values_checked("A type table.");
        assert_eq!(result, Err(ExtractError::MissingDeclaration));
    }

    #[test]
    fn test_checked_rejects_multiple_declarations() {
        let doc = "A type table.\n\nExample values are 'a.'\n\nExample values are 'b.'";
        assert_eq!(
            extract_values_checked(doc),
            Err(ExtractError::MultipleDeclarations(2))
        );
    }

    #[test]
    fn test_checked_rejects_unbalanced_quotes() {
        let doc = "A type table.\n\nExample values are 'foo,' and 'bar";
        assert!(matches!(
            extract_values_checked(doc),
            Err(ExtractError::UnbalancedQuotes(_))
        ));
    }

    #[test]
    fn test_checked_rejects_empty_declaration() {
        let doc = "A type table.\n\nExample values are scarce.";
        assert!(matches!(
            extract_values_checked(doc),
            Err(ExtractError::NoValues(_))
        ));
    }

    #[test]
    fn test_checked_accepts_well_formed_doc() {
        let doc = "A type table.\n\nExample values are 'foo' and 'bar.'";
        assert_eq!(extract_values_checked(doc), Ok(vec!["foo".to_string(), "bar".to_string()]));
    }
}
