//! Fixture records for pre-populating type tables
//!
//! A fixture is a structured data file describing records to load into a
//! persistence store. Records name their model as `app.Type`, carry a
//! null primary key (rows are matched by natural key on load, so they
//! stay in sync across reloads) and a map of field values.
//!
//! Serialization goes through a small format registry so callers select
//! the output format by name; JSON and YAML are built in.

use crate::docstring;
use crate::naming;
use crate::table::TypeTable;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// One record of a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRecord {
    /// Model label, `app.Type`.
    pub model: String,
    /// Always null; loading matches rows by natural key instead.
    pub pk: Option<u32>,
    /// Field name to value, sorted by field name.
    pub fields: BTreeMap<String, String>,
}

/// Build fixture records for a declared table.
///
/// Each declared value tuple maps positionally onto the table's columns.
pub fn fixture_records(app: &str, table: &TypeTable) -> Vec<FixtureRecord> {
    let model = format!("{}.{}", app, table.name());
    table
        .values()
        .iter()
        .map(|value| {
            let fields = table
                .columns()
                .iter()
                .cloned()
                .zip(value.args().iter().cloned())
                .collect();
            FixtureRecord {
                model: model.clone(),
                pk: None,
                fields,
            }
        })
        .collect()
}

/// Build fixture records straight from a scanned doc comment.
///
/// The value field is derived from the type name; each extracted value
/// becomes one single-field record. A comment declaring no values yields
/// no records.
pub fn records_from_doc(app: &str, type_name: &str, doc: &str) -> Vec<FixtureRecord> {
    let model = format!("{app}.{type_name}");
    let field = naming::type_name_to_field(type_name);
    docstring::extract_values(doc)
        .into_iter()
        .map(|value| {
            let mut fields = BTreeMap::new();
            fields.insert(field.clone(), value);
            FixtureRecord {
                model: model.clone(),
                pk: None,
                fields,
            }
        })
        .collect()
}

/// Errors produced while serializing fixture records.
#[derive(Debug)]
pub enum FixtureError {
    /// Output format not present in the registry.
    FormatNotFound(String),
    /// Error from the underlying serializer.
    Serialization(String),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FixtureError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FixtureError {}

/// Serializes fixture records into one concrete output format.
pub trait FixtureFormat: Send + Sync {
    /// The name of this format (e.g., "json", "yaml")
    fn name(&self) -> &str;

    /// Serialize records to fixture file text.
    fn serialize(&self, records: &[FixtureRecord]) -> Result<String, FixtureError>;
}

/// Pretty-printed JSON, the default fixture format.
pub struct JsonFormat;

impl FixtureFormat for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, records: &[FixtureRecord]) -> Result<String, FixtureError> {
        serde_json::to_string_pretty(records)
            .map_err(|e| FixtureError::Serialization(e.to_string()))
    }
}

/// YAML output for projects that keep fixtures in YAML.
pub struct YamlFormat;

impl FixtureFormat for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, records: &[FixtureRecord]) -> Result<String, FixtureError> {
        serde_yaml::to_string(records).map_err(|e| FixtureError::Serialization(e.to_string()))
    }
}

/// Registry of fixture output formats, keyed by name.
pub struct FixtureFormatRegistry {
    formats: HashMap<String, Box<dyn FixtureFormat>>,
}

impl FixtureFormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FixtureFormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: FixtureFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn FixtureFormat, FixtureError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FixtureError::FormatNotFound(name.to_string()))
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize records using the named format.
    pub fn serialize(
        &self,
        records: &[FixtureRecord],
        format: &str,
    ) -> Result<String, FixtureError> {
        self.get(format)?.serialize(records)
    }

    /// Create a registry with the built-in formats.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormat);
        registry.register(YamlFormat);
        registry
    }
}

impl Default for FixtureFormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
