//! Database-backed enumerations ("type tables")
//!
//!     A type table is a small fixed vocabulary (genders, categories,
//!     statuses) whose members live as rows in a persistence store.
//!     This crate covers the whole lifecycle of such vocabularies:
//!     declaring them, collecting the declarations, materializing them
//!     as rows, and generating fixture files from doc comments.
//!
//! Architecture
//!
//!     - table: explicit builder for a type-table definition (type name,
//!       value columns, derived table name, declared rows)
//!     - registry: owned collection of declarations, handles returned on
//!       registration; nothing is process-global
//!     - install: ValueWriter trait as the seam to the host persistence
//!       layer, with SQL-rendering and in-memory writers built in
//!     - docstring: the extraction core; detects the type-table marker,
//!       normalizes paragraphs and parses quoted value lists
//!     - scan: lifts declarations out of model sources by reading `///`
//!       doc comments, no code loading involved
//!     - fixture: record generation plus a registry of output formats
//!       (JSON, YAML)
//!     - settings: TOML project settings layered over embedded defaults
//!
//!     This is a pure lib: the `typetable` binary owns all shell
//!     concerns (argument parsing, printing, exit codes); no library
//!     code writes to std streams.

pub mod docstring;
pub mod fixture;
pub mod install;
pub mod naming;
pub mod registry;
pub mod scan;
pub mod settings;
pub mod table;

pub use docstring::{extract_values, extract_values_checked, is_typetable, ExtractError};
pub use fixture::{FixtureError, FixtureFormat, FixtureFormatRegistry, FixtureRecord};
pub use install::{install, install_all, InstallError, MemoryWriter, SqlWriter, ValueRecord, ValueWriter};
pub use registry::{TableHandle, TypeTableRegistry};
pub use scan::{scan_project, scan_source, ScanError, ScannedTable};
pub use settings::{Loader, Settings};
pub use table::{TableError, TypeTable, TypeTableBuilder, Value};
