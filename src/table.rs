//! Declarative type-table definitions
//!
//! A type table is a small enumerated vocabulary backed by persisted
//! rows, standing in for a fixed set of categories. Definitions are
//! explicit: a builder captures the type name, the value columns and the
//! declared rows, and derives the persistence names from the naming
//! conventions in [`crate::naming`].
//!
//! The common case is a single descriptive column derived from the type
//! name (`Gender` gets a `gender` column in a `genders` table). Tables
//! whose rows carry more than the descriptive string declare their
//! columns explicitly; declared value tuples then map onto those columns
//! positionally.

use crate::naming;
use std::fmt;

/// One declared row of a type table: an ordered tuple of column values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    args: Vec<String>,
}

impl Value {
    /// Build a value from an ordered tuple of column arguments.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The column arguments, in declaration order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Errors raised while declaring or registering type tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A value tuple whose arity does not match the declared columns.
    ValueArity {
        table: String,
        expected: usize,
        got: usize,
    },
    /// Two registered tables share a type name.
    DuplicateTable(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ValueArity {
                table,
                expected,
                got,
            } => write!(
                f,
                "table '{table}' declares {expected} columns but a value has {got} arguments"
            ),
            TableError::DuplicateTable(name) => {
                write!(f, "table '{name}' is already registered")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// A fully built type-table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    name: String,
    columns: Vec<String>,
    table_name: String,
    values: Vec<Value>,
}

impl TypeTable {
    /// Start a builder for the given PascalCase type name.
    pub fn builder(name: &str) -> TypeTableBuilder {
        TypeTableBuilder {
            name: name.to_string(),
            columns: Vec::new(),
            plural: None,
            values: Vec::new(),
        }
    }

    /// The PascalCase type name, e.g. `"Gender"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptive column identifying a row (the natural key field).
    pub fn value_field(&self) -> &str {
        &self.columns[0]
    }

    /// All columns, in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The database table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Rows order by the descriptive column.
    pub fn ordering(&self) -> &str {
        self.value_field()
    }

    /// Declared rows, in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// Builder for [`TypeTable`] definitions.
///
/// Without explicit columns the table gets a single value column derived
/// from the type name. The table name is the derived field name
/// pluralized, unless an explicit plural is given.
#[derive(Debug, Clone)]
pub struct TypeTableBuilder {
    name: String,
    columns: Vec<String>,
    plural: Option<String>,
    values: Vec<Value>,
}

impl TypeTableBuilder {
    /// Declare an explicit column. The first declared column is the
    /// descriptive one used for ordering and natural keys.
    pub fn field(mut self, name: &str) -> Self {
        self.columns.push(name.to_string());
        self
    }

    /// Override the derived table name, used verbatim.
    pub fn plural(mut self, plural: &str) -> Self {
        self.plural = Some(plural.to_string());
        self
    }

    /// Declare a row as an ordered tuple of column arguments.
    pub fn value<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.push(Value::new(args));
        self
    }

    /// Finish the definition, validating every value tuple's arity
    /// against the column count.
    pub fn build(self) -> Result<TypeTable, TableError> {
        let derived_field = naming::type_name_to_field(&self.name);
        let table_name = naming::pluralize(&derived_field, self.plural.as_deref());

        let columns = if self.columns.is_empty() {
            vec![derived_field]
        } else {
            self.columns
        };

        for value in &self.values {
            if value.args().len() != columns.len() {
                return Err(TableError::ValueArity {
                    table: self.name,
                    expected: columns.len(),
                    got: value.args().len(),
                });
            }
        }

        Ok(TypeTable {
            name: self.name,
            columns,
            table_name,
            values: self.values,
        })
    }
}
