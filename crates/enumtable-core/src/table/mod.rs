//! In-memory tables: schema, rows, builders, record mapping and transpose.

pub mod build;
pub mod map;
pub mod transpose;

#[cfg(test)]
mod tests;

use crate::{error::TableError, types::DataType, value::Value};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use build::{from_column_map, from_column_names, from_type};
pub use map::{from_column_array, from_row_array, to_models, to_table};
pub use transpose::transpose;

///
/// Column
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data_type: DataType,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: Some(name.into()),
            data_type,
        }
    }

    #[must_use]
    pub const fn unnamed(data_type: DataType) -> Self {
        Self {
            name: None,
            data_type,
        }
    }

    /// Display label for the column at `index`: its name, or `Column{n}`
    /// (1-based) when unnamed.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Column{}", index + 1))
    }
}

///
/// TableSchema
///
/// Ordered columns. Named columns are unique; unnamed columns never clash.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for name in columns.iter().filter_map(|c| c.name.as_deref()) {
            if !seen.insert(name) {
                return Err(TableError::DuplicateColumnName {
                    name: name.to_string(),
                });
            }
        }

        Ok(Self { columns })
    }

    // unnamed columns cannot collide
    pub(crate) fn from_unnamed(columns: Vec<Column>) -> Self {
        debug_assert!(columns.iter().all(|c| c.name.is_none()));

        Self { columns }
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the column named `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.as_deref() == Some(name))
    }
}

impl TryFrom<Vec<Column>> for TableSchema {
    type Error = TableError;

    fn try_from(columns: Vec<Column>) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

impl From<TableSchema> for Vec<Column> {
    fn from(schema: TableSchema) -> Self {
        schema.columns
    }
}

///
/// Row
///

#[derive(Clone, Debug, Default, Deref, Deserialize, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(#[into_iterator(owned, ref)] Vec<Value>);

impl Row {
    #[must_use]
    pub const fn new(cells: Vec<Value>) -> Self {
        Self(cells)
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Row {
    fn from(cells: Vec<Value>) -> Self {
        Self(cells)
    }
}

///
/// Table
///
/// Named or anonymous table. Every row has exactly one cell per column.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "TableRepr")]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    schema: TableSchema,
    rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub const fn new(name: Option<String>, schema: TableSchema) -> Self {
        Self {
            name,
            schema,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &TableSchema {
        &self.schema
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        self.schema.columns()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.schema.len()
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.index_of(name)
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Append a row; its width must match the schema.
    pub fn push_row(&mut self, row: impl Into<Row>) -> Result<(), TableError> {
        let row = row.into();
        if row.len() != self.column_count() {
            return Err(TableError::RowWidth {
                expected: self.column_count(),
                found: row.len(),
            });
        }
        self.rows.push(row);

        Ok(())
    }

    pub(crate) fn push_unchecked(&mut self, row: Row) {
        debug_assert_eq!(row.len(), self.column_count());

        self.rows.push(row);
    }
}

// deserialized rows go through the same width check as `push_row`
#[derive(Deserialize)]
struct TableRepr {
    #[serde(default)]
    name: Option<String>,
    schema: TableSchema,
    rows: Vec<Row>,
}

impl TryFrom<TableRepr> for Table {
    type Error = TableError;

    fn try_from(repr: TableRepr) -> Result<Self, Self::Error> {
        let mut table = Self::new(repr.name, repr.schema);
        for row in repr.rows {
            table.push_row(row)?;
        }

        Ok(table)
    }
}
