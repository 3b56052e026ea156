//! Table schema builders.

use crate::{
    error::TableError,
    table::{Column, Table, TableSchema},
    traits::Reflect,
    types::DataType,
};
use std::any::type_name;

/// Empty table with one `Text` column per name.
pub fn from_column_names<I, S>(names: I, table_name: Option<&str>) -> Result<Table, TableError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    from_column_map(
        names.into_iter().map(|name| (name, DataType::Text)),
        table_name,
    )
}

/// Empty table with the given `(name, type)` columns, in iteration order.
pub fn from_column_map<I, S>(columns: I, table_name: Option<&str>) -> Result<Table, TableError>
where
    I: IntoIterator<Item = (S, DataType)>,
    S: Into<String>,
{
    let columns = columns
        .into_iter()
        .map(|(name, data_type)| Column::new(name, data_type))
        .collect();
    let schema = TableSchema::new(columns)?;

    Ok(Table::new(table_name.map(str::to_string), schema))
}

/// Empty table with one column per mapped field of a record type.
pub fn from_type<T: Reflect>(table_name: Option<&str>) -> Result<Table, TableError> {
    let shape = T::shape();
    let label = shape.label();
    let record = shape.into_record().ok_or(TableError::InvalidShape {
        ty: type_name::<T>(),
        shape: label,
    })?;

    from_column_map(
        record
            .fields
            .iter()
            .map(|f| (f.column_name(), f.data_type)),
        table_name,
    )
}
