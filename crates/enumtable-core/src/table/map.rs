//! Mapping between table rows and typed records.

use crate::{
    error::TableError,
    model::RecordDescriptor,
    table::{Column, Row, Table, TableSchema, build},
    traits::{FieldValue, Reflect, TableModel},
};
use std::any::type_name;
use tracing::debug;

/// Map every row of `table` to a record.
///
/// Each row starts from `T::default()`; matched non-null cells are then
/// assigned field by field. Columns without a field are ignored.
pub fn to_models<T: TableModel>(table: &Table) -> Result<Vec<T>, TableError> {
    let record = record_of::<T>()?;

    // (table column index, column name) for every field the table carries
    let matched: Vec<(usize, &'static str)> = record
        .column_names()
        .filter_map(|name| table.column_index(name).map(|i| (i, name)))
        .collect();

    if matched.is_empty() {
        return Err(TableError::UnmappableSchema {
            ty: type_name::<T>(),
        });
    }

    let mut models = Vec::with_capacity(table.row_count());
    for (row_index, row) in table.rows().iter().enumerate() {
        let mut model = T::default();

        for &(column_index, column) in &matched {
            let Some(value) = row.get(column_index).filter(|v| !v.is_null()) else {
                continue;
            };

            model
                .set_value(column, value)
                .map_err(|source| TableError::ValueConversion {
                    row: row_index,
                    column: column.to_string(),
                    source,
                })?;
        }

        models.push(model);
    }

    debug!(
        ty = record.ident,
        rows = models.len(),
        columns = matched.len(),
        "mapped table rows to records"
    );

    Ok(models)
}

/// Build a table from records, one row per record.
pub fn to_table<'a, T, I>(models: I, table_name: Option<&str>) -> Result<Table, TableError>
where
    T: TableModel + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let record = record_of::<T>()?;
    let mut table = build::from_type::<T>(table_name)?;

    for model in models {
        let cells = record
            .column_names()
            .map(|name| model.get_value(name).unwrap_or_default())
            .collect::<Vec<_>>();
        table.push_row(cells)?;
    }

    Ok(table)
}

/// Single-column table, one row per item.
pub fn from_column_array<C: FieldValue>(
    items: &[C],
    table_name: Option<&str>,
    column_name: Option<&str>,
) -> Result<Table, TableError> {
    let column = Column {
        name: column_name.map(str::to_string),
        data_type: C::data_type(),
    };
    let mut table = Table::new(table_name.map(str::to_string), TableSchema::new(vec![column])?);

    for item in items {
        table.push_row(vec![item.to_value()])?;
    }

    Ok(table)
}

/// Single-row table with one unnamed column per item.
pub fn from_row_array<R: FieldValue>(
    items: &[R],
    table_name: Option<&str>,
) -> Result<Table, TableError> {
    let columns = items.iter().map(|_| Column::unnamed(R::data_type())).collect();
    let mut table = Table::new(table_name.map(str::to_string), TableSchema::new(columns)?);
    table.push_row(Row::new(items.iter().map(FieldValue::to_value).collect()))?;

    Ok(table)
}

fn record_of<T: Reflect>() -> Result<RecordDescriptor, TableError> {
    let shape = T::shape();
    let label = shape.label();

    shape.into_record().ok_or(TableError::InvalidShape {
        ty: type_name::<T>(),
        shape: label,
    })
}
