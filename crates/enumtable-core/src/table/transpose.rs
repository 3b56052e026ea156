//! Row/column transposition.

use crate::{
    table::{Column, Row, Table, TableSchema},
    types::DataType,
    value::Value,
};

/// Swap rows and columns.
///
/// Input column `c` becomes output row `c`. With `column_names_as_data`
/// each output row starts with the input column's label. Output columns
/// are unnamed and untyped; the table name is kept.
#[must_use]
pub fn transpose(table: &Table, column_names_as_data: bool) -> Table {
    let offset = usize::from(column_names_as_data);
    let width = offset + table.row_count();

    let columns = vec![Column::unnamed(DataType::Any); width];
    let mut out = Table::new(table.name.clone(), TableSchema::from_unnamed(columns));

    for (c, column) in table.columns().iter().enumerate() {
        let mut cells = Vec::with_capacity(width);
        if column_names_as_data {
            cells.push(Value::Text(column.label(c)));
        }
        cells.extend(
            table
                .rows()
                .iter()
                .map(|row| row.get(c).cloned().unwrap_or_default()),
        );

        out.push_unchecked(Row::new(cells));
    }

    out
}
