use crate::{
    error::TableError,
    table::{self, Column, Row, Table, TableSchema},
    test_fixtures::{Pair, Status, Student},
    types::DataType,
    value::Value,
};
use indexmap::IndexMap;
use std::collections::HashMap;

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn students() -> Vec<Student> {
    vec![Student::new(1, "Ann", 12.0), Student::new(2, "Bo", 13.5)]
}

// ---- schema ------------------------------------------------------------

#[test]
fn column_labels_fall_back_to_position() {
    assert_eq!(Column::new("A", DataType::Text).label(0), "A");
    assert_eq!(Column::unnamed(DataType::Any).label(0), "Column1");
    assert_eq!(Column::unnamed(DataType::Any).label(2), "Column3");
}

#[test]
fn schema_rejects_duplicate_names_but_not_unnamed_columns() {
    let err = TableSchema::new(vec![
        Column::new("A", DataType::Text),
        Column::new("A", DataType::Int32),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateColumnName {
            name: "A".to_string()
        }
    );

    let schema = TableSchema::new(vec![
        Column::unnamed(DataType::Any),
        Column::unnamed(DataType::Any),
    ])
    .unwrap();
    assert_eq!(schema.len(), 2);
}

#[test]
fn push_row_checks_width() {
    let mut table = table::from_column_names(["A", "B"], None).unwrap();

    assert_eq!(
        table.push_row(vec![v_txt("a")]),
        Err(TableError::RowWidth {
            expected: 2,
            found: 1
        })
    );
    table.push_row(vec![v_txt("a"), Value::Null]).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, 0), Some(&v_txt("a")));
    assert_eq!(table.cell(0, 5), None);
}

// ---- builders ----------------------------------------------------------

#[test]
fn from_column_names_creates_text_columns() {
    let table = table::from_column_names(["Id", "Name"], Some("T")).unwrap();

    assert_eq!(table.name.as_deref(), Some("T"));
    assert_eq!(table.column_count(), 2);
    assert!(table.columns().iter().all(|c| c.data_type == DataType::Text));
    assert_eq!(table.column_index("Name"), Some(1));
    assert_eq!(table.row_count(), 0);

    assert!(matches!(
        table::from_column_names(["Id", "Id"], None),
        Err(TableError::DuplicateColumnName { .. })
    ));
}

#[test]
fn from_column_map_keeps_iteration_order() {
    let mut columns = IndexMap::new();
    columns.insert("Z", DataType::Int32);
    columns.insert("A", DataType::Float64);

    let table = table::from_column_map(columns, None).unwrap();

    assert_eq!(table.columns()[0], Column::new("Z", DataType::Int32));
    assert_eq!(table.columns()[1], Column::new("A", DataType::Float64));
    assert!(table.name.is_none());
}

#[test]
fn from_type_uses_display_names_and_field_types() {
    let table = table::from_type::<Student>(Some("Students")).unwrap();
    let names: Vec<_> = table.columns().iter().map(|c| c.label(0)).collect();

    assert_eq!(names, ["标识", "姓名", "age", "status"]);
    assert_eq!(table.columns()[0].data_type, DataType::Int64);
    assert_eq!(table.columns()[2].data_type, DataType::Float64);
    assert_eq!(table.columns()[3].data_type, DataType::Text);
}

#[test]
fn from_type_rejects_non_records() {
    for err in [
        table::from_type::<i32>(None).unwrap_err(),
        table::from_type::<Vec<Student>>(None).unwrap_err(),
        table::from_type::<HashMap<String, Student>>(None).unwrap_err(),
        table::from_type::<Status>(None).unwrap_err(),
        table::from_type::<String>(None).unwrap_err(),
    ] {
        assert!(matches!(err, TableError::InvalidShape { .. }), "{err}");
    }
}

// ---- mapping -----------------------------------------------------------

#[test]
fn to_table_then_to_models_round_trips() {
    let mut models = students();
    models[1].status = Some(Status::Offline);

    let table = table::to_table(&models, Some("Students")).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(1, 3), Some(&v_txt("Offline")));
    assert_eq!(table.cell(0, 3), Some(&Value::Null));

    let back: Vec<Student> = table::to_models(&table).unwrap();
    assert_eq!(back, models);
}

#[test]
fn to_models_skips_unknown_columns_and_nulls() {
    let mut table = table::from_column_names(["姓名", "Extra", "age"], None).unwrap();
    table
        .push_row(vec![v_txt("Ann"), v_txt("x"), v_txt("12.5")])
        .unwrap();
    table
        .push_row(vec![Value::Null, Value::Null, Value::Null])
        .unwrap();

    let models: Vec<Student> = table::to_models(&table).unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "Ann");
    assert!((models[0].age - 12.5).abs() < f64::EPSILON);
    assert_eq!(models[1], Student::default());
}

#[test]
fn to_models_requires_an_overlapping_column() {
    let table = table::from_column_names(["X", "Y"], None).unwrap();

    assert!(matches!(
        table::to_models::<Student>(&table),
        Err(TableError::UnmappableSchema { .. })
    ));
}

#[test]
fn to_models_reports_cell_position_on_conversion_failure() {
    let mut table = table::from_column_names(["标识"], None).unwrap();
    table.push_row(vec![v_txt("1")]).unwrap();
    table.push_row(vec![v_txt("one")]).unwrap();

    match table::to_models::<Student>(&table).unwrap_err() {
        TableError::ValueConversion {
            row,
            column,
            source,
        } => {
            assert_eq!(row, 1);
            assert_eq!(column, "标识");
            assert_eq!(source.expected, DataType::Int64);
            assert_eq!(source.found, v_txt("one"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn to_models_checks_overlap_even_for_empty_tables() {
    let table = table::from_column_names(["A"], None).unwrap();
    assert_eq!(table.row_count(), 0);

    assert!(matches!(
        table::to_models::<Pair<i32>>(&table),
        Err(TableError::UnmappableSchema { .. })
    ));
}

#[test]
fn generic_records_map_per_instantiation() {
    let pairs = vec![Pair { left: 1u8, right: 2 }];
    let table = table::to_table(&pairs, None).unwrap();

    assert_eq!(table.columns()[0].data_type, DataType::Uint8);
    assert_eq!(table::to_models::<Pair<u8>>(&table).unwrap(), pairs);
}

#[test]
fn column_array_builds_one_row_per_item() {
    let table = table::from_column_array(&["A", "B", "C"].map(String::from), None, None).unwrap();

    assert_eq!(table.column_count(), 1);
    assert_eq!(table.columns()[0].label(0), "Column1");
    assert_eq!(table.columns()[0].data_type, DataType::Text);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.cell(2, 0), Some(&v_txt("C")));

    let named = table::from_column_array(&[1i32, 2], Some("T"), Some("N")).unwrap();
    assert_eq!(named.column_index("N"), Some(0));
    assert_eq!(named.columns()[0].data_type, DataType::Int32);
}

#[test]
fn row_array_builds_a_single_row() {
    let table = table::from_row_array(&[1.5f64, 2.5, 3.5], None).unwrap();

    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.columns()[2].label(2), "Column3");
    assert_eq!(table.cell(0, 1), Some(&Value::Float(2.5)));
}

// ---- transpose ---------------------------------------------------------

#[test]
fn transpose_with_column_names_as_data() {
    let mut table = table::from_column_names(["A", "B", "C"], Some("T")).unwrap();
    table.push_row(vec![v_txt("1"), v_txt("2"), v_txt("3")]).unwrap();

    let out = table::transpose(&table, true);

    assert_eq!(out.name.as_deref(), Some("T"));
    assert_eq!(out.column_count(), 2);
    assert_eq!(out.row_count(), 3);
    assert!(
        out.columns()
            .iter()
            .all(|c| c.name.is_none() && c.data_type == DataType::Any)
    );
    assert_eq!(out.rows()[0], Row::new(vec![v_txt("A"), v_txt("1")]));
    assert_eq!(out.rows()[2], Row::new(vec![v_txt("C"), v_txt("3")]));
}

#[test]
fn transpose_without_column_names() {
    let mut table = table::from_column_names(["D", "E"], None).unwrap();
    table.push_row(vec![v_txt("D"), v_txt("E")]).unwrap();
    table.push_row(vec![Value::Int(1), Value::Int(3)]).unwrap();
    table.push_row(vec![Value::Int(2), Value::Int(4)]).unwrap();

    let out = table::transpose(&table, false);

    assert_eq!(out.column_count(), 3);
    assert_eq!(out.row_count(), 2);
    assert_eq!(
        out.rows()[0],
        Row::new(vec![v_txt("D"), Value::Int(1), Value::Int(2)])
    );
    assert_eq!(
        out.rows()[1],
        Row::new(vec![v_txt("E"), Value::Int(3), Value::Int(4)])
    );
}

#[test]
fn transpose_labels_unnamed_columns_by_position() {
    let table = table::from_row_array(&[7i32, 8], None).unwrap();

    let out = table::transpose(&table, true);

    assert_eq!(out.rows()[1], Row::new(vec![v_txt("Column2"), Value::Int(8)]));
}

#[test]
fn transpose_twice_restores_cells() {
    let table = table::from_row_array(&[1i64, 2, 3], None).unwrap();

    let back = table::transpose(&table::transpose(&table, false), false);

    assert_eq!(back.rows(), table.rows());
}

// ---- serde -------------------------------------------------------------

#[test]
fn tables_serialize_round_trip() {
    let table = table::to_table(&students(), Some("Students")).unwrap();

    let json = serde_json::to_string(&table).unwrap();
    let back: Table = serde_json::from_str(&json).unwrap();

    assert_eq!(back, table);
}

#[test]
fn deserializing_duplicate_columns_fails() {
    let json = r#"{"schema":[{"name":"A","data_type":"Text"},{"name":"A","data_type":"Text"}],"rows":[]}"#;

    assert!(serde_json::from_str::<Table>(json).is_err());
}

#[test]
fn deserializing_ragged_rows_fails() {
    let json = r#"{"schema":[{"name":"A","data_type":"Text"},{"name":"B","data_type":"Text"}],"rows":[[{"Text":"x"}]]}"#;

    let err = serde_json::from_str::<Table>(json).unwrap_err();

    assert!(err.to_string().contains("row"), "{err}");
}

#[test]
fn deserializing_keeps_well_formed_rows() {
    let json = r#"{"name":"T","schema":[{"name":"A","data_type":"Text"}],"rows":[[{"Text":"x"}],["Null"]]}"#;

    let table: Table = serde_json::from_str(json).unwrap();

    assert_eq!(table.name.as_deref(), Some("T"));
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(1, 0), Some(&Value::Null));
}
