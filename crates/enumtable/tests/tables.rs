use enumtable::{error::TableError, prelude::*, table};
use proptest::prelude::*;

///
/// Mode
///

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
enum Mode {
    #[enum_kind(description = "自动")]
    Auto,
    #[enum_kind(description = "手动")]
    Manual,
}

///
/// Device
///

#[derive(Clone, Debug, Default, PartialEq, TableModel)]
struct Device {
    #[table(name = "编号")]
    id: u32,
    name: String,
    online: bool,
    mode: Option<Mode>,
    #[table(skip)]
    cache: Vec<u8>,
}

///
/// Transport
///

#[derive(Clone, Copy, Debug, Default, EnumKind, Eq, PartialEq)]
#[enum_kind(flags)]
#[enum_kind(member(name = "Http", value = 1))]
#[enum_kind(member(name = "Udp", value = 2))]
struct Transport(u8);

///
/// Link
///

#[derive(Clone, Debug, Default, PartialEq, TableModel)]
struct Link {
    id: u32,
    transport: Transport,
}

fn devices() -> Vec<Device> {
    vec![
        Device {
            id: 1,
            name: "pump".into(),
            online: true,
            mode: Some(Mode::Auto),
            ..Device::default()
        },
        Device {
            id: 2,
            name: "valve".into(),
            ..Device::default()
        },
    ]
}

#[test]
fn schema_from_derived_record() {
    let table = table::from_type::<Device>(Some("Devices")).unwrap();

    assert_eq!(
        table.columns(),
        &[
            Column::new("编号", DataType::Uint32),
            Column::new("name", DataType::Text),
            Column::new("online", DataType::Bool),
            Column::new("mode", DataType::Text),
        ]
    );
    assert_eq!(table.name.as_deref(), Some("Devices"));
}

#[test]
fn records_round_trip_through_a_table() {
    let table = table::to_table(&devices(), None).unwrap();

    assert_eq!(table.cell(0, 3), Some(&Value::Text("Auto".into())));
    assert_eq!(table.cell(1, 3), Some(&Value::Null));

    let back: Vec<Device> = table::to_models(&table).unwrap();
    assert_eq!(back, devices());
}

#[test]
fn flag_fields_without_member_names_round_trip() {
    let links = vec![
        Link {
            id: 1,
            transport: Transport::empty(),
        },
        Link {
            id: 2,
            transport: Transport::HTTP | Transport::UDP,
        },
    ];

    let table = table::to_table(&links, None).unwrap();
    assert_eq!(table.cell(0, 1), Some(&Value::Text("0".into())));
    assert_eq!(table.cell(1, 1), Some(&Value::Text("Http, Udp".into())));

    let back: Vec<Link> = table::to_models(&table).unwrap();
    assert_eq!(back, links);
}

#[test]
fn hand_built_tables_map_leniently() {
    let mut table = table::from_column_names(["编号", "online", "mode", "ignored"], None).unwrap();
    table
        .push_row(vec![
            Value::Text("7".into()),
            Value::Int(1),
            Value::Text("Manual".into()),
            Value::Float(0.5),
        ])
        .unwrap();

    let models: Vec<Device> = table::to_models(&table).unwrap();

    assert_eq!(models[0].id, 7);
    assert!(models[0].online);
    assert_eq!(models[0].mode, Some(Mode::Manual));
    assert!(models[0].name.is_empty());
}

#[test]
fn mapping_errors_name_the_cell() {
    let mut table = table::from_column_names(["mode"], None).unwrap();
    table.push_row(vec![Value::Text("Sideways".into())]).unwrap();

    let err = table::to_models::<Device>(&table).unwrap_err();

    assert!(matches!(
        err,
        TableError::ValueConversion { row: 0, ref column, .. } if column == "mode"
    ));
}

#[test]
fn transpose_turns_columns_into_rows() {
    let table = table::to_table(&devices(), None).unwrap();

    let out = table::transpose(&table, true);

    assert_eq!(out.row_count(), 4);
    assert_eq!(out.column_count(), 3);
    assert_eq!(
        out.rows()[0].iter().cloned().collect::<Vec<_>>(),
        [Value::Text("编号".into()), Value::Uint(1), Value::Uint(2)]
    );
}

proptest! {
    #[test]
    fn double_transpose_without_labels_is_identity(cells in prop::collection::vec(any::<i64>(), 1..12)) {
        let table = table::from_row_array(&cells, None).unwrap();

        let back = table::transpose(&table::transpose(&table, false), false);

        prop_assert_eq!(back.rows(), table.rows());
    }
}
