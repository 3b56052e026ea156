use crate::{types::DataType, value::Value};
use proptest::prelude::*;

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn from_raw_prefers_int_then_uint() {
    assert_eq!(Value::from_raw(-5), Some(Value::Int(-5)));
    assert_eq!(Value::from_raw(5), Some(Value::Int(5)));
    assert_eq!(
        Value::from_raw(i128::from(u64::MAX)),
        Some(Value::Uint(u64::MAX))
    );
    assert_eq!(Value::from_raw(i128::from(u64::MAX) + 1), None);
    assert_eq!(Value::from_raw(i128::from(i64::MIN) - 1), None);
}

#[test]
fn data_type_reports_storage_kind() {
    assert_eq!(Value::Null.data_type(), DataType::Any);
    assert_eq!(Value::Int(1).data_type(), DataType::Int64);
    assert_eq!(Value::Uint(1).data_type(), DataType::Uint64);
    assert_eq!(Value::Float(1.5).data_type(), DataType::Float64);
    assert_eq!(v_txt("x").data_type(), DataType::Text);
}

#[test]
fn as_i128_is_exact() {
    assert_eq!(Value::Int(-3).as_i128(), Some(-3));
    assert_eq!(Value::Float(4.0).as_i128(), Some(4));
    assert_eq!(Value::Float(4.5).as_i128(), None);
    assert_eq!(v_txt(" 12 ").as_i128(), Some(12));
    assert_eq!(v_txt("twelve").as_i128(), None);
    assert_eq!(Value::Bool(true).as_i128(), None);
    assert_eq!(Value::Null.as_i128(), None);
}

#[test]
fn as_bool_accepts_zero_and_one() {
    assert_eq!(Value::Int(0).as_bool(), Some(false));
    assert_eq!(Value::Uint(1).as_bool(), Some(true));
    assert_eq!(Value::Int(2).as_bool(), None);
    assert_eq!(v_txt("True").as_bool(), Some(true));
}

#[test]
fn display_renders_null_as_empty() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(v_txt("姓名").to_string(), "姓名");
    assert_eq!(Value::Bool(false).to_string(), "false");
}

#[test]
fn from_option_maps_none_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(3u8)), Value::Uint(3));
    assert_eq!(Value::from("a"), v_txt("a"));
}

#[test]
fn serde_round_trip_preserves_variant() {
    let cells = vec![Value::Null, Value::Int(-1), Value::Uint(2), v_txt("t")];
    let json = serde_json::to_string(&cells).unwrap();
    let back: Vec<Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, cells);
}

proptest! {
    #[test]
    fn from_raw_preserves_value(raw in any::<i64>()) {
        let value = Value::from_raw(i128::from(raw)).unwrap();
        prop_assert_eq!(value.as_i128(), Some(i128::from(raw)));
    }

    #[test]
    fn integer_text_parses_back(raw in any::<i64>()) {
        let value = Value::Text(raw.to_string());
        prop_assert_eq!(value.as_i128(), Some(i128::from(raw)));
    }
}
