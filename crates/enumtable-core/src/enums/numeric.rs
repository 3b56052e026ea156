//! Value-type constraint for numeric enum projections.
//!
//! Every projection of an enum value to a caller-chosen type goes through
//! here: the type is checked against the eight integer kinds, then the raw
//! value is range-checked against it. Nothing is ever truncated.

use crate::{
    error::EnumError,
    traits::FieldValue,
    types::{DataType, IntKind},
    value::Value,
};

/// Accept only the eight integer kinds.
pub fn assert_valid(ty: DataType) -> Result<IntKind, EnumError> {
    ty.int_kind()
        .ok_or(EnumError::UnsupportedValueType { ty })
}

/// Range-checked projection of a raw value onto an integer kind.
pub fn convert(raw: i128, kind: IntKind) -> Result<Value, EnumError> {
    if !kind.contains(raw) {
        return Err(EnumError::ValueOutOfRange { value: raw, kind });
    }

    Value::from_raw(raw).ok_or(EnumError::ValueOutOfRange { value: raw, kind })
}

/// Project a raw value onto `V`, validating `V` first.
pub fn project<V: FieldValue>(raw: i128) -> Result<V, EnumError> {
    let kind = assert_valid(V::data_type())?;
    let value = convert(raw, kind)?;

    V::from_value(&value).ok_or(EnumError::ValueOutOfRange { value: raw, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_valid_accepts_every_integer_kind() {
        for kind in IntKind::ALL {
            assert_eq!(assert_valid(kind.data_type()), Ok(kind));
        }
    }

    #[test]
    fn assert_valid_rejects_non_integers_with_stable_message() {
        let err = assert_valid(DataType::Float64).unwrap_err();

        assert_eq!(
            err.to_string(),
            "value type must be one of i8, i16, i32, i64, u8, u16, u32, u64 (got Float64)"
        );
        assert!(assert_valid(DataType::Text).is_err());
        assert!(assert_valid(DataType::Bool).is_err());
    }

    #[test]
    fn convert_never_truncates() {
        assert_eq!(convert(127, IntKind::I8), Ok(Value::Int(127)));
        assert_eq!(
            convert(128, IntKind::I8),
            Err(EnumError::ValueOutOfRange {
                value: 128,
                kind: IntKind::I8
            })
        );
        assert!(convert(-1, IntKind::U64).is_err());
        assert_eq!(
            convert(i128::from(u64::MAX), IntKind::U64),
            Ok(Value::Uint(u64::MAX))
        );
    }

    #[test]
    fn project_reaches_every_width() {
        assert_eq!(project::<i8>(5), Ok(5i8));
        assert_eq!(project::<i64>(-5), Ok(-5i64));
        assert_eq!(project::<u16>(300), Ok(300u16));
        assert_eq!(project::<Option<u32>>(7), Ok(Some(7u32)));
        assert!(project::<u8>(300).is_err());
        assert!(project::<f64>(1).is_err());
    }
}
