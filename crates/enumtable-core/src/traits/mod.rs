
use crate::{
    model::{EnumDescriptor, Shape},
    types::{DataType, IntKind},
    value::{Value, ValueConversionError},
};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

// ============================================================================
// REFLECTION
// ============================================================================
//
// These traits stand in for run-time type inspection: every type the
// engines operate on reports a static description of itself.
//

///
/// Reflect
///
/// Reports the coarse shape of a type. Implemented for primitives and
/// common containers here, and for user types by the derives.
///

pub trait Reflect: 'static {
    fn shape() -> Shape;
}

///
/// EnumKind
///
/// A type with a static member table and an integer representation.
///
/// ## Semantics
/// - plain enums only round-trip declared values through `from_raw`
/// - flag sets accept any value representable by their underlying integer
///

pub trait EnumKind: Reflect + Copy + 'static {
    fn descriptor() -> &'static EnumDescriptor;

    fn to_raw(self) -> i128;

    fn from_raw(raw: i128) -> Option<Self>;
}

///
/// IntRepr
///
/// One of the eight integer primitives an enum value may be projected to.
///

pub trait IntRepr: Copy + 'static {
    const KIND: IntKind;

    fn to_raw(self) -> i128;

    fn from_raw(raw: i128) -> Option<Self>;
}

// impl_int_repr
macro_rules! impl_int_repr {
    ( $( $type:ty => $kind:ident ),* $(,)? ) => {
        $(
            impl IntRepr for $type {
                const KIND: IntKind = IntKind::$kind;

                fn to_raw(self) -> i128 {
                    i128::from(self)
                }

                fn from_raw(raw: i128) -> Option<Self> {
                    Self::try_from(raw).ok()
                }
            }
        )*
    };
}

impl_int_repr!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

// ============================================================================
// CELL CONVERSION
// ============================================================================

///
/// FieldValue
///
/// Conversion boundary between a Rust value and a table cell.
///
/// `from_value` is lenient where no information is lost: integers accept
/// integral floats and numeric text, strings accept any non-null cell.
///

pub trait FieldValue: Sized {
    fn data_type() -> DataType;

    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for bool {
    fn data_type() -> DataType {
        DataType::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for String {
    fn data_type() -> DataType {
        DataType::Text
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Text(v) => Some(v.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl FieldValue for f64 {
    fn data_type() -> DataType {
        DataType::Float64
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for f32 {
    fn data_type() -> DataType {
        DataType::Float32
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|v| v as Self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn data_type() -> DataType {
        T::data_type()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ( $data_type:ident ) ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn data_type() -> DataType {
                    DataType::$data_type
                }

                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Bool(v) => Some(Self::from(*v)),
                        other => other.as_i128().and_then(|v| v.try_into().ok()),
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int(Int8),
    i16 => Int(Int16),
    i32 => Int(Int32),
    i64 => Int(Int64),
    u8 => Uint(Uint8),
    u16 => Uint(Uint16),
    u32 => Uint(Uint32),
    u64 => Uint(Uint64),
);

///
/// TableModel
///
/// A record that maps to and from table rows. Fields are addressed by
/// their column name (the declared display name, or the field ident).
///

pub trait TableModel: Reflect + Default {
    /// Read the field mapped to `column`.
    fn get_value(&self, column: &str) -> Option<Value>;

    /// Write the field mapped to `column`.
    ///
    /// Unknown columns are ignored; `Value::Null` leaves the field as is.
    fn set_value(&mut self, column: &str, value: &Value) -> Result<(), ValueConversionError>;
}

// ============================================================================
// REFLECT IMPLS
// ============================================================================

// impl_reflect_scalar
macro_rules! impl_reflect_scalar {
    ( $( $type:ty => $data_type:ident ),* $(,)? ) => {
        $(
            impl Reflect for $type {
                fn shape() -> Shape {
                    Shape::Scalar(DataType::$data_type)
                }
            }
        )*
    };
}

impl_reflect_scalar!(
    bool => Bool,
    char => Text,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Any,
    isize => Any,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    u128 => Any,
    usize => Any,
    f32 => Float32,
    f64 => Float64,
);

impl Reflect for String {
    fn shape() -> Shape {
        Shape::Text
    }
}

impl Reflect for &'static str {
    fn shape() -> Shape {
        Shape::Text
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape() -> Shape {
        T::shape()
    }
}

// impl_reflect_collection
macro_rules! impl_reflect_collection {
    ( $( [$($generic:ident),*] $type:ty ),* $(,)? ) => {
        $(
            impl<$($generic: 'static),*> Reflect for $type {
                fn shape() -> Shape {
                    Shape::Collection
                }
            }
        )*
    };
}

impl_reflect_collection!(
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] [T],
    [T] BTreeSet<T>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [K, V, S] HashMap<K, V, S>,
    [K, V, S] IndexMap<K, V, S>,
);
