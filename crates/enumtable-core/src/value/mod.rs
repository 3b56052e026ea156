mod coerce;

#[cfg(test)]
mod tests;

use crate::types::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

pub(crate) use coerce::{parse_bool, parse_integer};

///
/// Value
///
/// One table cell.
///
/// Null   → explicit "no value" marker; mapping leaves the target field at
///          its default.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build the narrowest integer cell for a raw value.
    /// Negative values and anything that fits `i64` become `Int`.
    #[must_use]
    pub fn from_raw(raw: i128) -> Option<Self> {
        if let Ok(v) = i64::try_from(raw) {
            return Some(Self::Int(v));
        }

        u64::try_from(raw).ok().map(Self::Uint)
    }

    ///
    /// INSPECTION
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime type of the cell; `Null` reports `Any`.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Null => DataType::Any,
            Self::Bool(_) => DataType::Bool,
            Self::Int(_) => DataType::Int64,
            Self::Uint(_) => DataType::Uint64,
            Self::Float(_) => DataType::Float64,
            Self::Text(_) => DataType::Text,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Exact integer view of the cell.
    ///
    /// Floats qualify only when finite and integral; text is parsed.
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int(v) => Some(i128::from(*v)),
            Self::Uint(v) => Some(i128::from(*v)),
            Self::Float(v) => coerce::float_to_i128(*v),
            Self::Text(s) => parse_integer(s),
            Self::Bool(_) | Self::Null => None,
        }
    }

    /// Floating point view of the cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Uint(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Null => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(0) | Self::Uint(0) => Some(false),
            Self::Int(1) | Self::Uint(1) => Some(true),
            Self::Text(s) => parse_bool(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

// impl_value_from
macro_rules! impl_value_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float,
    f64 => Float,
    String => Text,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// ValueConversionError
///
/// A present cell could not be converted to the declared field type.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("cannot convert {found:?} to {expected}")]
pub struct ValueConversionError {
    pub expected: DataType,
    pub found: Value,
}

impl ValueConversionError {
    #[must_use]
    pub const fn new(expected: DataType, found: Value) -> Self {
        Self { expected, found }
    }
}
