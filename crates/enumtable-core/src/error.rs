use crate::{
    types::{DataType, IntKind},
    value::ValueConversionError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error. Each engine reports its own error type; this wrapper
/// lets callers that drive both engines use a single `?`.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error(transparent)]
    Table(#[from] TableError),
}

///
/// EnumError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum EnumError {
    #[error("duplicate map key '{key}'")]
    DuplicateMapKey { key: String },

    #[error("type '{ty}' is not an enum kind")]
    NotAnEnumType { ty: &'static str },

    #[error("value type must be one of i8, i16, i32, i64, u8, u16, u32, u64 (got {ty})")]
    UnsupportedValueType { ty: DataType },

    #[error("value {value} is out of range for {kind}")]
    ValueOutOfRange { value: i128, kind: IntKind },
}

///
/// TableError
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum TableError {
    #[error("duplicate column name '{name}'")]
    DuplicateColumnName { name: String },

    #[error("type '{ty}' is not a record ({shape})")]
    InvalidShape {
        ty: &'static str,
        shape: &'static str,
    },

    #[error("row has {found} cells, schema has {expected} columns")]
    RowWidth { expected: usize, found: usize },

    #[error("no column of the table maps to a field of '{ty}'")]
    UnmappableSchema { ty: &'static str },

    #[error("row {row}, column '{column}': {source}")]
    ValueConversion {
        row: usize,
        column: String,
        source: ValueConversionError,
    },
}
