use crate::{
    model::{EnumDescriptor, RecordDescriptor},
    types::DataType,
};
use serde::Serialize;

///
/// Shape
///
/// Coarse classification of a reflectable type. Only `Enum` shapes take
/// part in enum conversions and only `Record` shapes map to tables.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Shape {
    /// Primitive scalar (numbers, bool, char).
    Scalar(DataType),
    /// Owned or borrowed string.
    Text,
    Enum(&'static EnumDescriptor),
    Record(RecordDescriptor),
    /// Lists, sets and maps.
    Collection,
}

impl Shape {
    #[must_use]
    pub const fn as_enum(&self) -> Option<&'static EnumDescriptor> {
        match self {
            Self::Enum(desc) => Some(*desc),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_record(self) -> Option<RecordDescriptor> {
        match self {
            Self::Record(desc) => Some(desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Text => "text",
            Self::Enum(_) => "enum",
            Self::Record(_) => "record",
            Self::Collection => "collection",
        }
    }
}
