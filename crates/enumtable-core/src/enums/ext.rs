use crate::{
    enums::convert,
    error::EnumError,
    traits::{EnumKind, FieldValue, IntRepr},
};

///
/// EnumExt
///
/// Forward conversions on enum values, backed by the process-wide registry.
///

pub trait EnumExt: EnumKind {
    /// Canonical name (flag combinations as `"A, B"`).
    fn enum_name(self) -> String {
        convert::to_name(self)
    }

    /// Description (flag combinations as `"a,b"`).
    fn enum_desc(self) -> String {
        convert::to_desc(self)
    }

    fn enum_value(self) -> Result<i32, EnumError> {
        convert::to_value(self)
    }

    fn enum_value_as<V: FieldValue>(self) -> Result<V, EnumError> {
        convert::to_value_as(self)
    }
}

impl<E: EnumKind> EnumExt for E {}

///
/// EnumStrExt
///
/// Name and description lookups on string slices:
/// `"Standby".to_enum_by_name::<Status>()`.
///

pub trait EnumStrExt {
    fn to_enum_by_name<E: EnumKind>(&self) -> Option<E>;

    fn to_enum_by_name_or<E: EnumKind>(&self, default: E) -> E;

    fn to_enum_value_by_name<E: EnumKind>(&self) -> Result<Option<i32>, EnumError>;

    fn to_enum_value_by_name_as<E: EnumKind, V: FieldValue>(&self) -> Result<Option<V>, EnumError>;

    fn to_enum_desc_by_name<E: EnumKind>(&self) -> Option<String>;

    fn to_enum_by_desc<E: EnumKind>(&self) -> Option<E>;

    fn to_enum_by_desc_or<E: EnumKind>(&self, default: E) -> E;

    fn to_enum_value_by_desc<E: EnumKind>(&self) -> Result<Option<i32>, EnumError>;

    fn to_enum_name_by_desc<E: EnumKind>(&self) -> Option<String>;
}

impl EnumStrExt for str {
    fn to_enum_by_name<E: EnumKind>(&self) -> Option<E> {
        convert::by_name(self)
    }

    fn to_enum_by_name_or<E: EnumKind>(&self, default: E) -> E {
        convert::by_name_or(self, default)
    }

    fn to_enum_value_by_name<E: EnumKind>(&self) -> Result<Option<i32>, EnumError> {
        convert::value_by_name::<E>(self)
    }

    fn to_enum_value_by_name_as<E: EnumKind, V: FieldValue>(&self) -> Result<Option<V>, EnumError> {
        convert::value_by_name_as::<E, V>(self)
    }

    fn to_enum_desc_by_name<E: EnumKind>(&self) -> Option<String> {
        convert::desc_by_name::<E>(self)
    }

    fn to_enum_by_desc<E: EnumKind>(&self) -> Option<E> {
        convert::by_desc(self)
    }

    fn to_enum_by_desc_or<E: EnumKind>(&self, default: E) -> E {
        convert::by_desc_or(self, default)
    }

    fn to_enum_value_by_desc<E: EnumKind>(&self) -> Result<Option<i32>, EnumError> {
        convert::value_by_desc::<E>(self)
    }

    fn to_enum_name_by_desc<E: EnumKind>(&self) -> Option<String> {
        convert::name_by_desc::<E>(self)
    }
}

///
/// EnumIntExt
///
/// Value lookups on the eight integer primitives: `5u8.to_enum::<Protocol>()`.
///

pub trait EnumIntExt: IntRepr {
    fn to_enum<E: EnumKind>(self) -> Option<E> {
        convert::by_value(self)
    }

    fn to_enum_or<E: EnumKind>(self, default: E) -> E {
        convert::by_value_or(self, default)
    }

    fn to_enum_name<E: EnumKind>(self) -> Option<String> {
        convert::name_by_value::<E, Self>(self)
    }

    fn to_enum_name_or<E: EnumKind>(self, default: &str) -> String {
        convert::name_by_value_or::<E, Self>(self, default)
    }

    fn to_enum_desc<E: EnumKind>(self) -> Option<String> {
        convert::desc_by_value::<E, Self>(self)
    }

    fn to_enum_desc_or<E: EnumKind>(self, default: &str) -> String {
        convert::desc_by_value_or::<E, Self>(self, default)
    }
}

impl<V: IntRepr> EnumIntExt for V {}
