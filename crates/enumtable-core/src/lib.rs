//! Core runtime for enumtable: static type descriptors, cell values, the
//! enum conversion engine and the in-memory table engine.
//!
//! Derive macros live in `enumtable-derive` and emit `::enumtable::...`
//! paths; the facade crate re-exports this crate under that name.
#![warn(unreachable_pub)]

extern crate self as enumtable;

// public exports are one module level down
pub mod enums;
pub mod error;
pub mod model;
pub mod table;
pub mod traits;
pub mod types;
pub mod value;

pub use error::Error;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Domain vocabulary plus the extension traits that give `str`, integers
/// and enum kinds their conversion methods.
///

pub mod prelude {
    pub use crate::{
        enums::{EnumExt, EnumIntExt, EnumRegistry, EnumStrExt},
        model::{EnumDescriptor, FieldDescriptor, MemberDescriptor, RecordDescriptor, Shape},
        table::{Column, Row, Table, TableSchema},
        traits::{EnumKind, FieldValue, IntRepr, Reflect, TableModel},
        types::{DataType, IntKind},
        value::Value,
    };
}

/// Support items referenced by derive-generated code. Not a stable API.
#[doc(hidden)]
pub mod __private {
    use crate::{
        enums::registry,
        traits::{EnumKind, FieldValue},
        value::{Value, ValueConversionError},
    };

    /// Cell to enum: text resolves by name, then as a number; numbers
    /// resolve by value.
    pub fn enum_from_value<E: EnumKind>(value: &Value) -> Option<E> {
        if let Value::Text(name) = value
            && let Some(resolved) = registry().by_name(name)
        {
            return Some(resolved);
        }

        // numeric text is the string form of values without a member name
        let raw = value.as_i128()?;

        registry().info::<E>().accepts(raw).then(|| E::from_raw(raw)).flatten()
    }

    /// Assign a cell to a field slot; `Null` leaves the slot untouched.
    pub fn assign<T: FieldValue>(slot: &mut T, value: &Value) -> Result<(), ValueConversionError> {
        if value.is_null() {
            return Ok(());
        }

        match T::from_value(value) {
            Some(converted) => {
                *slot = converted;
                Ok(())
            }
            None => Err(ValueConversionError::new(T::data_type(), value.clone())),
        }
    }
}
