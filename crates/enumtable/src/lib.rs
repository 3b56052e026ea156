//! ## Crate layout
//! - `enums`: enum conversion engine (names, descriptions, values, flags).
//! - `table`: in-memory tables, schema builders, record mapping, transpose.
//! - `model`: static descriptors emitted by the derives.
//! - `traits`: the reflection and cell-conversion seams.
//! - `value`, `types`, `error`: cell values, type tags and error types.
//!
//! `#[derive(EnumKind)]` and `#[derive(TableModel)]` are re-exported at the
//! crate root and from the `prelude`.

pub use enumtable_core::{Error, enums, error, model, table, traits, types, value};
pub use enumtable_derive::{EnumKind, TableModel};

/// Ordered map type returned by the bulk enum views.
pub use indexmap;

#[doc(hidden)]
pub use enumtable_core::__private;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings extension traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{EnumKind, TableModel};
    pub use enumtable_core::{
        enums::{EnumExt as _, EnumIntExt as _, EnumRegistry, EnumStrExt as _},
        model::Shape,
        table::{Column, Row, Table, TableSchema},
        traits::{EnumKind, FieldValue, Reflect, TableModel},
        types::DataType,
        value::Value,
    };
}
