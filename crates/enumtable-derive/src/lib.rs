//! Derive macros for enumtable.
//!
//! Generated code refers to `::enumtable::...`, so the derives are meant to
//! be used through the `enumtable` facade crate.

use proc_macro::TokenStream;

mod enum_kind;
mod newtype;
mod ops;
mod table_model;
mod util;

/// Implement `Reflect`, `EnumKind` and `FieldValue`.
///
/// On a fieldless enum, members are the variants; descriptions come from
/// `#[enum_kind(description = "...")]`. On a single-field tuple struct
/// marked `#[enum_kind(flags)]`, members are declared with
/// `#[enum_kind(member(name = "..", value = .., description = ".."))]` and
/// the struct also gets member constants and bit operators.
#[proc_macro_derive(EnumKind, attributes(enum_kind))]
pub fn derive_enum_kind(input: TokenStream) -> TokenStream {
    enum_kind::derive_enum_kind(input.into()).into()
}

/// Implement `Reflect` (record shape) and `TableModel`.
///
/// Field attributes: `#[table(name = "...")]` renames the column,
/// `#[table(skip)]` leaves the field unmapped.
#[proc_macro_derive(TableModel, attributes(table))]
pub fn derive_table_model(input: TokenStream) -> TokenStream {
    table_model::derive_table_model(input.into()).into()
}
