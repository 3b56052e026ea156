use crate::types::DataType;
use serde::Serialize;

///
/// RecordDescriptor
/// Macro-generated description of a record type and its mapped fields.
///
/// Built on demand rather than stored statically so that generic records
/// can report the data type of each instantiation.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RecordDescriptor {
    /// Rust type ident (for diagnostics).
    pub ident: &'static str,
    /// Mapped fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    #[must_use]
    pub fn field(&self, ident: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    /// Column names in field order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldDescriptor::column_name)
    }
}

///
/// FieldDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Rust field ident.
    pub ident: &'static str,
    /// Column name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'static str>,
    pub data_type: DataType,
}

impl FieldDescriptor {
    /// Column this field maps to: the display name if declared, else the ident.
    #[must_use]
    pub fn column_name(&self) -> &'static str {
        self.display_name.unwrap_or(self.ident)
    }
}
