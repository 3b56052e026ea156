use crate::types::IntKind;
use serde::Serialize;

///
/// EnumDescriptor
/// Macro-generated, static description of one enum kind.
///

#[derive(Debug, Eq, PartialEq, Serialize)]
pub struct EnumDescriptor {
    /// Rust type ident (for diagnostics).
    pub ident: &'static str,
    /// Underlying integer representation.
    pub repr: IntKind,
    /// Declared as a combinable bit-flag set.
    pub flags: bool,
    /// Members in declaration order.
    pub members: &'static [MemberDescriptor],
}

impl EnumDescriptor {
    /// First member declared with `name` (case-sensitive).
    #[must_use]
    pub fn member_by_name(&self, name: &str) -> Option<&'static MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    /// First member declared with exactly `value`.
    #[must_use]
    pub fn member_by_value(&self, value: i128) -> Option<&'static MemberDescriptor> {
        self.members.iter().find(|m| m.value == value)
    }

    #[must_use]
    pub fn is_defined(&self, value: i128) -> bool {
        self.member_by_value(value).is_some()
    }
}

///
/// MemberDescriptor
///

#[derive(Debug, Eq, PartialEq, Serialize)]
pub struct MemberDescriptor {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub value: i128,
}

impl MemberDescriptor {
    /// Declared description, falling back to the member name.
    #[must_use]
    pub fn description_or_name(&self) -> &'static str {
        self.description.unwrap_or(self.name)
    }

    /// Value as a bit pattern; negative values carry no flag bits.
    #[must_use]
    pub fn flag_bits(&self) -> Option<u64> {
        u64::try_from(self.value).ok()
    }
}
