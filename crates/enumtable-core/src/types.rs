use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// DataType
///
/// Semantic type tag carried by table columns and record fields.
/// `Any` marks an untyped column (for example the output of a transpose).
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
pub enum DataType {
    Any,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Text,
}

impl DataType {
    /// Return the integer width for this tag, if it is one of the eight
    /// fixed-width integer kinds.
    #[must_use]
    pub const fn int_kind(self) -> Option<IntKind> {
        match self {
            Self::Int8 => Some(IntKind::I8),
            Self::Int16 => Some(IntKind::I16),
            Self::Int32 => Some(IntKind::I32),
            Self::Int64 => Some(IntKind::I64),
            Self::Uint8 => Some(IntKind::U8),
            Self::Uint16 => Some(IntKind::U16),
            Self::Uint32 => Some(IntKind::U32),
            Self::Uint64 => Some(IntKind::U64),
            Self::Any | Self::Bool | Self::Float32 | Self::Float64 | Self::Text => None,
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.int_kind().is_some()
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, Self::Float32 | Self::Float64)
    }
}

///
/// IntKind
///
/// Closed set of integer widths an enum value can be represented with.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum IntKind {
    #[display("i8")]
    I8,
    #[display("i16")]
    I16,
    #[display("i32")]
    I32,
    #[display("i64")]
    I64,
    #[display("u8")]
    U8,
    #[display("u16")]
    U16,
    #[display("u32")]
    U32,
    #[display("u64")]
    U64,
}

impl IntKind {
    /// All kinds in canonical (signed first, narrow first) order.
    pub const ALL: [Self; 8] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
    ];

    #[must_use]
    pub const fn data_type(self) -> DataType {
        match self {
            Self::I8 => DataType::Int8,
            Self::I16 => DataType::Int16,
            Self::I32 => DataType::Int32,
            Self::I64 => DataType::Int64,
            Self::U8 => DataType::Uint8,
            Self::U16 => DataType::Uint16,
            Self::U32 => DataType::Uint32,
            Self::U64 => DataType::Uint64,
        }
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    /// Smallest representable value.
    #[must_use]
    pub const fn min(self) -> i128 {
        match self {
            Self::I8 => i8::MIN as i128,
            Self::I16 => i16::MIN as i128,
            Self::I32 => i32::MIN as i128,
            Self::I64 => i64::MIN as i128,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => 0,
        }
    }

    /// Largest representable value.
    #[must_use]
    pub const fn max(self) -> i128 {
        match self {
            Self::I8 => i8::MAX as i128,
            Self::I16 => i16::MAX as i128,
            Self::I32 => i32::MAX as i128,
            Self::I64 => i64::MAX as i128,
            Self::U8 => u8::MAX as i128,
            Self::U16 => u16::MAX as i128,
            Self::U32 => u32::MAX as i128,
            Self::U64 => u64::MAX as i128,
        }
    }

    #[must_use]
    pub const fn contains(self, raw: i128) -> bool {
        raw >= self.min() && raw <= self.max()
    }
}
