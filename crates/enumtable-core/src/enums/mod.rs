//! Enum conversion engine.
//!
//! Converts between enum values, their declared names, their descriptions
//! and their integer values, including comma-separated combinations for
//! flag sets. Metadata and descriptions are cached in an `EnumRegistry`;
//! the free functions and extension traits use the process-wide one.

mod convert;
mod ext;
mod info;
pub mod numeric;
mod registry;


pub use convert::*;
pub use ext::{EnumExt, EnumIntExt, EnumStrExt};
pub use info::EnumTypeInfo;
pub use registry::{EnumRegistry, registry};
