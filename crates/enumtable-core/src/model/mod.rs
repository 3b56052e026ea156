//! Runtime type descriptors.
//!
//! Descriptors replace run-time introspection: the derive macros emit one
//! per type, and every conversion in `enums` and `table` reads them instead
//! of inspecting the type itself.
//!
//! In general:
//! - derive attributes define *what is declared*
//! - `model` defines *what the engines read*
mod enums;
mod record;
mod shape;

pub use enums::{EnumDescriptor, MemberDescriptor};
pub use record::{FieldDescriptor, RecordDescriptor};
pub use shape::Shape;
