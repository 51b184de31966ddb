//! Entry types stored in a package.
//!
//! - [`FunctionEntry`] - member functions with role flags
//! - [`PropertyEntry`], [`PropertyMap`] - synthesized getter/setter pairs
//! - [`FunctionOverride`] - user-selected overloads
//! - [`TypeEntry`] - resolvable type names

mod function;
mod function_override;
mod property;
mod type_entry;

pub use function::{FunctionEntry, FunctionTraits, Param};
pub use function_override::FunctionOverride;
pub use property::{AccessorRole, PropertyEntry, PropertyMap};
pub use type_entry::{TypeEntry, TypeEntryKind};
