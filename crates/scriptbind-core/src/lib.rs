//! Shared vocabulary for the scriptbind class-metadata model.
//!
//! This crate holds everything the package arena and the resolution
//! pipeline agree on:
//!
//! - [`TypeHash`] - deterministic type identity
//! - [`ClassId`], [`ModuleId`], [`HeaderId`], [`FunctionId`] - arena indices
//! - [`FunctionEntry`], [`PropertyMap`], [`FunctionOverride`], [`TypeEntry`] - entries
//! - [`TypeLookup`] - the type resolution seam used by override parsing
//! - [`BindOptions`] - package-level resolution settings
//! - [`BindError`], [`ClassDiagnostic`] - hard errors and recoverable findings

mod entries;
mod error;
mod ids;
mod lookup;
mod options;
mod phase;
mod primitive_kind;
mod type_hash;

pub use entries::{
    AccessorRole, FunctionEntry, FunctionOverride, FunctionTraits, Param, PropertyEntry,
    PropertyMap, TypeEntry, TypeEntryKind,
};
pub use error::{BindError, ClassDiagnostic};
pub use ids::{ClassId, FunctionId, HeaderId, ModuleId};
pub use lookup::{STRING_TYPE, TypeLookup, normalize_type_name};
pub use options::BindOptions;
pub use phase::ResolutionPhase;
pub use primitive_kind::PrimitiveKind;
pub use type_hash::TypeHash;
