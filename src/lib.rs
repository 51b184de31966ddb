//! Class metadata model for script binding generators.
//!
//! A header parser registers native classes into a [`Package`]; the
//! resolution pipeline then settles each class's exposed functions,
//! properties and marshalling flags for the emitter.
//!
//! - [`scriptbind_core`] - shared vocabulary (hashes, IDs, entries, errors)
//! - [`scriptbind_registry`] - the package arena and the pipeline
//!
//! ```
//! use scriptbind::prelude::*;
//!
//! let mut package = Package::new("Atomic");
//! let math = package.register_module("Math");
//! let vector = package.register_class(math, "Vector3", "Atomic::Vector3")?;
//!
//! let float = package.resolve_type("float").expect("builtin");
//! let class = package.class_mut(vector)?;
//! class.set_number_array(3, "float")?;
//! class.add_function(FunctionEntry::getter("GetX", float))?;
//! class.add_function(FunctionEntry::setter("SetX", float))?;
//!
//! let output = package.resolve_all();
//! assert!(output.is_success());
//! assert_eq!(package.class(vector)?.property_names(), vec!["X"]);
//! # Ok::<(), BindError>(())
//! ```

pub use scriptbind_core::{
    AccessorRole, BindError, BindOptions, ClassDiagnostic, ClassId, FunctionEntry,
    FunctionId, FunctionOverride, FunctionTraits, HeaderId, ModuleId, Param, PrimitiveKind,
    PropertyEntry, PropertyMap, ResolutionPhase, TypeEntry, TypeEntryKind, TypeHash, TypeLookup,
    STRING_TYPE, normalize_type_name,
};
pub use scriptbind_registry::{
    ClassDump, ClassEntry, HeaderEntry, ModuleEntry, OverloadSelection, Package,
    PropertySynthesizer, ResolutionOutput, Resolver, TypeTable, select_overloads,
};

/// Everything a parser or emitter typically needs.
pub mod prelude {
    pub use scriptbind_core::{
        AccessorRole, BindError, BindOptions, ClassDiagnostic, ClassId, FunctionEntry,
        FunctionId, FunctionOverride, FunctionTraits, Param, ResolutionPhase, TypeHash,
    };
    pub use scriptbind_registry::{ClassEntry, Package, ResolutionOutput, Resolver};
}
