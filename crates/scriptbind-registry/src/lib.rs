//! Package arena and class resolution pipeline.
//!
//! The header parser populates a [`Package`] with modules, headers and
//! [`ClassEntry`] values. Each class is then resolved in three phases
//! ([`Package::preprocess`], [`Package::process`], [`Package::postprocess`])
//! and [`Resolver`] drives the whole package in base-before-derived order.
//!
//! ```
//! use scriptbind_core::{FunctionEntry, FunctionOverride};
//! use scriptbind_registry::Package;
//!
//! let mut package = Package::new("Atomic");
//! let core = package.register_module("Core");
//! let node = package.register_class(core, "Node", "Atomic::Node").unwrap();
//!
//! let int = package.resolve_type("int").unwrap();
//! let class = package.class_mut(node).unwrap();
//! class.add_function(FunctionEntry::constructor("Node")).unwrap();
//! class.add_function(FunctionEntry::new("Foo")).unwrap();
//! class.add_function(FunctionEntry::new("Foo").with_param_types(&[int])).unwrap();
//! class.add_function_override(FunctionOverride::new("Foo", ["int"])).unwrap();
//!
//! let output = package.resolve_all();
//! assert!(output.is_success());
//! assert_eq!(package.class(node).unwrap().overloads("Foo").count(), 1);
//! ```

mod class;
mod dump;
mod module;
mod package;
mod passes;
mod resolver;
mod type_table;

pub use class::ClassEntry;
pub use dump::ClassDump;
pub use module::{HeaderEntry, ModuleEntry};
pub use package::Package;
pub use passes::{OverloadSelection, PropertySynthesizer, select_overloads};
pub use resolver::{ResolutionOutput, Resolver};
pub use type_table::TypeTable;
