//! Package - arena of modules, headers and classes.
//!
//! A [`Package`] owns everything the binding generator knows about one
//! native library: its modules, the headers they were read from, every
//! bindable class, and the type table used for name resolution.
//!
//! # Storage Model
//!
//! - **Classes**: a flat `Vec<ClassEntry>` indexed by [`ClassId`]. Base
//!   classes are stored as IDs, never as owning references.
//! - **Types**: a [`TypeTable`] mapping names to [`TypeHash`]. Registering a
//!   class or enum also registers its type name.
//!
//! # Inheritance
//!
//! Base links are validated when assigned: a class can never become its own
//! (direct or transitive) ancestor, so walking the chain always terminates.
//!
//! # Thread Safety
//!
//! `Package` is not synchronized. Population and resolution are
//! single-threaded; after every class is finalized the package is read-only
//! and may be shared behind `&`.
//!
//! # Example
//!
//! ```
//! use scriptbind_registry::Package;
//!
//! let mut package = Package::new("Atomic");
//! let core = package.register_module("Core");
//! let object = package.register_class(core, "RefCounted", "Atomic::RefCounted").unwrap();
//! let node = package.register_class(core, "Node", "Atomic::Node").unwrap();
//! package.set_base_class(node, Some(object)).unwrap();
//!
//! assert_eq!(package.base_class_chain(node).unwrap(), vec![object]);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

use scriptbind_core::{
    BindError, BindOptions, ClassId, HeaderId, ModuleId, TypeEntry, TypeEntryKind, TypeHash,
    TypeLookup,
};

use crate::{ClassEntry, HeaderEntry, ModuleEntry, TypeTable};

/// Arena and resolution context for one native library.
pub struct Package {
    name: String,
    pub(crate) options: BindOptions,
    modules: Vec<ModuleEntry>,
    headers: Vec<HeaderEntry>,
    pub(crate) classes: Vec<ClassEntry>,
    class_names: FxHashMap<String, ClassId>,
    pub(crate) types: TypeTable,
}

impl Package {
    /// Create a package with default options and builtin types.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, BindOptions::default())
    }

    pub fn with_options(name: impl Into<String>, options: BindOptions) -> Self {
        Self {
            name: name.into(),
            options,
            modules: Vec::new(),
            headers: Vec::new(),
            classes: Vec::new(),
            class_names: FxHashMap::default(),
            types: TypeTable::with_builtins(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    pub fn register_module(&mut self, name: impl Into<String>) -> ModuleId {
        let id = ModuleId::new(self.modules.len() as u32);
        self.modules.push(ModuleEntry::new(id, name));
        id
    }

    pub fn register_header(
        &mut self,
        module: ModuleId,
        path: impl Into<String>,
    ) -> Result<HeaderId, BindError> {
        let id = HeaderId::new(self.headers.len() as u32);
        self.module_mut(module)?.headers.push(id);
        self.headers.push(HeaderEntry {
            id,
            module,
            path: path.into(),
        });
        Ok(id)
    }

    /// Register a bindable class; its name also becomes a resolvable type.
    pub fn register_class(
        &mut self,
        module: ModuleId,
        name: impl Into<String>,
        native_name: impl Into<String>,
    ) -> Result<ClassId, BindError> {
        let name = name.into();
        self.module(module)?;
        let id = ClassId::new(self.classes.len() as u32);
        self.types
            .register(TypeEntry::new(name.clone(), TypeEntryKind::Class(id)))?;

        self.classes
            .push(ClassEntry::new(id, module, name.clone(), native_name));
        self.class_names.insert(name, id);
        self.module_mut(module)?.classes.push(id);
        tracing::debug!(package = %self.name, class = %id, "registered class");
        Ok(id)
    }

    /// Register a native enum as a resolvable type.
    pub fn register_enum(
        &mut self,
        module: ModuleId,
        name: impl Into<String>,
    ) -> Result<TypeHash, BindError> {
        let name = name.into();
        self.module(module)?;
        let hash = self
            .types
            .register(TypeEntry::new(name.clone(), TypeEntryKind::Enum(module)))?;
        self.module_mut(module)?.enums.push(name);
        Ok(hash)
    }

    /// Make `alias` (e.g. a typedef) resolve to the type named `target`.
    pub fn register_type_alias(
        &mut self,
        alias: impl Into<String>,
        target: &str,
    ) -> Result<TypeHash, BindError> {
        self.types.register_alias(alias, target)
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    pub fn class(&self, id: ClassId) -> Result<&ClassEntry, BindError> {
        self.classes
            .get(id.as_usize())
            .ok_or_else(|| BindError::ClassNotFound(id.to_string()))
    }

    /// Mutable access for the parser. Finalized classes are read-only.
    pub fn class_mut(&mut self, id: ClassId) -> Result<&mut ClassEntry, BindError> {
        let class = self.entry_mut(id)?;
        if class.is_finalized() {
            return Err(BindError::ClassFinalized(class.name.clone()));
        }
        Ok(class)
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.class_names.get(name).copied()
    }

    pub fn class_by_name(&self, name: &str) -> Option<&ClassEntry> {
        self.class_id(name).and_then(|id| self.classes.get(id.as_usize()))
    }

    /// All classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.iter()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn module(&self, id: ModuleId) -> Result<&ModuleEntry, BindError> {
        self.modules
            .get(id.as_usize())
            .ok_or_else(|| BindError::ModuleNotFound(id.to_string()))
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.modules.iter()
    }

    pub fn header(&self, id: HeaderId) -> Result<&HeaderEntry, BindError> {
        self.headers
            .get(id.as_usize())
            .ok_or_else(|| BindError::HeaderNotFound(id.to_string()))
    }

    /// The module that owns a class.
    pub fn module_of(&self, class: ClassId) -> Result<&ModuleEntry, BindError> {
        self.module(self.class(class)?.module())
    }

    /// Resolve a type name within this package.
    pub fn resolve_type(&self, name: &str) -> Option<TypeHash> {
        self.types.resolve(name)
    }

    /// Canonical name of a resolved type.
    pub fn type_name(&self, hash: TypeHash) -> Option<&str> {
        self.types.name_of(hash)
    }

    // ==========================================================================
    // Class Wiring
    // ==========================================================================

    /// Record the header a class was declared in.
    pub fn set_class_header(&mut self, class: ClassId, header: HeaderId) -> Result<(), BindError> {
        self.header(header)?;
        self.class_mut(class)?.set_header(header)
    }

    /// Set (or clear) the immediate base class.
    ///
    /// Rejects any assignment that would make `class` its own ancestor; the
    /// previous link is kept in that case.
    pub fn set_base_class(&mut self, class: ClassId, base: Option<ClassId>) -> Result<(), BindError> {
        self.class(class)?.ensure_declared()?;

        if let Some(base) = base {
            let base_entry = self.class(base)?;
            if base == class || self.base_class_chain(base)?.contains(&class) {
                return Err(BindError::CircularBaseClass {
                    class: self.class(class)?.name.clone(),
                    base: base_entry.name.clone(),
                });
            }
        }

        self.entry_mut(class)?.base_class = base;
        Ok(())
    }

    /// Ancestors of `class`, nearest first, each listed once.
    pub fn base_class_chain(&self, class: ClassId) -> Result<Vec<ClassId>, BindError> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(class);

        let mut current = self.class(class)?.base_class();
        while let Some(base) = current
            && seen.insert(base)
        {
            chain.push(base);
            current = self.class(base)?.base_class();
        }

        Ok(chain)
    }

    /// Check if `ancestor` appears anywhere in `class`'s chain.
    pub fn is_derived_from(&self, class: ClassId, ancestor: ClassId) -> Result<bool, BindError> {
        Ok(self.base_class_chain(class)?.contains(&ancestor))
    }

    pub(crate) fn entry_mut(&mut self, id: ClassId) -> Result<&mut ClassEntry, BindError> {
        self.classes
            .get_mut(id.as_usize())
            .ok_or_else(|| BindError::ClassNotFound(id.to_string()))
    }

    fn module_mut(&mut self, id: ModuleId) -> Result<&mut ModuleEntry, BindError> {
        self.modules
            .get_mut(id.as_usize())
            .ok_or_else(|| BindError::ModuleNotFound(id.to_string()))
    }
}

impl TypeLookup for Package {
    fn resolve_type(&self, name: &str) -> Option<TypeHash> {
        self.types.resolve(name)
    }
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("name", &self.name)
            .field("modules", &self.modules.len())
            .field("headers", &self.headers.len())
            .field("classes", &self.classes.len())
            .field("types", &self.types.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptbind_core::ResolutionPhase;

    fn chain_of_three() -> (Package, ClassId, ClassId, ClassId) {
        let mut package = Package::new("Atomic");
        let core = package.register_module("Core");
        let a = package.register_class(core, "A", "Atomic::A").unwrap();
        let b = package.register_class(core, "B", "Atomic::B").unwrap();
        let c = package.register_class(core, "C", "Atomic::C").unwrap();
        package.set_base_class(b, Some(a)).unwrap();
        package.set_base_class(c, Some(b)).unwrap();
        (package, a, b, c)
    }

    #[test]
    fn new_package_has_builtins_only() {
        let package = Package::new("Atomic");
        assert_eq!(package.name(), "Atomic");
        assert_eq!(package.class_count(), 0);
        assert!(package.resolve_type("float").is_some());
    }

    #[test]
    fn register_class_registers_type() {
        let mut package = Package::new("Atomic");
        let math = package.register_module("Math");
        let id = package.register_class(math, "Vector3", "Atomic::Vector3").unwrap();

        assert_eq!(package.class_id("Vector3"), Some(id));
        assert_eq!(package.resolve_type("const Vector3&"), Some(TypeHash::from_name("Vector3")));
        assert_eq!(package.module_of(id).unwrap().name, "Math");
        assert_eq!(package.module(math).unwrap().classes, vec![id]);
    }

    #[test]
    fn duplicate_class_error() {
        let mut package = Package::new("Atomic");
        let core = package.register_module("Core");
        package.register_class(core, "Node", "Atomic::Node").unwrap();

        assert_eq!(
            package.register_class(core, "Node", "Other::Node"),
            Err(BindError::DuplicateType("Node".into()))
        );
        assert_eq!(package.class_count(), 1);
    }

    #[test]
    fn register_class_unknown_module() {
        let mut package = Package::new("Atomic");
        assert_eq!(
            package.register_class(ModuleId::new(4), "Node", "Atomic::Node"),
            Err(BindError::ModuleNotFound("module_4".into()))
        );
    }

    #[test]
    fn enums_resolve() {
        let mut package = Package::new("Atomic");
        let graphics = package.register_module("Graphics");
        let hash = package.register_enum(graphics, "BlendMode").unwrap();

        assert_eq!(package.resolve_type("BlendMode"), Some(hash));
        assert_eq!(package.module(graphics).unwrap().enums, vec!["BlendMode".to_string()]);
    }

    #[test]
    fn headers_attach_to_classes() {
        let mut package = Package::new("Atomic");
        let scene = package.register_module("Scene");
        let header = package.register_header(scene, "Atomic/Scene/Node.h").unwrap();
        let node = package.register_class(scene, "Node", "Atomic::Node").unwrap();
        package.set_class_header(node, header).unwrap();

        let header_id = package.class(node).unwrap().header().unwrap();
        assert_eq!(package.header(header_id).unwrap().file_name(), "Node.h");
        assert_eq!(
            package.set_class_header(node, HeaderId::new(9)),
            Err(BindError::HeaderNotFound("header_9".into()))
        );
    }

    #[test]
    fn chain_is_nearest_first() {
        let (package, a, b, c) = chain_of_three();

        assert_eq!(package.base_class_chain(c).unwrap(), vec![b, a]);
        assert_eq!(package.base_class_chain(b).unwrap(), vec![a]);
        assert!(package.base_class_chain(a).unwrap().is_empty());
        assert!(package.is_derived_from(c, a).unwrap());
        assert!(!package.is_derived_from(a, c).unwrap());
    }

    #[test]
    fn self_base_rejected() {
        let (mut package, a, _, _) = chain_of_three();

        assert_eq!(
            package.set_base_class(a, Some(a)),
            Err(BindError::CircularBaseClass {
                class: "A".into(),
                base: "A".into(),
            })
        );
        assert_eq!(package.class(a).unwrap().base_class(), None);
    }

    #[test]
    fn transitive_cycle_rejected() {
        let (mut package, a, b, c) = chain_of_three();

        assert_eq!(
            package.set_base_class(a, Some(c)),
            Err(BindError::CircularBaseClass {
                class: "A".into(),
                base: "C".into(),
            })
        );
        // chain still terminates and is unchanged
        assert_eq!(package.base_class_chain(c).unwrap(), vec![b, a]);
    }

    #[test]
    fn rebasing_keeps_chain_consistent() {
        let (mut package, a, b, c) = chain_of_three();
        package.set_base_class(c, Some(a)).unwrap();
        assert_eq!(package.base_class_chain(c).unwrap(), vec![a]);

        package.set_base_class(b, None).unwrap();
        assert!(package.base_class_chain(b).unwrap().is_empty());
    }

    #[test]
    fn unknown_base_rejected() {
        let (mut package, a, _, _) = chain_of_three();
        assert_eq!(
            package.set_base_class(a, Some(ClassId::new(40))),
            Err(BindError::ClassNotFound("class_40".into()))
        );
    }

    #[test]
    fn class_mut_refuses_finalized() {
        let (mut package, a, _, _) = chain_of_three();
        package.entry_mut(a).unwrap().phase = ResolutionPhase::Finalized;

        assert_eq!(
            package.class_mut(a).map(|_| ()),
            Err(BindError::ClassFinalized("A".into()))
        );
        assert!(package.class(a).is_ok());
    }

    #[test]
    fn base_locked_after_declared() {
        let (mut package, a, b, _) = chain_of_three();
        package.entry_mut(b).unwrap().phase = ResolutionPhase::Processed;

        assert_eq!(
            package.set_base_class(b, Some(a)),
            Err(BindError::Sealed {
                class: "B".into(),
                phase: ResolutionPhase::Processed,
            })
        );
    }

    #[test]
    fn debug_impl() {
        let package = Package::new("Atomic");
        let debug = format!("{:?}", package);
        assert!(debug.contains("Package"));
        assert!(debug.contains("Atomic"));
    }
}
