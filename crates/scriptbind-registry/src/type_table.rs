//! Package-wide type table.
//!
//! Maps every resolvable type name (canonical names and native aliases) to a
//! [`TypeHash`], and every hash to its [`TypeEntry`]. Classes and enums are
//! added as they are registered; builtins are present from the start.

use rustc_hash::FxHashMap;

use scriptbind_core::{
    BindError, PrimitiveKind, STRING_TYPE, TypeEntry, TypeEntryKind, TypeHash, TypeLookup,
    normalize_type_name,
};

/// Resolvable type names of a package.
#[derive(Debug, Default)]
pub struct TypeTable {
    /// Entries by identity.
    types: FxHashMap<TypeHash, TypeEntry>,
    /// Canonical names and aliases -> identity.
    names: FxHashMap<String, TypeHash>,
}

impl TypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with primitives and `String` registered.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        table.register_builtins();
        table
    }

    /// Register primitives (with their native aliases) and `String`.
    ///
    /// Already-registered builtins are left alone.
    pub fn register_builtins(&mut self) {
        for kind in PrimitiveKind::ALL {
            let hash = kind.type_hash();
            if self.types.contains_key(&hash) {
                continue;
            }
            self.insert(TypeEntry::primitive(kind));
            for alias in kind.native_aliases() {
                self.names.entry((*alias).to_string()).or_insert(hash);
            }
        }
        if !self.names.contains_key(STRING_TYPE) {
            self.insert(TypeEntry::new(STRING_TYPE, TypeEntryKind::String));
        }
    }

    /// Register a new named type.
    pub fn register(&mut self, entry: TypeEntry) -> Result<TypeHash, BindError> {
        if self.names.contains_key(&entry.name) || self.types.contains_key(&entry.type_hash) {
            return Err(BindError::DuplicateType(entry.name));
        }
        Ok(self.insert(entry))
    }

    /// Make `alias` resolve to the type registered as `target`.
    pub fn register_alias(&mut self, alias: impl Into<String>, target: &str) -> Result<TypeHash, BindError> {
        let alias = alias.into();
        if self.names.contains_key(&alias) {
            return Err(BindError::DuplicateType(alias));
        }
        let hash = self
            .resolve(target)
            .ok_or_else(|| BindError::TypeNotFound(target.to_string()))?;
        self.names.insert(alias, hash);
        Ok(hash)
    }

    /// Resolve a name, ignoring `const`, `&` and `*` qualifiers.
    pub fn resolve(&self, name: &str) -> Option<TypeHash> {
        self.names.get(normalize_type_name(name)).copied()
    }

    pub fn get(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    /// Canonical name of a type.
    pub fn name_of(&self, hash: TypeHash) -> Option<&str> {
        self.types.get(&hash).map(|e| e.name.as_str())
    }

    /// Number of distinct types (aliases not counted).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn insert(&mut self, entry: TypeEntry) -> TypeHash {
        let hash = entry.type_hash;
        self.names.insert(entry.name.clone(), hash);
        self.types.insert(hash, entry);
        hash
    }
}

impl TypeLookup for TypeTable {
    fn resolve_type(&self, name: &str) -> Option<TypeHash> {
        self.resolve(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptbind_core::{ClassId, ModuleId};

    #[test]
    fn builtins_registered() {
        let table = TypeTable::with_builtins();
        assert_eq!(table.len(), 13); // 12 primitives + String

        assert_eq!(table.resolve("int"), Some(PrimitiveKind::Int32.type_hash()));
        assert_eq!(table.resolve("float"), Some(PrimitiveKind::Float.type_hash()));
        assert_eq!(table.resolve("String"), Some(TypeHash::from_name("String")));
    }

    #[test]
    fn native_aliases_resolve_to_canonical() {
        let table = TypeTable::with_builtins();
        assert_eq!(table.resolve("unsigned"), table.resolve("uint"));
        assert_eq!(table.resolve("unsigned int"), table.resolve("uint"));
        assert_eq!(table.resolve("int32_t"), table.resolve("int"));
        assert_eq!(table.name_of(table.resolve("unsigned").unwrap()), Some("uint"));
    }

    #[test]
    fn register_builtins_is_idempotent() {
        let mut table = TypeTable::with_builtins();
        table.register_builtins();
        assert_eq!(table.len(), 13);
    }

    #[test]
    fn qualifiers_ignored_on_resolve() {
        let table = TypeTable::with_builtins();
        assert_eq!(table.resolve("const String&"), table.resolve("String"));
        assert_eq!(table.resolve("const char*"), table.resolve("String"));
        assert_eq!(table.resolve("char"), table.resolve("int8"));
    }

    #[test]
    fn duplicate_type_error() {
        let mut table = TypeTable::with_builtins();
        let err = table
            .register(TypeEntry::new("int", TypeEntryKind::Enum(ModuleId::new(0))))
            .unwrap_err();
        assert_eq!(err, BindError::DuplicateType("int".into()));
    }

    #[test]
    fn class_types_resolve() {
        let mut table = TypeTable::new();
        let hash = table
            .register(TypeEntry::new("Node", TypeEntryKind::Class(ClassId::new(0))))
            .unwrap();

        assert_eq!(table.resolve("Node*"), Some(hash));
        assert_eq!(table.get(hash).unwrap().as_class(), Some(ClassId::new(0)));
    }

    #[test]
    fn aliases() {
        let mut table = TypeTable::with_builtins();
        let hash = table.register_alias("StringHash", "uint").unwrap();
        assert_eq!(table.resolve("StringHash"), Some(hash));

        assert_eq!(
            table.register_alias("StringHash", "int"),
            Err(BindError::DuplicateType("StringHash".into()))
        );
        assert_eq!(
            table.register_alias("Missing", "Nope"),
            Err(BindError::TypeNotFound("Nope".into()))
        );
    }
}
