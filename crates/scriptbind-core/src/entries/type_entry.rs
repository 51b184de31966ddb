//! Package-wide type table entries.

use crate::{ClassId, ModuleId, PrimitiveKind, TypeHash};

/// What a resolvable type name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeEntryKind {
    /// Builtin numeric or boolean type.
    Primitive(PrimitiveKind),
    /// The builtin string type.
    String,
    /// A bindable class.
    Class(ClassId),
    /// A native enum declared in a module.
    Enum(ModuleId),
}

/// A named type known to a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    /// Canonical name.
    pub name: String,
    /// Identity derived from the canonical name.
    pub type_hash: TypeHash,
    pub kind: TypeEntryKind,
}

impl TypeEntry {
    pub fn new(name: impl Into<String>, kind: TypeEntryKind) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            kind,
        }
    }

    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(kind.name(), TypeEntryKind::Primitive(kind))
    }

    /// The class this type refers to, if it is a class.
    pub fn as_class(&self) -> Option<ClassId> {
        match self.kind {
            TypeEntryKind::Class(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeEntryKind::Primitive(_))
    }
}
