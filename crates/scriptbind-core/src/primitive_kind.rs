//! Builtin numeric and boolean types known to every package.

use std::fmt;

use crate::TypeHash;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Every primitive kind, in registration order.
    pub const ALL: [PrimitiveKind; 12] = [
        PrimitiveKind::Void,
        PrimitiveKind::Bool,
        PrimitiveKind::Int8,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint8,
        PrimitiveKind::Uint16,
        PrimitiveKind::Uint32,
        PrimitiveKind::Uint64,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Get the TypeHash for this primitive type.
    pub fn type_hash(self) -> TypeHash {
        TypeHash::from_name(self.name())
    }

    /// Get the canonical name of this primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int8 => "int8",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Uint8 => "uint8",
            PrimitiveKind::Uint16 => "uint16",
            PrimitiveKind::Uint32 => "uint",
            PrimitiveKind::Uint64 => "uint64",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Native spellings that resolve to this primitive, besides its name.
    pub const fn native_aliases(self) -> &'static [&'static str] {
        match self {
            PrimitiveKind::Void => &[],
            PrimitiveKind::Bool => &[],
            PrimitiveKind::Int8 => &["char", "signed char", "int8_t"],
            PrimitiveKind::Int16 => &["short", "int16_t"],
            PrimitiveKind::Int32 => &["signed", "int32_t", "long"],
            PrimitiveKind::Int64 => &["long long", "int64_t", "long64"],
            PrimitiveKind::Uint8 => &["unsigned char", "uint8_t"],
            PrimitiveKind::Uint16 => &["unsigned short", "uint16_t"],
            PrimitiveKind::Uint32 => &["unsigned", "unsigned int", "uint32_t", "unsigned long"],
            PrimitiveKind::Uint64 => &["unsigned long long", "uint64_t", "size_t"],
            PrimitiveKind::Float => &[],
            PrimitiveKind::Double => &[],
        }
    }

    /// Look up a primitive by canonical name or native alias.
    pub fn from_name(name: &str) -> Option<PrimitiveKind> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|k| k.name() == name || k.native_aliases().contains(&name))
    }

    /// Check if this is a numeric type usable as an array element.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Void | PrimitiveKind::Bool)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
