//! Type-name resolution seam.

use crate::TypeHash;

/// Resolves type names within a package.
///
/// Implemented by the package arena; override parsing and other passes take
/// it explicitly so each phase can be exercised against a small fixture.
pub trait TypeLookup {
    /// Resolve a (normalized) type name to its identity.
    fn resolve_type(&self, name: &str) -> Option<TypeHash>;
}

/// Name of the builtin string type.
pub const STRING_TYPE: &str = "String";

/// Strip qualifiers that do not affect type identity.
///
/// `const String&`, `String &` and `String*` all normalize to `String`.
/// C strings (`char*`, `const char*`) are strings, not pointers to `int8`.
pub fn normalize_type_name(token: &str) -> &str {
    let mut name = token.trim();
    if let Some(rest) = name.strip_prefix("const ") {
        name = rest.trim_start();
    }
    let is_pointer = name.trim_end_matches(['&', ' ']).ends_with('*');
    let base = name
        .trim_end_matches(['&', '*', ' '])
        .trim_end_matches(" const")
        .trim();

    if is_pointer && base == "char" {
        STRING_TYPE
    } else {
        base
    }
}
