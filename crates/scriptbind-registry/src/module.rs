//! Modules and native headers.
//!
//! A package is split into modules (e.g. `Core`, `Math`, `Scene`), each of
//! which was fed from a set of native headers. Classes keep a back-reference
//! to their module and, when known, the header that declared them.

use scriptbind_core::{ClassId, HeaderId, ModuleId};

/// A module of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub id: ModuleId,
    pub name: String,
    /// Headers in registration order.
    pub headers: Vec<HeaderId>,
    /// Classes in registration order.
    pub classes: Vec<ClassId>,
    /// Enum type names declared by this module.
    pub enums: Vec<String>,
}

impl ModuleEntry {
    pub(crate) fn new(id: ModuleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            headers: Vec::new(),
            classes: Vec::new(),
            enums: Vec::new(),
        }
    }
}

/// A native header a module was populated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub id: HeaderId,
    /// Owning module.
    pub module: ModuleId,
    /// Path as given by the parser, e.g. `Atomic/Math/Vector3.h`.
    pub path: String,
}

impl HeaderEntry {
    /// File name component of the path.
    pub fn file_name(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }
}
