//! Arena identifiers.
//!
//! Classes, modules and headers live in flat arenas owned by a package and
//! refer to each other through these indices instead of pointers. Functions
//! are addressed by their position inside the owning class.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID with the given index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Get the underlying index.
            #[inline]
            pub const fn index(self) -> u32 {
                self.0
            }

            /// Get the index as a `usize` for slice access.
            #[inline]
            pub const fn as_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self::new(index)
            }
        }
    };
}

arena_id!(
    /// Identifies a class inside its package.
    ClassId,
    "class"
);

arena_id!(
    /// Identifies a module inside its package.
    ModuleId,
    "module"
);

arena_id!(
    /// Identifies a native header inside its package.
    HeaderId,
    "header"
);

arena_id!(
    /// Position of a function in its class's function list.
    ///
    /// Stable once the class has been processed; pruning during Process
    /// renumbers functions before properties capture their IDs.
    FunctionId,
    "fn"
);
