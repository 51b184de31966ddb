//! Member function entries.
//!
//! The header parser hands each class a flat list of [`FunctionEntry`]
//! values. The pipeline only looks at a function's name, its parameter type
//! sequence and its role flags; everything else is carried through for the
//! emitter.

use bitflags::bitflags;

use crate::TypeHash;

use super::AccessorRole;

bitflags! {
    /// Role flags attached to a function by the parser.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionTraits: u8 {
        /// Constructs an instance of the owning class.
        const CONSTRUCTOR = 1 << 0;
        /// Reads a property.
        const GETTER = 1 << 1;
        /// Writes a property.
        const SETTER = 1 << 2;
        /// Does not take an instance.
        const STATIC = 1 << 3;
        /// Must not be exposed to script.
        const SKIP = 1 << 4;
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name as declared.
    pub name: String,
    /// Resolved parameter type.
    pub type_hash: TypeHash,
    /// Declared `const`.
    pub is_const: bool,
    /// Passed by reference.
    pub is_reference: bool,
}

impl Param {
    /// Create a by-value parameter.
    pub fn new(name: impl Into<String>, type_hash: TypeHash) -> Self {
        Self {
            name: name.into(),
            type_hash,
            is_const: false,
            is_reference: false,
        }
    }

    /// Create a `const T&` parameter.
    pub fn const_ref(name: impl Into<String>, type_hash: TypeHash) -> Self {
        Self {
            name: name.into(),
            type_hash,
            is_const: true,
            is_reference: true,
        }
    }
}

/// A member function of a bindable class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    /// Function name as declared.
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Return type, `None` for `void`.
    pub return_type: Option<TypeHash>,
    /// Role flags.
    pub traits: FunctionTraits,
}

impl FunctionEntry {
    /// Create a function with no parameters, no return value and no flags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            traits: FunctionTraits::empty(),
        }
    }

    /// Create a constructor. Native constructors carry the class name.
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self::new(class_name).with_traits(FunctionTraits::CONSTRUCTOR)
    }

    /// Create a zero-argument getter returning `ty`.
    pub fn getter(name: impl Into<String>, ty: TypeHash) -> Self {
        Self::new(name)
            .returning(ty)
            .with_traits(FunctionTraits::GETTER)
    }

    /// Create a one-argument setter taking `ty`.
    pub fn setter(name: impl Into<String>, ty: TypeHash) -> Self {
        Self::new(name)
            .with_param(Param::new("value", ty))
            .with_traits(FunctionTraits::SETTER)
    }

    // === Builder Methods ===

    /// Append a parameter.
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Append by-value parameters of the given types, named `arg0..`.
    pub fn with_param_types(mut self, types: &[TypeHash]) -> Self {
        let start = self.params.len();
        self.params.extend(
            types
                .iter()
                .enumerate()
                .map(|(i, &ty)| Param::new(format!("arg{}", start + i), ty)),
        );
        self
    }

    /// Set the return type.
    pub fn returning(mut self, ty: TypeHash) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add role flags.
    pub fn with_traits(mut self, traits: FunctionTraits) -> Self {
        self.traits |= traits;
        self
    }

    // === Query Methods ===

    pub fn is_constructor(&self) -> bool {
        self.traits.contains(FunctionTraits::CONSTRUCTOR)
    }

    pub fn is_getter(&self) -> bool {
        self.traits.contains(FunctionTraits::GETTER)
    }

    pub fn is_setter(&self) -> bool {
        self.traits.contains(FunctionTraits::SETTER)
    }

    pub fn is_static(&self) -> bool {
        self.traits.contains(FunctionTraits::STATIC)
    }

    pub fn is_skipped(&self) -> bool {
        self.traits.contains(FunctionTraits::SKIP)
    }

    /// The property slot this function fills, if any.
    ///
    /// A function flagged as both getter and setter is treated as a getter.
    pub fn accessor_role(&self) -> Option<AccessorRole> {
        if self.is_getter() {
            Some(AccessorRole::Getter)
        } else if self.is_setter() {
            Some(AccessorRole::Setter)
        } else {
            None
        }
    }

    /// Parameter types in order.
    pub fn param_types(&self) -> impl Iterator<Item = TypeHash> + '_ {
        self.params.iter().map(|p| p.type_hash)
    }

    /// Exact positional match of the parameter types against `types`.
    pub fn matches_signature(&self, types: &[TypeHash]) -> bool {
        self.params.len() == types.len() && self.param_types().eq(types.iter().copied())
    }
}
