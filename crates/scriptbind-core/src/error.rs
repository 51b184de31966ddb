//! Error and diagnostic types.
//!
//! ## Error Hierarchy
//!
//! ```text
//! BindError        - hard failures returned through Result; stop work on one class
//! ClassDiagnostic  - recoverable findings collected per class; never abort
//! ```
//!
//! A [`BindError`] means the model would be corrupted (a cycle, a phase run
//! out of order, mutation of a finalized class) or an input was rejected.
//! A [`ClassDiagnostic`] records a decision the pipeline made on the user's
//! behalf, e.g. dropping an override whose signature did not resolve.

use thiserror::Error;

use crate::{AccessorRole, ResolutionPhase};

/// Hard errors raised while building or resolving a package.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A type name in an override signature could not be resolved.
    #[error("override '{function}': unresolved type '{token}'")]
    UnresolvedType {
        /// The override's target function name.
        function: String,
        /// The raw signature token.
        token: String,
    },

    /// A referenced type was not found.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// A type with this name already exists in the package.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A class ID or name does not exist in the package.
    #[error("class not found: {0}")]
    ClassNotFound(String),

    /// A module ID does not exist in the package.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// A header ID does not exist in the package.
    #[error("header not found: {0}")]
    HeaderNotFound(String),

    /// Assigning the base class would make the class its own ancestor.
    #[error("circular base class: '{class}' cannot derive from '{base}'")]
    CircularBaseClass {
        /// The class being assigned a base.
        class: String,
        /// The rejected base.
        base: String,
    },

    /// A pipeline phase was invoked out of order.
    #[error("class '{class}': cannot run {requested} while {current}")]
    PhaseOrder {
        /// The class name.
        class: String,
        /// The phase that was requested.
        requested: ResolutionPhase,
        /// The phase the class is currently in.
        current: ResolutionPhase,
    },

    /// A finalized class was about to be mutated.
    #[error("class '{0}' is finalized and cannot be modified")]
    ClassFinalized(String),

    /// Parser inputs (functions, overrides, base, flags) changed after
    /// resolution started.
    #[error("class '{class}': declaration is sealed once {phase}")]
    Sealed {
        /// The class name.
        class: String,
        /// The phase the class had reached.
        phase: ResolutionPhase,
    },

    /// A number-array hint without an element type.
    #[error("class '{class}': {elements} array elements require an element type")]
    InvalidArrayHint {
        /// The class name.
        class: String,
        /// The requested element count.
        elements: u32,
    },

    /// A number-array hint whose element type is not a numeric primitive.
    #[error("class '{class}': array element type '{element_type}' is not numeric")]
    InvalidArrayElementType {
        /// The class name.
        class: String,
        /// The rejected element type.
        element_type: String,
    },

    /// A class was processed before one of its ancestors.
    #[error("class '{class}': base class '{base}' is not processed yet")]
    BaseNotResolved {
        /// The class being processed.
        class: String,
        /// The first unprocessed ancestor.
        base: String,
    },

    /// A function ID is out of range for the class.
    #[error("class '{class}': no function at index {index}")]
    FunctionNotFound {
        /// The class name.
        class: String,
        /// The offending index.
        index: u32,
    },

    /// A function without getter/setter role was used as a property accessor.
    #[error("function '{0}' is neither a getter nor a setter")]
    NotAnAccessor(String),

    /// Stripping the accessor prefix left no property name.
    #[error("function '{0}' does not name a property")]
    InvalidPropertyName(String),
}

/// Recoverable findings recorded on a class during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassDiagnostic {
    /// An override was dropped because a signature token did not resolve.
    #[error("override '{function}' dropped: unresolved type '{token}'")]
    UnresolvedOverrideType {
        /// The override's target function name.
        function: String,
        /// The raw signature token.
        token: String,
    },

    /// No overload matched an override; all overloads of the name are kept.
    #[error("override '{function}({signature})' matches no overload")]
    UnmatchedOverride {
        /// The override's target function name.
        function: String,
        /// The raw signature, comma-joined.
        signature: String,
    },

    /// More than one overload matched an override; the first was kept.
    #[error("override '{function}({signature})' matches {candidates} overloads, keeping the first")]
    AmbiguousOverride {
        /// The override's target function name.
        function: String,
        /// The raw signature, comma-joined.
        signature: String,
        /// How many overloads matched.
        candidates: usize,
    },

    /// A property slot was filled twice; the later function replaced the earlier.
    #[error("property '{property}': {role} '{replaced}' replaced by '{replacement}'")]
    DuplicateAccessor {
        /// The property name.
        property: String,
        /// Which slot was refilled.
        role: AccessorRole,
        /// The function that lost the slot.
        replaced: String,
        /// The function that now owns the slot.
        replacement: String,
    },

    /// A concrete, non-array class ended up without a constructor.
    #[error("class '{0}' has no usable constructor")]
    NoUsableConstructor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_display() {
        let err = BindError::CircularBaseClass {
            class: "Node".into(),
            base: "Scene".into(),
        };
        assert_eq!(
            err.to_string(),
            "circular base class: 'Node' cannot derive from 'Scene'"
        );

        let err = BindError::PhaseOrder {
            class: "Node".into(),
            requested: ResolutionPhase::Processed,
            current: ResolutionPhase::Declared,
        };
        assert_eq!(err.to_string(), "class 'Node': cannot run processed while declared");

        let err = BindError::BaseNotResolved {
            class: "Node".into(),
            base: "Object".into(),
        };
        assert_eq!(err.to_string(), "class 'Node': base class 'Object' is not processed yet");
    }

    #[test]
    fn diagnostic_display() {
        let diag = ClassDiagnostic::DuplicateAccessor {
            property: "Position".into(),
            role: AccessorRole::Getter,
            replaced: "GetPosition".into(),
            replacement: "GetPosition".into(),
        };
        assert_eq!(
            diag.to_string(),
            "property 'Position': getter 'GetPosition' replaced by 'GetPosition'"
        );

        let diag = ClassDiagnostic::NoUsableConstructor("Light".into());
        assert_eq!(diag.to_string(), "class 'Light' has no usable constructor");
    }
}
