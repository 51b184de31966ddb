//! Resolution phase state machine.

use std::fmt;

/// Where a class stands in the Preprocess / Process / PostProcess pipeline.
///
/// Phases advance strictly in declaration order; a class never moves
/// backwards and never skips a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ResolutionPhase {
    /// As populated by the parser.
    #[default]
    Declared,
    /// Skip markers applied and overrides parsed.
    Preprocessed,
    /// Bases flattened, overloads pruned, properties synthesized.
    Processed,
    /// Consistency checks done; read-only from here on.
    Finalized,
}

impl ResolutionPhase {
    /// The phase a class must be in before entering this one.
    pub const fn predecessor(self) -> Option<ResolutionPhase> {
        match self {
            ResolutionPhase::Declared => None,
            ResolutionPhase::Preprocessed => Some(ResolutionPhase::Declared),
            ResolutionPhase::Processed => Some(ResolutionPhase::Preprocessed),
            ResolutionPhase::Finalized => Some(ResolutionPhase::Processed),
        }
    }

    /// Check if the class is read-only.
    pub const fn is_finalized(self) -> bool {
        matches!(self, ResolutionPhase::Finalized)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ResolutionPhase::Declared => "declared",
            ResolutionPhase::Preprocessed => "preprocessed",
            ResolutionPhase::Processed => "processed",
            ResolutionPhase::Finalized => "finalized",
        }
    }
}

impl fmt::Display for ResolutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_ordered() {
        assert!(ResolutionPhase::Declared < ResolutionPhase::Preprocessed);
        assert!(ResolutionPhase::Preprocessed < ResolutionPhase::Processed);
        assert!(ResolutionPhase::Processed < ResolutionPhase::Finalized);
    }

    #[test]
    fn predecessors() {
        assert_eq!(ResolutionPhase::Declared.predecessor(), None);
        assert_eq!(
            ResolutionPhase::Finalized.predecessor(),
            Some(ResolutionPhase::Processed)
        );
    }

    #[test]
    fn only_finalized_is_read_only() {
        assert!(ResolutionPhase::Finalized.is_finalized());
        assert!(!ResolutionPhase::Processed.is_finalized());
    }
}
