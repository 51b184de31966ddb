//! Override-driven overload selection.
//!
//! For every function name targeted by at least one matching override, only
//! the overloads some override selected survive. Names without overrides are
//! untouched. An override that matches nothing is reported and leaves its
//! overload set alone, so a typo never silently deletes bindings.

use rustc_hash::FxHashSet;

use scriptbind_core::{ClassDiagnostic, FunctionEntry, FunctionOverride};

/// Outcome of matching overrides against a function list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverloadSelection {
    /// One flag per input function; `false` means prune.
    pub keep: Vec<bool>,
    pub diagnostics: Vec<ClassDiagnostic>,
}

impl OverloadSelection {
    /// Number of functions that survive.
    pub fn kept(&self) -> usize {
        self.keep.iter().filter(|&&k| k).count()
    }
}

/// Decide which functions survive the given overrides.
///
/// Unparsed overrides are ignored.
pub fn select_overloads(
    functions: &[FunctionEntry],
    overrides: &[FunctionOverride],
) -> OverloadSelection {
    let mut selected = vec![false; functions.len()];
    let mut constrained: FxHashSet<&str> = FxHashSet::default();
    let mut diagnostics = Vec::new();

    for ov in overrides.iter().filter(|ov| ov.is_parsed()) {
        let mut matches = functions
            .iter()
            .enumerate()
            .filter(|(_, f)| f.name == ov.name && f.matches_signature(ov.types()))
            .map(|(i, _)| i);

        let Some(first) = matches.next() else {
            diagnostics.push(ClassDiagnostic::UnmatchedOverride {
                function: ov.name.clone(),
                signature: ov.signature_string(),
            });
            continue;
        };

        let extra = matches.count();
        if extra > 0 {
            diagnostics.push(ClassDiagnostic::AmbiguousOverride {
                function: ov.name.clone(),
                signature: ov.signature_string(),
                candidates: extra + 1,
            });
        }

        selected[first] = true;
        constrained.insert(ov.name.as_str());
    }

    let keep = functions
        .iter()
        .zip(&selected)
        .map(|(f, &sel)| sel || !constrained.contains(f.name.as_str()))
        .collect();

    OverloadSelection { keep, diagnostics }
}
