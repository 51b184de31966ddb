//! Preprocess - normalize parser output before matching.

use scriptbind_core::{
    AccessorRole, BindError, BindOptions, ClassDiagnostic, FunctionTraits, ResolutionPhase,
    TypeLookup,
};

use crate::ClassEntry;

pub(super) fn run(class: &mut ClassEntry, types: &dyn TypeLookup, options: &BindOptions) {
    drop_skipped(class);

    if options.infer_accessors {
        infer_accessors(class, options);
    }

    parse_overrides(class, types);

    class.set_phase(ResolutionPhase::Preprocessed);
}

/// Remove functions flagged `SKIP` or named by a skip marker.
fn drop_skipped(class: &mut ClassEntry) {
    let before = class.functions.len();
    let skip = &class.skip_functions;
    class
        .functions
        .retain(|f| !f.is_skipped() && !skip.contains(&f.name));

    let removed = before - class.functions.len();
    if removed > 0 {
        tracing::debug!(class = %class.name, removed, "skipped functions");
    }
}

fn infer_accessors(class: &mut ClassEntry, options: &BindOptions) {
    for function in &mut class.functions {
        if function.accessor_role().is_some() {
            continue;
        }
        match options.infer_accessor_role(function) {
            Some(AccessorRole::Getter) => {
                function.traits |= FunctionTraits::GETTER;
            }
            Some(AccessorRole::Setter) => {
                function.traits |= FunctionTraits::SETTER;
            }
            None => {}
        }
    }
}

/// Parse every override; unresolvable ones are dropped with a diagnostic.
fn parse_overrides(class: &mut ClassEntry, types: &dyn TypeLookup) {
    let mut overrides = std::mem::take(&mut class.overrides);
    let mut failures = Vec::new();

    overrides.retain_mut(|ov| match ov.parse(types) {
        Ok(()) => true,
        Err(BindError::UnresolvedType { function, token }) => {
            failures.push(ClassDiagnostic::UnresolvedOverrideType { function, token });
            false
        }
        Err(other) => {
            // parse only reports unresolved types
            tracing::error!(class = %class.name, "{other}");
            false
        }
    });

    class.overrides = overrides;
    for diagnostic in failures {
        class.report(diagnostic);
    }
}
