//! Process - flatten bases, apply inherited rules, select overloads,
//! synthesize properties.

use rustc_hash::FxHashSet;

use scriptbind_core::{
    BindOptions, ClassDiagnostic, ClassId, FunctionId, FunctionOverride, ResolutionPhase,
};

use super::{PropertySynthesizer, select_overloads};
use crate::ClassEntry;

/// Skip markers and parsed overrides a class picks up from its processed
/// ancestors.
#[derive(Debug, Default)]
pub(super) struct Inherited {
    skip: FxHashSet<String>,
    overrides: Vec<FunctionOverride>,
}

impl Inherited {
    /// `ancestors` must be nearest first. A name the class overrides itself
    /// takes none of its ancestors' overrides for that name; otherwise the
    /// nearest ancestor overriding the name wins.
    pub(super) fn collect<'a>(
        class: &ClassEntry,
        ancestors: impl IntoIterator<Item = &'a ClassEntry>,
    ) -> Self {
        let mut claimed: FxHashSet<&str> = class.overrides.iter().map(|ov| ov.name.as_str()).collect();
        let mut inherited = Self::default();

        for base in ancestors {
            inherited.skip.extend(base.skip_functions.iter().cloned());

            let mut names = Vec::new();
            for ov in base.overrides.iter().filter(|ov| ov.is_parsed()) {
                if claimed.contains(ov.name.as_str()) {
                    continue;
                }
                names.push(ov.name.as_str());
                inherited.overrides.push(ov.clone());
            }
            claimed.extend(names);
        }

        inherited
    }
}

pub(super) fn run(
    class: &mut ClassEntry,
    bases: Vec<ClassId>,
    in_object_hierarchy: bool,
    inherited: &Inherited,
    options: &BindOptions,
) {
    class.base_classes = bases;
    if in_object_hierarchy {
        class.is_object = true;
    }

    drop_inherited_skips(class, &inherited.skip);
    prune_overloads(class, &inherited.overrides);

    if class.is_abstract {
        class.functions.retain(|f| !f.is_constructor());
    }

    // functions are final from here on, so FunctionIds stay valid
    synthesize_properties(class, options);

    class.set_phase(ResolutionPhase::Processed);
}

fn drop_inherited_skips(class: &mut ClassEntry, skip: &FxHashSet<String>) {
    if skip.is_empty() {
        return;
    }
    let before = class.functions.len();
    class.functions.retain(|f| !skip.contains(&f.name));

    let removed = before - class.functions.len();
    if removed > 0 {
        tracing::debug!(class = %class.name, removed, "skipped inherited functions");
    }
}

fn prune_overloads(class: &mut ClassEntry, inherited: &[FunctionOverride]) {
    let own = select_overloads(&class.functions, &class.overrides);
    let from_bases = select_overloads(&class.functions, inherited);

    let mut keep = own.keep.into_iter().zip(from_bases.keep);
    class
        .functions
        .retain(|_| keep.next().is_none_or(|(own, base)| own && base));

    for diagnostic in own.diagnostics {
        class.report(diagnostic);
    }
    // an ancestor's override need not name anything this class declares
    for diagnostic in from_bases.diagnostics {
        if !matches!(diagnostic, ClassDiagnostic::UnmatchedOverride { .. }) {
            class.report(diagnostic);
        }
    }
}

fn synthesize_properties(class: &mut ClassEntry, options: &BindOptions) {
    let mut synth = PropertySynthesizer::new(options);
    for (i, function) in class.functions.iter().enumerate() {
        synth.observe(FunctionId::new(i as u32), function);
    }
    let (properties, diagnostics) = synth.finish(&class.functions);

    // the rebuild reports every replaced accessor again
    class
        .diagnostics
        .retain(|d| !matches!(d, ClassDiagnostic::DuplicateAccessor { .. }));

    class.has_properties = !properties.is_empty();
    class.properties = properties;
    for diagnostic in diagnostics {
        class.report(diagnostic);
    }
}
