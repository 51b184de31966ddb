//! PostProcess - final consistency checks.

use scriptbind_core::{ClassDiagnostic, ResolutionPhase};

use crate::ClassEntry;

pub(super) fn run(class: &mut ClassEntry) {
    class.has_properties = !class.properties.is_empty();

    // number arrays are marshalled by value and need no constructor
    if !class.is_abstract && !class.is_number_array() && class.constructor().is_none() {
        let diagnostic = ClassDiagnostic::NoUsableConstructor(class.name.clone());
        class.report(diagnostic);
    }

    class.set_phase(ResolutionPhase::Finalized);
}

#[cfg(test)]
mod tests {
    use scriptbind_core::{BindError, ClassId, FunctionEntry, TypeHash};

    use super::*;
    use crate::Package;

    fn setup(name: &str) -> (Package, ClassId) {
        let mut package = Package::new("Atomic");
        let core = package.register_module("Core");
        let id = package.register_class(core, name, format!("Atomic::{name}")).unwrap();
        (package, id)
    }

    #[test]
    fn postprocess_requires_process() {
        let (mut package, id) = setup("Node");
        package.preprocess(id).unwrap();

        assert_eq!(
            package.postprocess(id),
            Err(BindError::PhaseOrder {
                class: "Node".into(),
                requested: ResolutionPhase::Finalized,
                current: ResolutionPhase::Preprocessed,
            })
        );
    }

    #[test]
    fn finalized_after_postprocess() {
        let (mut package, id) = setup("Node");
        package
            .class_mut(id)
            .unwrap()
            .add_function(FunctionEntry::constructor("Node"))
            .unwrap();

        package.resolve_class(id).unwrap();

        let class = package.class(id).unwrap();
        assert!(class.is_finalized());
        assert!(class.diagnostics().is_empty());
        assert!(matches!(
            package.class_mut(id),
            Err(BindError::ClassFinalized(_))
        ));
    }

    #[test]
    fn missing_constructor_reported() {
        let (mut package, id) = setup("Light");
        package.resolve_class(id).unwrap();

        assert_eq!(
            package.class(id).unwrap().diagnostics(),
            &[ClassDiagnostic::NoUsableConstructor("Light".into())]
        );
    }

    #[test]
    fn abstract_and_array_classes_need_no_constructor() {
        let (mut package, component) = setup("Component");
        let core = package.module_of(component).unwrap().id;
        let vector = package.register_class(core, "Vector3", "Atomic::Vector3").unwrap();
        package.class_mut(component).unwrap().set_abstract(true).unwrap();
        package
            .class_mut(vector)
            .unwrap()
            .set_number_array(3, "float")
            .unwrap();

        package.resolve_class(component).unwrap();
        package.resolve_class(vector).unwrap();

        assert!(package.class(component).unwrap().diagnostics().is_empty());
        assert!(package.class(vector).unwrap().diagnostics().is_empty());
    }

    #[test]
    fn has_properties_tracks_property_map() {
        let (mut package, id) = setup("Node");
        let class = package.class_mut(id).unwrap();
        class.add_function(FunctionEntry::constructor("Node")).unwrap();
        class
            .add_function(FunctionEntry::getter("GetID", TypeHash::from_name("uint")))
            .unwrap();

        package.resolve_class(id).unwrap();
        assert!(package.class(id).unwrap().has_properties());
    }

    #[test]
    fn resolve_class_is_idempotent() {
        let (mut package, id) = setup("Node");
        package.resolve_class(id).unwrap();
        let diagnostics = package.class(id).unwrap().diagnostics().len();

        package.resolve_class(id).unwrap();
        assert_eq!(package.class(id).unwrap().diagnostics().len(), diagnostics);
    }
}
