//! Property synthesis from accessor functions.

use scriptbind_core::{
    AccessorRole, BindOptions, ClassDiagnostic, FunctionEntry, FunctionId, PropertyMap,
};

/// Collects getters and setters and pairs them into properties.
///
/// Functions are observed in declaration order; when two accessors claim the
/// same slot, the later one wins and a [`ClassDiagnostic::DuplicateAccessor`]
/// is produced.
///
/// # Example
///
/// ```
/// use scriptbind_core::{BindOptions, FunctionEntry, FunctionId, TypeHash};
/// use scriptbind_registry::PropertySynthesizer;
///
/// let float = TypeHash::from_name("float");
/// let functions = vec![
///     FunctionEntry::getter("GetX", float),
///     FunctionEntry::setter("SetX", float),
/// ];
///
/// let options = BindOptions::default();
/// let mut synth = PropertySynthesizer::new(&options);
/// for (i, f) in functions.iter().enumerate() {
///     synth.observe(FunctionId::new(i as u32), f);
/// }
/// let (properties, diagnostics) = synth.finish(&functions);
///
/// assert!(properties.get("X").unwrap().is_read_write());
/// assert!(diagnostics.is_empty());
/// ```
pub struct PropertySynthesizer<'a> {
    options: &'a BindOptions,
    observations: Vec<Observation>,
}

struct Observation {
    property: String,
    role: AccessorRole,
    function: FunctionId,
}

impl<'a> PropertySynthesizer<'a> {
    pub fn new(options: &'a BindOptions) -> Self {
        Self {
            options,
            observations: Vec::new(),
        }
    }

    /// Record `function` if it is an accessor naming a property.
    ///
    /// Returns whether the function was taken.
    pub fn observe(&mut self, id: FunctionId, function: &FunctionEntry) -> bool {
        let Some(role) = function.accessor_role() else {
            return false;
        };
        let Some(property) = self.options.property_name(&function.name, role) else {
            return false;
        };

        self.observations.push(Observation {
            property: property.to_string(),
            role,
            function: id,
        });
        true
    }

    /// Build the property map. `functions` resolves IDs to names for
    /// diagnostics and must be the list the IDs were observed from.
    pub fn finish(self, functions: &[FunctionEntry]) -> (PropertyMap, Vec<ClassDiagnostic>) {
        let name_of = |id: FunctionId| {
            functions
                .get(id.as_usize())
                .map(|f| f.name.clone())
                .unwrap_or_default()
        };

        let mut properties = PropertyMap::new();
        let mut diagnostics = Vec::new();

        for obs in self.observations {
            if let Some(replaced) = properties.attach(&obs.property, obs.role, obs.function)
                && replaced != obs.function
            {
                diagnostics.push(ClassDiagnostic::DuplicateAccessor {
                    property: obs.property,
                    role: obs.role,
                    replaced: name_of(replaced),
                    replacement: name_of(obs.function),
                });
            }
        }

        (properties, diagnostics)
    }
}
