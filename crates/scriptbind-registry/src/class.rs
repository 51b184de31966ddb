//! Bindable class entity.
//!
//! [`ClassEntry`] is created by [`Package::register_class`](crate::Package::register_class)
//! and filled in by the header parser: functions, overrides, skip markers and
//! class-level marshalling hints. The resolution pipeline then turns the
//! as-declared state into what the emitter reads.
//!
//! ## Lifecycle
//!
//! ```text
//! Declared ──preprocess──▶ Preprocessed ──process──▶ Processed ──postprocess──▶ Finalized
//! ```
//!
//! Parser-facing mutators only succeed while the class is `Declared`; once
//! resolution starts the declaration is sealed.

use rustc_hash::FxHashSet;

use scriptbind_core::{
    BindError, BindOptions, ClassDiagnostic, ClassId, FunctionEntry, FunctionId,
    FunctionOverride, HeaderId, ModuleId, PrimitiveKind, PropertyEntry, PropertyMap,
    ResolutionPhase,
};

/// A native class slated for script bindings.
#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub(crate) id: ClassId,
    pub(crate) name: String,
    pub(crate) native_name: String,
    pub(crate) module: ModuleId,
    pub(crate) header: Option<HeaderId>,

    // === Inheritance ===
    pub(crate) base_class: Option<ClassId>,
    /// Flattened ancestors, nearest first. Filled by Process.
    pub(crate) base_classes: Vec<ClassId>,

    // === Members ===
    pub(crate) functions: Vec<FunctionEntry>,
    pub(crate) overrides: Vec<FunctionOverride>,
    pub(crate) skip_functions: FxHashSet<String>,
    pub(crate) properties: PropertyMap,

    // === Marshalling ===
    pub(crate) is_abstract: bool,
    pub(crate) is_object: bool,
    // Vector3, Color, etc. travel as fixed-size number arrays
    pub(crate) number_array_elements: u32,
    pub(crate) array_element_type: String,
    pub(crate) has_properties: bool,

    // === Resolution ===
    pub(crate) phase: ResolutionPhase,
    pub(crate) diagnostics: Vec<ClassDiagnostic>,
}

impl ClassEntry {
    pub(crate) fn new(
        id: ClassId,
        module: ModuleId,
        name: impl Into<String>,
        native_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            native_name: native_name.into(),
            module,
            header: None,
            base_class: None,
            base_classes: Vec::new(),
            functions: Vec::new(),
            overrides: Vec::new(),
            skip_functions: FxHashSet::default(),
            properties: PropertyMap::new(),
            is_abstract: false,
            is_object: false,
            number_array_elements: 0,
            array_element_type: String::new(),
            has_properties: false,
            phase: ResolutionPhase::Declared,
            diagnostics: Vec::new(),
        }
    }

    // === Identity ===

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn header(&self) -> Option<HeaderId> {
        self.header
    }

    // === Inheritance ===

    /// Immediate parent, if any.
    pub fn base_class(&self) -> Option<ClassId> {
        self.base_class
    }

    /// All ancestors, nearest first, without duplicates.
    ///
    /// Empty until the class has been processed.
    pub fn base_classes(&self) -> &[ClassId] {
        &self.base_classes
    }

    // === Members ===

    pub fn functions(&self) -> &[FunctionEntry] {
        &self.functions
    }

    pub fn function(&self, id: FunctionId) -> Option<&FunctionEntry> {
        self.functions.get(id.as_usize())
    }

    /// Find the first function with the given name.
    pub fn find_function(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// All overloads with the given name.
    pub fn overloads<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FunctionEntry> + 'a {
        self.functions.iter().filter(move |f| f.name == name)
    }

    pub fn overrides(&self) -> &[FunctionOverride] {
        &self.overrides
    }

    /// Check if functions with this name are marked to be skipped.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip_functions.contains(name)
    }

    /// The constructor exposed to script.
    ///
    /// Abstract classes never expose one, whatever functions they carry.
    pub fn constructor(&self) -> Option<&FunctionEntry> {
        self.constructors().next()
    }

    /// Every constructor exposed to script; empty for abstract classes.
    pub fn constructors(&self) -> impl Iterator<Item = &FunctionEntry> {
        let is_abstract = self.is_abstract;
        self.functions
            .iter()
            .filter(move |f| !is_abstract && f.is_constructor())
    }

    // === Properties ===

    pub fn has_properties(&self) -> bool {
        self.has_properties
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyEntry> {
        self.properties.get(name)
    }

    /// Property names in first-insertion order.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.names().collect()
    }

    // === Marshalling ===

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Instances follow reference-counted object semantics.
    pub fn is_object(&self) -> bool {
        self.is_object
    }

    /// Instances are marshalled as a fixed-size number array.
    pub fn is_number_array(&self) -> bool {
        self.number_array_elements != 0
    }

    pub fn number_array_elements(&self) -> u32 {
        self.number_array_elements
    }

    pub fn array_element_type(&self) -> &str {
        &self.array_element_type
    }

    // === Resolution ===

    pub fn phase(&self) -> ResolutionPhase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.phase.is_finalized()
    }

    /// Recoverable findings collected so far.
    pub fn diagnostics(&self) -> &[ClassDiagnostic] {
        &self.diagnostics
    }

    // === Parser-facing Mutators ===

    pub fn set_abstract(&mut self, value: bool) -> Result<(), BindError> {
        self.ensure_declared()?;
        self.is_abstract = value;
        Ok(())
    }

    pub fn set_object(&mut self, value: bool) -> Result<(), BindError> {
        self.ensure_declared()?;
        self.is_object = value;
        Ok(())
    }

    pub(crate) fn set_header(&mut self, header: HeaderId) -> Result<(), BindError> {
        self.ensure_declared()?;
        self.header = Some(header);
        Ok(())
    }

    /// Mark the class as marshalled through `elements` numbers of
    /// `element_type`. Zero elements clears the hint.
    ///
    /// The element type must name a numeric primitive (`float`, `int`,
    /// `unsigned`, ...).
    pub fn set_number_array(
        &mut self,
        elements: u32,
        element_type: impl Into<String>,
    ) -> Result<(), BindError> {
        self.ensure_declared()?;
        let element_type = element_type.into();
        if elements > 0 && element_type.trim().is_empty() {
            return Err(BindError::InvalidArrayHint {
                class: self.name.clone(),
                elements,
            });
        }
        if elements > 0
            && !PrimitiveKind::from_name(element_type.trim()).is_some_and(PrimitiveKind::is_numeric)
        {
            return Err(BindError::InvalidArrayElementType {
                class: self.name.clone(),
                element_type,
            });
        }
        self.number_array_elements = elements;
        self.array_element_type = if elements > 0 {
            element_type
        } else {
            String::new()
        };
        Ok(())
    }

    /// Mark (or unmark) every function called `name` as not exposed.
    ///
    /// May be called before the functions are added; applied in Preprocess.
    pub fn set_skip_function(&mut self, name: impl Into<String>, skip: bool) -> Result<(), BindError> {
        self.ensure_declared()?;
        let name = name.into();
        if skip {
            self.skip_functions.insert(name);
        } else {
            self.skip_functions.remove(&name);
        }
        Ok(())
    }

    /// Append a raw function as declared by the parser.
    pub fn add_function(&mut self, function: FunctionEntry) -> Result<FunctionId, BindError> {
        self.ensure_declared()?;
        self.functions.push(function);
        Ok(FunctionId::new((self.functions.len() - 1) as u32))
    }

    pub fn add_function_override(&mut self, function_override: FunctionOverride) -> Result<(), BindError> {
        self.ensure_declared()?;
        self.overrides.push(function_override);
        Ok(())
    }

    /// Attach an accessor function to the property its name implies.
    ///
    /// The property name is the function name minus the configured getter or
    /// setter prefix. A filled slot is replaced (last write wins) and the
    /// replacement is recorded as [`ClassDiagnostic::DuplicateAccessor`].
    /// Re-attaching the function already in the slot changes nothing.
    pub fn add_property_function(
        &mut self,
        function: FunctionId,
        options: &BindOptions,
    ) -> Result<(), BindError> {
        let entry = self
            .functions
            .get(function.as_usize())
            .ok_or_else(|| BindError::FunctionNotFound {
                class: self.name.clone(),
                index: function.index(),
            })?;
        let role = entry
            .accessor_role()
            .ok_or_else(|| BindError::NotAnAccessor(entry.name.clone()))?;
        let property = options
            .property_name(&entry.name, role)
            .ok_or_else(|| BindError::InvalidPropertyName(entry.name.clone()))?
            .to_string();

        if let Some(replaced) = self.properties.attach(&property, role, function)
            && replaced != function
        {
            let diagnostic = ClassDiagnostic::DuplicateAccessor {
                property,
                role,
                replaced: self.function_name(replaced),
                replacement: self.function_name(function),
            };
            self.report(diagnostic);
        }
        self.has_properties = true;
        Ok(())
    }

    // === Pipeline Internals ===

    /// Fail unless the class is in the phase preceding `requested`.
    pub(crate) fn check_phase(&self, requested: ResolutionPhase) -> Result<(), BindError> {
        if requested.predecessor() == Some(self.phase) {
            Ok(())
        } else {
            Err(BindError::PhaseOrder {
                class: self.name.clone(),
                requested,
                current: self.phase,
            })
        }
    }

    pub(crate) fn ensure_declared(&self) -> Result<(), BindError> {
        match self.phase {
            ResolutionPhase::Declared => Ok(()),
            ResolutionPhase::Finalized => Err(BindError::ClassFinalized(self.name.clone())),
            phase => Err(BindError::Sealed {
                class: self.name.clone(),
                phase,
            }),
        }
    }

    pub(crate) fn set_phase(&mut self, phase: ResolutionPhase) {
        tracing::debug!(class = %self.name, %phase, "phase complete");
        self.phase = phase;
    }

    /// Record a diagnostic and log it.
    pub(crate) fn report(&mut self, diagnostic: ClassDiagnostic) {
        tracing::warn!(class = %self.name, "{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn function_name(&self, id: FunctionId) -> String {
        self.function(id).map(|f| f.name.clone()).unwrap_or_default()
    }
}
