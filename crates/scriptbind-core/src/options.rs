//! Package-level resolution settings.

use crate::{AccessorRole, FunctionEntry};

/// Settings that shape how classes in a package are resolved.
///
/// # Example
///
/// ```
/// use scriptbind_core::BindOptions;
///
/// let options = BindOptions::default()
///     .with_accessor_prefixes("get_", "set_")
///     .with_object_root("Object");
/// assert_eq!(options.getter_prefix, "get_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    /// Prefix stripped from getter names to form the property name.
    pub getter_prefix: String,
    /// Prefix stripped from setter names to form the property name.
    pub setter_prefix: String,
    /// Classes whose descendants (and themselves) use reference-counted
    /// object semantics.
    pub object_roots: Vec<String>,
    /// Flag unflagged `Get*`/`Set*` functions as accessors during Preprocess.
    pub infer_accessors: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            getter_prefix: "Get".to_string(),
            setter_prefix: "Set".to_string(),
            object_roots: vec!["RefCounted".to_string()],
            infer_accessors: false,
        }
    }
}

impl BindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accessor_prefixes(
        mut self,
        getter: impl Into<String>,
        setter: impl Into<String>,
    ) -> Self {
        self.getter_prefix = getter.into();
        self.setter_prefix = setter.into();
        self
    }

    /// Add a class name whose hierarchy has object semantics.
    pub fn with_object_root(mut self, name: impl Into<String>) -> Self {
        self.object_roots.push(name.into());
        self
    }

    pub fn with_infer_accessors(mut self, infer: bool) -> Self {
        self.infer_accessors = infer;
        self
    }

    pub fn is_object_root(&self, class_name: &str) -> bool {
        self.object_roots.iter().any(|r| r == class_name)
    }

    /// Property name for an accessor, with the role's prefix stripped.
    ///
    /// Names without the prefix are used unchanged. Returns `None` when
    /// nothing is left after stripping.
    pub fn property_name<'a>(&self, function_name: &'a str, role: AccessorRole) -> Option<&'a str> {
        let prefix = match role {
            AccessorRole::Getter => &self.getter_prefix,
            AccessorRole::Setter => &self.setter_prefix,
        };
        let name = function_name.strip_prefix(prefix.as_str()).unwrap_or(function_name);
        (!name.is_empty()).then_some(name)
    }

    /// The accessor role a function's shape implies, ignoring its flags.
    ///
    /// Getters: prefixed, no parameters, non-void. Setters: prefixed, one
    /// parameter, void. Constructors and statics never qualify.
    pub fn infer_accessor_role(&self, function: &FunctionEntry) -> Option<AccessorRole> {
        if function.is_constructor() || function.is_static() {
            return None;
        }
        let has_rest = |prefix: &str| {
            function
                .name
                .strip_prefix(prefix)
                .is_some_and(|rest| !rest.is_empty())
        };

        if has_rest(&self.getter_prefix)
            && function.params.is_empty()
            && function.return_type.is_some()
        {
            Some(AccessorRole::Getter)
        } else if has_rest(&self.setter_prefix)
            && function.params.len() == 1
            && function.return_type.is_none()
        {
            Some(AccessorRole::Setter)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FunctionTraits, TypeHash};

    fn float() -> TypeHash {
        TypeHash::from_name("float")
    }

    #[test]
    fn default_prefixes() {
        let options = BindOptions::default();
        assert_eq!(options.property_name("GetX", AccessorRole::Getter), Some("X"));
        assert_eq!(options.property_name("SetX", AccessorRole::Setter), Some("X"));
    }

    #[test]
    fn unprefixed_name_is_kept() {
        let options = BindOptions::default();
        assert_eq!(options.property_name("Width", AccessorRole::Getter), Some("Width"));
    }

    #[test]
    fn bare_prefix_has_no_property() {
        let options = BindOptions::default();
        assert_eq!(options.property_name("Get", AccessorRole::Getter), None);
    }

    #[test]
    fn setter_prefix_not_stripped_from_getter() {
        let options = BindOptions::default();
        assert_eq!(options.property_name("SetX", AccessorRole::Getter), Some("SetX"));
    }

    #[test]
    fn custom_prefixes() {
        let options = BindOptions::default().with_accessor_prefixes("get_", "set_");
        assert_eq!(options.property_name("get_x", AccessorRole::Getter), Some("x"));
    }

    #[test]
    fn object_roots() {
        let options = BindOptions::default().with_object_root("Object");
        assert!(options.is_object_root("RefCounted"));
        assert!(options.is_object_root("Object"));
        assert!(!options.is_object_root("Vector3"));
    }

    #[test]
    fn infer_getter_and_setter_shapes() {
        let options = BindOptions::default();
        let getter = FunctionEntry::new("GetX").returning(float());
        let setter = FunctionEntry::new("SetX").with_param_types(&[float()]);

        assert_eq!(options.infer_accessor_role(&getter), Some(AccessorRole::Getter));
        assert_eq!(options.infer_accessor_role(&setter), Some(AccessorRole::Setter));
    }

    #[test]
    fn infer_rejects_wrong_shapes() {
        let options = BindOptions::default();
        let void_getter = FunctionEntry::new("GetX");
        let getter_with_arg = FunctionEntry::new("GetX")
            .with_param_types(&[float()])
            .returning(float());
        let static_getter = FunctionEntry::new("GetInstance")
            .returning(float())
            .with_traits(FunctionTraits::STATIC);
        let returning_setter = FunctionEntry::new("SetX")
            .with_param_types(&[float()])
            .returning(float());

        assert_eq!(options.infer_accessor_role(&void_getter), None);
        assert_eq!(options.infer_accessor_role(&getter_with_arg), None);
        assert_eq!(options.infer_accessor_role(&static_getter), None);
        assert_eq!(options.infer_accessor_role(&returning_setter), None);
    }
}
