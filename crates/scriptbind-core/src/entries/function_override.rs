//! User-selected overloads.
//!
//! An overloaded native function cannot always be bound as a whole; a
//! [`FunctionOverride`] names the one overload to expose by its parameter
//! type list, e.g. `Foo(int, String)`.

use crate::{BindError, TypeHash, TypeLookup, normalize_type_name};

/// A declared choice of one overload of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOverride {
    /// Target function name.
    pub name: String,
    /// Raw signature tokens as written by the user.
    pub signature: Vec<String>,
    types: Vec<TypeHash>,
    parsed: bool,
}

impl FunctionOverride {
    /// Create an unparsed override.
    pub fn new<S: Into<String>>(name: impl Into<String>, signature: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into_iter().map(Into::into).collect(),
            types: Vec::new(),
            parsed: false,
        }
    }

    /// Resolve every signature token to a type.
    ///
    /// Runs at most once: a parsed override returns immediately. On failure
    /// nothing is recorded and the override stays unparsed.
    pub fn parse(&mut self, types: &dyn TypeLookup) -> Result<(), BindError> {
        if self.parsed {
            return Ok(());
        }

        let resolved = self
            .signature
            .iter()
            .map(|token| {
                types
                    .resolve_type(normalize_type_name(token))
                    .ok_or_else(|| BindError::UnresolvedType {
                        function: self.name.clone(),
                        token: token.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.types = resolved;
        self.parsed = true;
        Ok(())
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Resolved parameter types; empty until parsed.
    pub fn types(&self) -> &[TypeHash] {
        &self.types
    }

    /// The raw signature, comma-joined.
    pub fn signature_string(&self) -> String {
        self.signature.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture;

    impl TypeLookup for Fixture {
        fn resolve_type(&self, name: &str) -> Option<TypeHash> {
            matches!(name, "int" | "String" | "Vector3").then(|| TypeHash::from_name(name))
        }
    }

    #[test]
    fn parse_resolves_in_order() {
        let mut ov = FunctionOverride::new("Foo", ["int", "const String&"]);
        ov.parse(&Fixture).unwrap();

        assert!(ov.is_parsed());
        assert_eq!(
            ov.types(),
            &[TypeHash::from_name("int"), TypeHash::from_name("String")]
        );
    }

    #[test]
    fn parse_is_idempotent() {
        let mut ov = FunctionOverride::new("Foo", ["Vector3"]);
        ov.parse(&Fixture).unwrap();
        let first = ov.types().to_vec();

        ov.parse(&Fixture).unwrap();
        assert_eq!(ov.types(), first.as_slice());
        assert!(ov.is_parsed());
    }

    #[test]
    fn unresolved_token_fails_without_side_effects() {
        let mut ov = FunctionOverride::new("Foo", ["int", "Quaternion"]);
        let err = ov.parse(&Fixture).unwrap_err();

        assert_eq!(
            err,
            BindError::UnresolvedType {
                function: "Foo".into(),
                token: "Quaternion".into(),
            }
        );
        assert!(!ov.is_parsed());
        assert!(ov.types().is_empty());
    }

    #[test]
    fn empty_signature_parses() {
        let mut ov = FunctionOverride::new("Reset", Vec::<String>::new());
        ov.parse(&Fixture).unwrap();
        assert!(ov.is_parsed());
        assert!(ov.types().is_empty());
    }

    #[test]
    fn signature_string_joins_tokens() {
        let ov = FunctionOverride::new("Foo", ["int", "String"]);
        assert_eq!(ov.signature_string(), "int, String");
    }
}
