//! Human-readable class dump for debugging.

use std::fmt;

use scriptbind_core::{FunctionEntry, TypeHash};

use crate::{ClassEntry, Package};

/// Display adapter printing one class with names resolved against its package.
pub struct ClassDump<'a> {
    class: &'a ClassEntry,
    package: &'a Package,
}

impl ClassEntry {
    pub fn dump<'a>(&'a self, package: &'a Package) -> ClassDump<'a> {
        ClassDump {
            class: self,
            package,
        }
    }
}

impl ClassDump<'_> {
    fn type_name(&self, hash: TypeHash) -> String {
        self.package
            .type_name(hash)
            .map(str::to_string)
            .unwrap_or_else(|| hash.to_string())
    }

    fn class_name(&self, id: scriptbind_core::ClassId) -> String {
        self.package
            .class(id)
            .map(|c| c.name().to_string())
            .unwrap_or_else(|_| id.to_string())
    }

    fn write_function(&self, f: &mut fmt::Formatter<'_>, function: &FunctionEntry) -> fmt::Result {
        let ret = function
            .return_type
            .map(|t| self.type_name(t))
            .unwrap_or_else(|| "void".to_string());
        let params: Vec<String> = function.param_types().map(|t| self.type_name(t)).collect();
        write!(f, "    {ret} {}({})", function.name, params.join(", "))?;
        if !function.traits.is_empty() {
            write!(f, " [{:?}]", function.traits)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ClassDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.class;

        writeln!(f, "class {} ({})", class.name(), class.native_name())?;

        let module = self
            .package
            .module(class.module())
            .map(|m| m.name.as_str())
            .unwrap_or("?");
        write!(f, "  module: {module}")?;
        if let Some(header) = class.header().and_then(|h| self.package.header(h).ok()) {
            write!(f, ", header: {}", header.path)?;
        }
        writeln!(f)?;
        writeln!(f, "  phase: {}", class.phase())?;

        let mut flags = Vec::new();
        if class.is_abstract() {
            flags.push("abstract".to_string());
        }
        if class.is_object() {
            flags.push("object".to_string());
        }
        if class.is_number_array() {
            flags.push(format!(
                "number-array[{} x {}]",
                class.number_array_elements(),
                class.array_element_type()
            ));
        }
        if !flags.is_empty() {
            writeln!(f, "  flags: {}", flags.join(", "))?;
        }

        if let Some(base) = class.base_class() {
            let chain: Vec<String> = if class.base_classes().is_empty() {
                vec![self.class_name(base)]
            } else {
                class.base_classes().iter().map(|&id| self.class_name(id)).collect()
            };
            writeln!(f, "  bases: {}", chain.join(" -> "))?;
        }

        if !class.functions().is_empty() {
            writeln!(f, "  functions:")?;
            for function in class.functions() {
                self.write_function(f, function)?;
            }
        }

        if !class.overrides().is_empty() {
            writeln!(f, "  overrides:")?;
            for ov in class.overrides() {
                writeln!(f, "    {}({})", ov.name, ov.signature_string())?;
            }
        }

        if class.has_properties() {
            writeln!(f, "  properties:")?;
            for property in class.properties().iter() {
                let access = match (property.getter, property.setter) {
                    (Some(_), Some(_)) => "rw",
                    (Some(_), None) => "r",
                    _ => "w",
                };
                writeln!(f, "    {} ({access})", property.name)?;
            }
        }

        for diagnostic in class.diagnostics() {
            writeln!(f, "  warning: {diagnostic}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use scriptbind_core::FunctionEntry;

    use crate::Package;

    #[test]
    fn dump_resolved_class() {
        let mut package = Package::new("Atomic");
        let math = package.register_module("Math");
        let header = package.register_header(math, "Atomic/Math/Vector3.h").unwrap();
        let id = package.register_class(math, "Vector3", "Atomic::Vector3").unwrap();
        package.set_class_header(id, header).unwrap();

        let float = package.resolve_type("float").unwrap();
        let class = package.class_mut(id).unwrap();
        class.set_number_array(3, "float").unwrap();
        class.add_function(FunctionEntry::getter("GetX", float)).unwrap();
        class.add_function(FunctionEntry::setter("SetX", float)).unwrap();

        package.resolve_class(id).unwrap();
        let text = package.class(id).unwrap().dump(&package).to_string();

        assert!(text.starts_with("class Vector3 (Atomic::Vector3)\n"));
        assert!(text.contains("module: Math, header: Atomic/Math/Vector3.h"));
        assert!(text.contains("number-array[3 x float]"));
        assert!(text.contains("float GetX()"));
        assert!(text.contains("void SetX(float)"));
        assert!(text.contains("X (rw)"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn dump_shows_diagnostics() {
        let mut package = Package::new("Atomic");
        let core = package.register_module("Core");
        let id = package.register_class(core, "Light", "Atomic::Light").unwrap();
        package.resolve_class(id).unwrap();

        let text = package.class(id).unwrap().dump(&package).to_string();
        assert!(text.contains("warning: class 'Light' has no usable constructor"));
    }
}
