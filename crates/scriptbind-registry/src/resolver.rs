//! Package-wide resolution.
//!
//! Runs every class through the remaining pipeline phases, bases before
//! derived classes.
//!
//! ## Algorithm
//!
//! 1. Build a `petgraph::DiGraph` with one node per class and an edge from
//!    each base to its derived class
//! 2. Topologically sort the graph
//! 3. Resolve each class in that order; a failing class is recorded and the
//!    rest of the package still resolves

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use scriptbind_core::{BindError, ClassDiagnostic, ClassId};

use crate::Package;

/// Output of a package resolution run.
#[derive(Debug, Default)]
pub struct ResolutionOutput {
    /// Number of classes that reached `Finalized`.
    pub classes_resolved: usize,
    /// Diagnostics of every class, in resolution order.
    pub diagnostics: Vec<(ClassId, ClassDiagnostic)>,
    /// Hard errors; the affected classes stopped where they failed.
    pub errors: Vec<(ClassId, BindError)>,
}

impl ResolutionOutput {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn diagnostics_for(&self, class: ClassId) -> impl Iterator<Item = &ClassDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |(id, _)| *id == class)
            .map(|(_, d)| d)
    }
}

/// Resolves all classes of a package.
pub struct Resolver<'pkg> {
    package: &'pkg mut Package,
}

impl<'pkg> Resolver<'pkg> {
    pub fn new(package: &'pkg mut Package) -> Self {
        Self { package }
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self) -> ResolutionOutput {
        let mut output = ResolutionOutput::default();

        let ordered = match self.resolution_order() {
            Ok(ordered) => ordered,
            Err((class, e)) => {
                tracing::error!(%class, "{e}");
                output.errors.push((class, e));
                return output;
            }
        };

        for class in ordered {
            if let Err(e) = self.package.resolve_class(class) {
                tracing::error!(%class, "{e}");
                output.errors.push((class, e));
            }

            if let Ok(entry) = self.package.class(class) {
                if entry.is_finalized() {
                    output.classes_resolved += 1;
                }
                output
                    .diagnostics
                    .extend(entry.diagnostics().iter().cloned().map(|d| (class, d)));
            }
        }

        tracing::info!(
            package = %self.package.name(),
            resolved = output.classes_resolved,
            diagnostics = output.diagnostics.len(),
            errors = output.errors.len(),
            "package resolved"
        );
        output
    }

    /// Class IDs ordered so every base precedes its derived classes.
    fn resolution_order(&self) -> Result<Vec<ClassId>, (ClassId, BindError)> {
        let mut graph: DiGraph<ClassId, ()> = DiGraph::new();
        let nodes: Vec<NodeIndex> = self.package.classes().map(|c| graph.add_node(c.id())).collect();

        for class in self.package.classes() {
            if let Some(base) = class.base_class()
                && let Some(&from) = nodes.get(base.as_usize())
            {
                graph.add_edge(from, nodes[class.id().as_usize()], ());
            }
        }

        toposort(&graph, None)
            .map(|order| order.into_iter().map(|n| graph[n]).collect())
            .map_err(|cycle| {
                let class = graph[cycle.node_id()];
                let name = self
                    .package
                    .class(class)
                    .map(|c| c.name().to_string())
                    .unwrap_or_default();
                let error = BindError::CircularBaseClass {
                    class: name.clone(),
                    base: name,
                };
                (class, error)
            })
    }
}

impl Package {
    /// Resolve every class in the package.
    pub fn resolve_all(&mut self) -> ResolutionOutput {
        Resolver::new(self).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptbind_core::{FunctionEntry, ResolutionPhase};

    #[test]
    fn empty_package() {
        let mut package = Package::new("Empty");
        let output = package.resolve_all();
        assert!(output.is_success());
        assert_eq!(output.classes_resolved, 0);
    }

    #[test]
    fn derived_declared_before_base() {
        let mut package = Package::new("Atomic");
        let core = package.register_module("Core");
        let node = package.register_class(core, "Node", "Atomic::Node").unwrap();
        let object = package.register_class(core, "Object", "Atomic::Object").unwrap();
        let ref_counted = package
            .register_class(core, "RefCounted", "Atomic::RefCounted")
            .unwrap();
        package.set_base_class(node, Some(object)).unwrap();
        package.set_base_class(object, Some(ref_counted)).unwrap();

        let output = package.resolve_all();

        assert!(output.is_success());
        assert_eq!(output.classes_resolved, 3);
        let node = package.class(node).unwrap();
        assert_eq!(node.phase(), ResolutionPhase::Finalized);
        assert_eq!(node.base_classes(), &[object, ref_counted]);
        assert!(node.is_object());
    }

    #[test]
    fn diagnostics_collected_per_class() {
        let mut package = Package::new("Atomic");
        let core = package.register_module("Core");
        let light = package.register_class(core, "Light", "Atomic::Light").unwrap();
        let node = package.register_class(core, "Node", "Atomic::Node").unwrap();
        package
            .class_mut(node)
            .unwrap()
            .add_function(FunctionEntry::constructor("Node"))
            .unwrap();

        let output = package.resolve_all();

        assert_eq!(output.diagnostics_for(light).count(), 1);
        assert_eq!(output.diagnostics_for(node).count(), 0);
    }

    #[test]
    fn partially_resolved_classes_are_completed() {
        let mut package = Package::new("Atomic");
        let core = package.register_module("Core");
        let a = package.register_class(core, "A", "A").unwrap();
        let b = package.register_class(core, "B", "B").unwrap();
        package.preprocess(a).unwrap();
        package.resolve_class(b).unwrap();

        let output = package.resolve_all();

        assert!(output.is_success());
        assert_eq!(output.classes_resolved, 2);
        assert!(package.class(a).unwrap().is_finalized());
    }
}
