//! Resolution passes.
//!
//! Each class goes through three phases, in this order:
//!
//! - [`preprocess`]: apply skip markers, infer accessors, parse overrides
//! - [`process`]: flatten bases, apply inherited skip markers and
//!   overrides, select overloads, synthesize properties
//! - [`postprocess`]: consistency checks, then the class is finalized
//!
//! Overrides must be parsed before overloads can be matched against them,
//! and bases must be flattened (and processed) before object semantics and
//! inherited skip markers and overrides can be derived, so the order is
//! fixed. Calling a phase out of order returns
//! [`BindError::PhaseOrder`] and leaves the class untouched.

mod overload;
mod postprocess;
mod preprocess;
mod process;
mod properties;

pub use overload::{OverloadSelection, select_overloads};
pub use properties::PropertySynthesizer;

use scriptbind_core::{BindError, ClassId, ResolutionPhase};

use crate::{ClassEntry, Package};

impl Package {
    /// Run Preprocess on one class.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn preprocess(&mut self, class: ClassId) -> Result<(), BindError> {
        let Package {
            classes,
            types,
            options,
            ..
        } = self;
        let entry = classes
            .get_mut(class.as_usize())
            .ok_or_else(|| BindError::ClassNotFound(class.to_string()))?;
        entry.check_phase(ResolutionPhase::Preprocessed)?;

        preprocess::run(entry, &*types, options);
        Ok(())
    }

    /// Run Process on one class.
    ///
    /// Every ancestor must have been processed first, otherwise
    /// [`BindError::BaseNotResolved`] is returned. Processed ancestors are
    /// sealed, so the flattened chain cached here cannot go stale.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn process(&mut self, class: ClassId) -> Result<(), BindError> {
        let entry = self.class(class)?;
        entry.check_phase(ResolutionPhase::Processed)?;

        let bases = self.base_class_chain(class)?;
        let ancestors: Vec<&ClassEntry> = bases
            .iter()
            .filter_map(|id| self.classes.get(id.as_usize()))
            .collect();
        if let Some(base) = ancestors
            .iter()
            .find(|b| b.phase < ResolutionPhase::Processed)
        {
            return Err(BindError::BaseNotResolved {
                class: entry.name.clone(),
                base: base.name.clone(),
            });
        }

        let in_object_hierarchy = std::iter::once(entry)
            .chain(ancestors.iter().copied())
            .any(|c| self.options.is_object_root(&c.name));
        let inherited = process::Inherited::collect(entry, ancestors);

        let Package {
            classes, options, ..
        } = self;
        let entry = classes
            .get_mut(class.as_usize())
            .ok_or_else(|| BindError::ClassNotFound(class.to_string()))?;

        process::run(entry, bases, in_object_hierarchy, &inherited, options);
        Ok(())
    }

    /// Run PostProcess on one class; the class is read-only afterwards.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn postprocess(&mut self, class: ClassId) -> Result<(), BindError> {
        let entry = self.entry_mut(class)?;
        entry.check_phase(ResolutionPhase::Finalized)?;

        postprocess::run(entry);
        Ok(())
    }

    /// Run whatever phases remain for one class.
    ///
    /// A class that is already finalized is left alone.
    pub fn resolve_class(&mut self, class: ClassId) -> Result<(), BindError> {
        loop {
            match self.class(class)?.phase() {
                ResolutionPhase::Declared => self.preprocess(class)?,
                ResolutionPhase::Preprocessed => self.process(class)?,
                ResolutionPhase::Processed => self.postprocess(class)?,
                ResolutionPhase::Finalized => return Ok(()),
            }
        }
    }
}
