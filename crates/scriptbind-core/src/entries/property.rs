//! Synthesized properties.
//!
//! A property pairs a getter and/or setter function of the same class under
//! one field-like name. Accessors are referenced by [`FunctionId`] into the
//! owning class's function list, never owned.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::FunctionId;

/// Which slot of a property a function fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorRole {
    Getter,
    Setter,
}

impl fmt::Display for AccessorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorRole::Getter => f.write_str("getter"),
            AccessorRole::Setter => f.write_str("setter"),
        }
    }
}

/// A property backed by accessor functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Property name.
    pub name: String,
    /// Getter function.
    pub getter: Option<FunctionId>,
    /// Setter function.
    pub setter: Option<FunctionId>,
}

impl PropertyEntry {
    /// Create a property with no accessors attached yet.
    fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            getter: None,
            setter: None,
        }
    }

    /// The accessor in the given slot.
    pub fn accessor(&self, role: AccessorRole) -> Option<FunctionId> {
        match role {
            AccessorRole::Getter => self.getter,
            AccessorRole::Setter => self.setter,
        }
    }

    fn slot_mut(&mut self, role: AccessorRole) -> &mut Option<FunctionId> {
        match role {
            AccessorRole::Getter => &mut self.getter,
            AccessorRole::Setter => &mut self.setter,
        }
    }

    /// Check if this property is read-only.
    pub fn is_read_only(&self) -> bool {
        self.getter.is_some() && self.setter.is_none()
    }

    /// Check if this property is write-only.
    pub fn is_write_only(&self) -> bool {
        self.getter.is_none() && self.setter.is_some()
    }

    /// Check if this property is read-write.
    pub fn is_read_write(&self) -> bool {
        self.getter.is_some() && self.setter.is_some()
    }
}

/// Name-keyed property table, iterated in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<PropertyEntry>,
    index: FxHashMap<String, usize>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `function` to the `role` slot of property `name`, creating the
    /// property if needed.
    ///
    /// A filled slot is overwritten (last write wins) and the previous
    /// occupant is returned so the caller can report it.
    pub fn attach(
        &mut self,
        name: &str,
        role: AccessorRole,
        function: FunctionId,
    ) -> Option<FunctionId> {
        let slot = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.entries.push(PropertyEntry::empty(name));
                self.index.insert(name.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[slot].slot_mut(role).replace(function)
    }

    pub fn get(&self, name: &str) -> Option<&PropertyEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Property names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
