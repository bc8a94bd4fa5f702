//! launcher::flags
//!
//! Capability flags controlling what a run is allowed to do.
//!
//! # Design
//!
//! A capability is binary: present or absent. Every run starts with all
//! capabilities enabled; options and resolved modes may disable them, but
//! nothing re-enables a capability once an option or mode has turned it
//! off.
//!
//! # Example
//!
//! ```
//! use xanter::launcher::flags::{Capability, CapabilitySet};
//!
//! let mut flags = CapabilitySet::all();
//! flags.remove(&Capability::UseModule);
//!
//! assert!(flags.has(&Capability::UseAuth));
//! assert!(!flags.has(&Capability::UseModule));
//! ```

use std::collections::HashSet;

/// A toggle controlling one aspect of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Authenticate the user against the auth database before running.
    UseAuth,

    /// Allow the application's module (plugin) calls.
    UseModule,

    /// Enforce that only one instance of the application runs at a time.
    SingleInstance,
}

/// A set of capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    capabilities: HashSet<Capability>,
}

impl CapabilitySet {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with every capability enabled.
    ///
    /// This is the starting point for every run.
    pub fn all() -> Self {
        Self::with([
            Capability::UseAuth,
            Capability::UseModule,
            Capability::SingleInstance,
        ])
    }

    /// Create a set with specific capabilities.
    pub fn with(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Check if a capability is present.
    pub fn has(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Add a capability. Deduplicates.
    pub fn insert(&mut self, capability: Capability) {
        self.capabilities.insert(capability);
    }

    /// Remove a capability. Returns true if it was present.
    pub fn remove(&mut self, capability: &Capability) -> bool {
        self.capabilities.remove(capability)
    }

    /// Number of capabilities present.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Iterate over present capabilities (unordered).
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.capabilities.iter().copied()
    }

    /// Check if `self` contains no capability absent from `other`.
    ///
    /// Used to verify that an override pass only ever disables.
    pub fn is_subset(&self, other: &CapabilitySet) -> bool {
        self.capabilities.is_subset(&other.capabilities)
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self::with(iter)
    }
}
