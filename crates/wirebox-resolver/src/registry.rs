//! Descriptor Registry
//!
//! Identity-keyed collection of component descriptors, the sole input of
//! a resolution pass. Membership never changes during resolution; the
//! resolver only flips descriptor statuses.

use indexmap::IndexMap;

use wirebox_domain::error::{Error, Result};
use wirebox_domain::{ComponentDescriptor, ComponentId, ComponentStatus};

/// Insertion-ordered registry of component descriptors.
///
/// Iteration follows registration order, which keeps resolution logs and
/// cycle reports deterministic for a given registration sequence.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::{ComponentDescriptor, ComponentId};
/// use wirebox_resolver::DescriptorRegistry;
///
/// let mut registry = DescriptorRegistry::new();
/// registry.register(ComponentDescriptor::builder("cache").build());
///
/// assert!(registry.contains(&ComponentId::new("cache")));
/// assert!(registry.get(&ComponentId::new("missing")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    descriptors: IndexMap<ComponentId, ComponentDescriptor>,
}

impl DescriptorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the descriptor keyed by its identity.
    ///
    /// Dependency identities are not validated here; a dependency on a
    /// never-registered component surfaces during resolution, not
    /// registration. Returns the previous descriptor when overwriting.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Option<ComponentDescriptor> {
        self.descriptors
            .insert(descriptor.identity().clone(), descriptor)
    }

    /// Whether a descriptor exists for `identity`.
    ///
    /// Existence probe for metadata producers that must avoid duplicate
    /// registration; the resolver itself never calls this.
    pub fn contains(&self, identity: &ComponentId) -> bool {
        self.descriptors.contains_key(identity)
    }

    /// The descriptor for `identity`, or [`Error::DescriptorNotFound`]
    pub fn get(&self, identity: &ComponentId) -> Result<&ComponentDescriptor> {
        self.descriptors
            .get(identity)
            .ok_or_else(|| Error::descriptor_not_found(identity.clone()))
    }

    /// Mutable descriptor access, or [`Error::DescriptorNotFound`]
    pub fn get_mut(&mut self, identity: &ComponentId) -> Result<&mut ComponentDescriptor> {
        self.descriptors
            .get_mut(identity)
            .ok_or_else(|| Error::descriptor_not_found(identity.clone()))
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Identities in registration order
    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.descriptors.keys()
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.values()
    }

    /// Mutable descriptors in registration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ComponentDescriptor> {
        self.descriptors.values_mut()
    }

    /// Identities still awaiting materialization, in registration order
    pub fn remaining(&self) -> Vec<ComponentId> {
        self.descriptors
            .values()
            .filter(|d| d.status() == ComponentStatus::Initializing)
            .map(|d| d.identity().clone())
            .collect()
    }
}
