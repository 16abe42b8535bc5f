//! Component Registration Registry
//!
//! Auto-registration system for components using linkme distributed
//! slices. Components register themselves via
//! `#[linkme::distributed_slice]` from any linked crate and are drained
//! into a [`DescriptorRegistry`] at assembly time. This is the built-in
//! metadata producer; the resolver itself never touches the slice.

use tracing::debug;

use wirebox_domain::{ComponentDescriptor, ComponentId};

use crate::registry::DescriptorRegistry;

/// Registry entry for self-registering components
///
/// Each component registers itself with this entry using
/// `#[linkme::distributed_slice(COMPONENT_REGISTRATIONS)]`. The entry
/// carries metadata, the logical identities the component satisfies, and
/// a factory producing its descriptor.
///
/// `identity` must match the identity of the descriptor the factory
/// builds; the duplicate-registration probe checks the entry, the
/// registry is keyed by the descriptor.
pub struct ComponentRegistration {
    /// Unique component identity (matches the built descriptor)
    pub identity: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Logical identities this component satisfies, used for
    /// abstraction-to-implementation binding at assembly time
    pub provides: &'static [&'static str],
    /// Factory function producing the component's descriptor
    pub descriptor: fn() -> ComponentDescriptor,
}

// Auto-collection via linkme distributed slices - components submit entries at compile time
#[linkme::distributed_slice]
pub static COMPONENT_REGISTRATIONS: [ComponentRegistration] = [..];

/// Drain every registered component into `registry`
///
/// Entries whose identity is already present are skipped, so manual
/// registrations take precedence over self-registered ones and pulling
/// the slice twice is harmless.
///
/// # Arguments
/// * `registry` - Target registry to populate
///
/// # Returns
/// Number of descriptors actually added
pub fn populate_from_registrations(registry: &mut DescriptorRegistry) -> usize {
    let mut added = 0;
    for entry in COMPONENT_REGISTRATIONS {
        let identity = ComponentId::new(entry.identity);
        if registry.contains(&identity) {
            debug!(component = entry.identity, "already registered, skipping");
            continue;
        }
        registry.register((entry.descriptor)());
        added += 1;
    }
    debug!(added, "populated registry from registrations");
    added
}

/// List all self-registered components
///
/// Returns (identity, description) tuples for every entry in the slice.
/// Useful for diagnostics and demo output.
pub fn registered_components() -> Vec<(&'static str, &'static str)> {
    COMPONENT_REGISTRATIONS
        .iter()
        .map(|entry| (entry.identity, entry.description))
        .collect()
}

/// Abstraction bindings declared by self-registered components
///
/// Flattens every `provides` list into (abstraction, concrete) pairs.
/// Conflicts are not resolved here; assembly reports an ambiguity only
/// when a conflicting abstraction is actually depended upon.
pub fn registered_bindings() -> Vec<(ComponentId, ComponentId)> {
    COMPONENT_REGISTRATIONS
        .iter()
        .flat_map(|entry| {
            entry.provides.iter().map(|abstraction| {
                (ComponentId::new(*abstraction), ComponentId::new(entry.identity))
            })
        })
        .collect()
}
