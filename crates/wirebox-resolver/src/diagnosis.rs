//! Stall Diagnosis
//!
//! Runs only after a resolution pass reaches a fixed point with
//! components still initializing, and always produces an error. The scan
//! order is the registry's registration order, so the same graph always
//! yields the same report.
//!
//! Diagnosis proceeds from most to least specific:
//!
//! 1. a dependency whose descriptor was never registered
//! 2. a two-component cycle (each side depends on the other)
//! 3. a longer cycle, reported with its full path
//! 4. anything else, reported as unresolved

use std::collections::HashSet;

use wirebox_domain::error::{Error, Result};
use wirebox_domain::{ComponentId, ComponentStatus, InstanceStore};

use crate::registry::DescriptorRegistry;

/// Explain why the pass stalled.
///
/// Dereferences every unsatisfied dependency first, so a dependency on a
/// never-registered component surfaces as [`Error::DescriptorNotFound`]
/// rather than being misreported as a cycle.
pub(crate) fn diagnose(registry: &DescriptorRegistry, instances: &InstanceStore) -> Error {
    match direct_cycle(registry, instances) {
        Err(not_found) => not_found,
        Ok(Some((component, dependency))) => Error::circular_dependency(component, dependency),
        Ok(None) => {
            let remaining = registry.remaining();
            match find_cycle(registry, &remaining) {
                Some(path) => Error::circular_chain(path),
                None => Error::unresolved(remaining),
            }
        }
    }
}

/// First two-component cycle among the still-initializing descriptors.
///
/// A dependency already in the store cannot be blocking, so only the
/// unsatisfied ones are dereferenced. The first blocked descriptor with a
/// dependency pointing back at it wins; a self-dependency matches too.
fn direct_cycle(
    registry: &DescriptorRegistry,
    instances: &InstanceStore,
) -> Result<Option<(ComponentId, ComponentId)>> {
    for descriptor in registry
        .iter()
        .filter(|d| d.status() == ComponentStatus::Initializing)
    {
        for dependency in descriptor.dependencies() {
            if instances.contains(dependency) {
                continue;
            }
            let blocking = registry.get(dependency)?;
            if blocking.depends_on(descriptor.identity()) {
                return Ok(Some((descriptor.identity().clone(), dependency.clone())));
            }
        }
    }
    Ok(None)
}

/// First cycle in the subgraph of still-initializing components.
///
/// Every blocking cycle lies entirely within that subgraph: a created
/// component has no unsatisfied dependencies left. Returns the cycle as a
/// path whose first and last identity are equal.
fn find_cycle(
    registry: &DescriptorRegistry,
    remaining: &[ComponentId],
) -> Option<Vec<ComponentId>> {
    let subgraph: HashSet<&ComponentId> = remaining.iter().collect();
    let mut done: HashSet<ComponentId> = HashSet::new();

    for start in remaining {
        if done.contains(start) {
            continue;
        }
        let mut path = Vec::new();
        let mut on_path = HashSet::new();
        if let Some(cycle) =
            visit(start, registry, &subgraph, &mut path, &mut on_path, &mut done)
        {
            return Some(cycle);
        }
    }
    None
}

fn visit(
    node: &ComponentId,
    registry: &DescriptorRegistry,
    subgraph: &HashSet<&ComponentId>,
    path: &mut Vec<ComponentId>,
    on_path: &mut HashSet<ComponentId>,
    done: &mut HashSet<ComponentId>,
) -> Option<Vec<ComponentId>> {
    path.push(node.clone());
    on_path.insert(node.clone());

    if let Ok(descriptor) = registry.get(node) {
        for dependency in descriptor.dependencies() {
            if !subgraph.contains(dependency) {
                continue;
            }
            if on_path.contains(dependency) {
                // Back edge: the cycle is the path suffix from the first
                // occurrence, closed by repeating it.
                let first = path.iter().position(|id| id == dependency)?;
                let mut cycle = path[first..].to_vec();
                cycle.push(dependency.clone());
                return Some(cycle);
            }
            if done.contains(dependency) {
                continue;
            }
            if let Some(cycle) = visit(dependency, registry, subgraph, path, on_path, done) {
                return Some(cycle);
            }
        }
    }

    path.pop();
    on_path.remove(node);
    done.insert(node.clone());
    None
}
