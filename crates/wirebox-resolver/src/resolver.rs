//! Graph Resolver
//!
//! Materializes every registered component exactly once, in an order
//! that respects declared dependencies. Resolution runs in stages:
//!
//! ```text
//! Phase 1                Phase 2                      Phase 3
//! ───────────            ─────────────────────        ──────────────
//! independent      →     repeat: materialize     →    stalled graph
//! components             every ready component        diagnosis
//! (no deps)              until a full iteration       (always fails)
//!                        creates nothing
//! ```
//!
//! A component is *ready* when it is still initializing and every
//! declared dependency already has an instance in the store. Each ready
//! member is materialized with one fixed sequence: construct, insert,
//! configure in declared order, mark created.
//!
//! Failures are terminal. The first construction or configuration error
//! aborts the pass; Phase 3 turns a stalled graph into a cycle or
//! not-found report.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use wirebox_domain::error::{Error, Result};
use wirebox_domain::{
    ComponentDescriptor, ComponentId, ComponentInstance, ComponentStatus, InstanceStore,
};

use crate::diagnosis::diagnose;
use crate::registry::DescriptorRegistry;

/// Staged dependency-ordered resolver.
///
/// Stateless apart from its settings; one value can drive any number of
/// passes, each over its own registry and store.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::{ComponentDescriptor, ComponentId, InstanceStore};
/// use wirebox_domain::ports::NullaryConstruction;
/// use wirebox_resolver::{DescriptorRegistry, GraphResolver};
///
/// let mut registry = DescriptorRegistry::new();
/// registry.register(
///     ComponentDescriptor::builder("greeting")
///         .constructed_with(NullaryConstruction::new(|| "hello".to_string()))
///         .build(),
/// );
///
/// let mut instances = InstanceStore::new();
/// GraphResolver::new().resolve(&mut registry, &mut instances).unwrap();
/// assert_eq!(instances.lookup::<String>().unwrap().as_str(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct GraphResolver {
    parallel: bool,
}

impl GraphResolver {
    /// Create a resolver with sequential construction
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Enable or disable parallel construction within a frontier.
    ///
    /// Constructions of one ready set fan out on the rayon pool; inserts,
    /// configuration, and status transitions stay on the calling thread.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether frontier construction runs on the rayon pool
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Run one resolution pass.
    ///
    /// On success every descriptor is `Created` and the store holds one
    /// instance per identity. On failure the store may hold the
    /// successfully materialized prefix; the pass as a whole is unusable
    /// and the registry statuses show how far it got.
    pub fn resolve(
        &self,
        registry: &mut DescriptorRegistry,
        instances: &mut InstanceStore,
    ) -> Result<()> {
        debug!(
            components = registry.len(),
            parallel = self.parallel,
            "starting graph resolution"
        );

        self.construct_independent(registry, instances)?;
        self.construct_dependent(registry, instances)?;

        let remaining = registry.remaining();
        if remaining.is_empty() {
            info!(created = instances.len(), "dependency graph resolved");
            return Ok(());
        }

        warn!(remaining = remaining.len(), "resolution stalled, diagnosing");
        Err(diagnose(registry, instances))
    }

    /// Phase 1: materialize every component with no declared dependencies
    fn construct_independent(
        &self,
        registry: &mut DescriptorRegistry,
        instances: &mut InstanceStore,
    ) -> Result<()> {
        let ready = ready_set(registry, ComponentDescriptor::is_independent);
        if ready.is_empty() {
            debug!("no independent components");
            return Ok(());
        }
        debug!(count = ready.len(), "materializing independent components");
        self.materialize_frontier(&ready, registry, instances)
    }

    /// Phase 2: repeat over the ready set until a fixed point
    fn construct_dependent(
        &self,
        registry: &mut DescriptorRegistry,
        instances: &mut InstanceStore,
    ) -> Result<()> {
        let mut iterations = 0usize;
        loop {
            let ready = ready_set(registry, |descriptor| {
                descriptor
                    .dependencies()
                    .iter()
                    .all(|dependency| instances.contains(dependency))
            });
            if ready.is_empty() {
                debug!(iterations, "dependency fixed point reached");
                return Ok(());
            }
            iterations += 1;
            debug!(
                iteration = iterations,
                count = ready.len(),
                "materializing ready components"
            );
            self.materialize_frontier(&ready, registry, instances)?;
        }
    }

    /// Materialize one frontier: construct every member against the store
    /// as it stood when the frontier was computed, then insert, configure,
    /// and mark each one on the calling thread.
    fn materialize_frontier(
        &self,
        frontier: &[ComponentId],
        registry: &mut DescriptorRegistry,
        instances: &mut InstanceStore,
    ) -> Result<()> {
        let constructed = self.construct_frontier(frontier, registry, instances)?;

        for (identity, instance) in constructed {
            instances.insert(identity, instance)?;
        }
        for identity in frontier {
            configure(identity, registry, instances)?;
            registry.get_mut(identity)?.mark_created();
        }
        Ok(())
    }

    /// Invoke the construction strategies for a frontier, sequentially or
    /// on the rayon pool. The store is read-only here; workers never
    /// write it.
    fn construct_frontier(
        &self,
        frontier: &[ComponentId],
        registry: &DescriptorRegistry,
        instances: &InstanceStore,
    ) -> Result<Vec<(ComponentId, ComponentInstance)>> {
        if self.parallel && frontier.len() > 1 {
            frontier
                .par_iter()
                .map(|identity| construct(identity, registry, instances))
                .collect()
        } else {
            frontier
                .iter()
                .map(|identity| construct(identity, registry, instances))
                .collect()
        }
    }
}

impl Default for GraphResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Still-initializing identities satisfying `filter`, in registration order
fn ready_set<F>(registry: &DescriptorRegistry, filter: F) -> Vec<ComponentId>
where
    F: Fn(&ComponentDescriptor) -> bool,
{
    registry
        .iter()
        .filter(|descriptor| descriptor.status() == ComponentStatus::Initializing)
        .filter(|descriptor| filter(descriptor))
        .map(|descriptor| descriptor.identity().clone())
        .collect()
}

/// Invoke one construction strategy, wrapping generic failures
fn construct(
    identity: &ComponentId,
    registry: &DescriptorRegistry,
    instances: &InstanceStore,
) -> Result<(ComponentId, ComponentInstance)> {
    let descriptor = registry.get(identity)?;
    debug!(component = %identity, "constructing component");
    let instance = descriptor
        .construction()
        .construct(identity, instances)
        .map_err(|error| wrap_strategy_error(identity, "construction strategy failed", error))?;
    Ok((identity.clone(), instance))
}

/// Apply one component's configuration strategies in declared order
fn configure(
    identity: &ComponentId,
    registry: &DescriptorRegistry,
    instances: &InstanceStore,
) -> Result<()> {
    let descriptor = registry.get(identity)?;
    if descriptor.configuration().is_empty() {
        return Ok(());
    }
    let instance = instances
        .get(identity)
        .ok_or_else(|| Error::no_such_instance(identity.as_str()))?;

    debug!(
        component = %identity,
        steps = descriptor.configuration().len(),
        "configuring component"
    );
    for step in descriptor.configuration() {
        step.configure(instance, instances).map_err(|error| {
            wrap_strategy_error(identity, "configuration strategy failed", error)
        })?;
    }
    Ok(())
}

/// Preserve specific failures; wrap everything else as a construction
/// failure naming the component.
fn wrap_strategy_error(identity: &ComponentId, context: &str, error: Error) -> Error {
    match error {
        passthrough @ (Error::DescriptorNotFound { .. } | Error::Construction { .. }) => {
            passthrough
        }
        other => Error::construction_with_source(identity.clone(), context, Box::new(other)),
    }
}
