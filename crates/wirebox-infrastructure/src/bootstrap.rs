//! Container assembly
//!
//! Collects component descriptors and abstraction bindings, runs one
//! resolution pass, and hands back the finished [`Container`].
//!
//! ## Architecture
//!
//! ```text
//! linkme (compile-time)        ContainerBuilder (assembly)
//! ─────────────────────        ───────────────────────────
//! COMPONENT_REGISTRATIONS  →   include_registered()
//!                              register() / bind()
//!                                     ↓
//!                              binding rewrite (abstraction → implementation)
//!                                     ↓
//!                              GraphResolver::resolve()
//!                                     ↓
//!                              Container::get::<T>()
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use wirebox_domain::ComponentDescriptor;
//! use wirebox_domain::ports::NullaryConstruction;
//! use wirebox_infrastructure::bootstrap::ContainerBuilder;
//!
//! # fn main() -> wirebox_domain::error::Result<()> {
//! let container = ContainerBuilder::new()
//!     .register(
//!         ComponentDescriptor::builder("greeting")
//!             .constructed_with(NullaryConstruction::new(|| "hello".to_string()))
//!             .build(),
//!     )
//!     .build()?;
//!
//! let greeting: Arc<String> = container.get()?;
//! assert_eq!(greeting.as_str(), "hello");
//! # Ok(())
//! # }
//! ```

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info};

use wirebox_domain::error::{Error, Result};
use wirebox_domain::{ComponentDescriptor, ComponentId, InstanceStore};
use wirebox_resolver::{
    DescriptorRegistry, GraphResolver, populate_from_registrations, registered_bindings,
};

use crate::config::{ConfigLoader, ContainerConfig};
use crate::logging::init_logging;

/// Load configuration, initialize logging, and seed a builder with both
///
/// One-call entry point for binaries: merges configuration from defaults,
/// `wirebox.toml`, and `WIREBOX_*` environment variables, starts tracing
/// with the configured options, and returns a builder carrying the loaded
/// configuration.
pub fn bootstrap() -> Result<ContainerBuilder> {
    let config = ConfigLoader::new().load()?;
    init_logging(config.logging.clone())?;
    Ok(ContainerBuilder::new().with_config(config))
}

/// Builder collecting everything one resolution pass needs
///
/// Descriptors arrive via [`register`](Self::register) or the
/// compile-time registration slice; abstraction bindings via
/// [`bind`](Self::bind) or the slice's `provides` lists. [`build`](Self::build)
/// rewrites bound dependencies, resolves the graph once, and returns the
/// [`Container`].
pub struct ContainerBuilder {
    registry: DescriptorRegistry,
    bindings: IndexMap<ComponentId, Vec<ComponentId>>,
    config: Option<ContainerConfig>,
}

impl ContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            registry: DescriptorRegistry::new(),
            bindings: IndexMap::new(),
            config: None,
        }
    }

    /// Carry an already loaded configuration into assembly
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Register a component descriptor.
    ///
    /// A second registration under the same identity replaces the first.
    pub fn register(mut self, descriptor: ComponentDescriptor) -> Self {
        if let Some(previous) = self.registry.register(descriptor) {
            debug!(identity = %previous.identity(), "Replaced existing descriptor");
        }
        self
    }

    /// Bind an abstraction identity to a concrete component.
    ///
    /// Dependencies naming `abstraction` are rewritten to `concrete`
    /// during assembly. Several bindings for one abstraction are allowed
    /// here; assembly fails only when the abstraction is actually
    /// depended upon and the candidates conflict.
    pub fn bind(
        mut self,
        abstraction: impl Into<ComponentId>,
        concrete: impl Into<ComponentId>,
    ) -> Self {
        self.add_binding(abstraction.into(), concrete.into());
        self
    }

    /// Pull in every component from the compile-time registration slice
    /// along with the abstraction bindings it declares.
    ///
    /// Identities already registered manually are left untouched.
    pub fn include_registered(mut self) -> Self {
        let added = populate_from_registrations(&mut self.registry);
        debug!(added, "Included self-registered components");
        for (abstraction, concrete) in registered_bindings() {
            self.add_binding(abstraction, concrete);
        }
        self
    }

    /// Assemble the container: rewrite bindings, resolve, wrap the store.
    ///
    /// Without an explicit configuration the defaults apply (sequential
    /// construction).
    pub fn build(self) -> Result<Container> {
        let Self {
            mut registry,
            bindings,
            config,
        } = self;
        let config = config.unwrap_or_default();

        info!(
            components = registry.len(),
            bindings = bindings.len(),
            "Assembling container"
        );

        // ====================================================================
        // Rewrite abstraction dependencies to bound implementations
        // ====================================================================

        resolve_bindings(&mut registry, &bindings)?;

        // ====================================================================
        // Run the resolution pass
        // ====================================================================

        let resolver = GraphResolver::new().with_parallel(config.resolver.parallel_construction);
        let mut instances = InstanceStore::new();
        resolver.resolve(&mut registry, &mut instances)?;

        info!(components = instances.len(), "Container ready");

        Ok(Container { instances })
    }

    fn add_binding(&mut self, abstraction: ComponentId, concrete: ComponentId) {
        let candidates = self.bindings.entry(abstraction).or_default();
        if !candidates.contains(&concrete) {
            candidates.push(concrete);
        }
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite dependencies on bound abstractions to their implementations.
///
/// Checks are lazy: an abstraction is only examined when a registered
/// component actually depends on it. A dependency that is neither
/// registered nor bound to a registered component fails
/// [`Error::MissingBinding`]; one with several registered candidates
/// fails [`Error::AmbiguousBinding`].
fn resolve_bindings(
    registry: &mut DescriptorRegistry,
    bindings: &IndexMap<ComponentId, Vec<ComponentId>>,
) -> Result<()> {
    // Collect rewrites first; the registry is borrowed immutably while
    // scanning dependencies.
    let mut rewrites: Vec<(ComponentId, ComponentId, ComponentId)> = Vec::new();

    for descriptor in registry.iter() {
        for dependency in descriptor.dependencies() {
            if registry.contains(dependency) {
                continue;
            }
            let candidates: Vec<ComponentId> = bindings
                .get(dependency)
                .into_iter()
                .flatten()
                .filter(|concrete| registry.contains(concrete))
                .cloned()
                .collect();
            match candidates.len() {
                0 => return Err(Error::missing_binding(dependency.clone())),
                1 => rewrites.push((
                    descriptor.identity().clone(),
                    dependency.clone(),
                    candidates[0].clone(),
                )),
                _ => return Err(Error::ambiguous_binding(dependency.clone(), candidates)),
            }
        }
    }

    for (owner, abstraction, concrete) in rewrites {
        debug!(
            component = %owner,
            abstraction = %abstraction,
            concrete = %concrete,
            "Bound dependency to implementation"
        );
        registry
            .get_mut(&owner)?
            .retarget_dependency(&abstraction, &concrete);
    }

    Ok(())
}

/// The assembled container
///
/// Every component is constructed and configured before the container
/// exists; lookups never trigger further construction work.
#[derive(Debug)]
pub struct Container {
    instances: InstanceStore,
}

impl Container {
    /// Shared handle to the first stored instance of `T`, in creation order
    pub fn get<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        self.instances.lookup::<T>()
    }

    /// Shared typed handle to the instance stored under `identity`
    pub fn get_by_id<T: Any + Send + Sync>(
        &self,
        identity: impl Into<ComponentId>,
    ) -> Result<Arc<T>> {
        self.instances.demand::<T>(&identity.into())
    }

    /// Identities of every materialized component, in creation order
    pub fn component_ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.instances.ids()
    }

    /// Number of materialized components
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the container holds no components
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Read-only access to the backing instance store
    pub fn instances(&self) -> &InstanceStore {
        &self.instances
    }
}
