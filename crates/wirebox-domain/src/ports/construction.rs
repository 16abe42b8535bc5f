//! Construction Strategy Port
//!
//! Port for the pluggable capability that produces a component's
//! instance. The resolver invokes exactly one construction strategy per
//! descriptor, after every declared dependency is already in the store.

use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::identity::ComponentId;
use crate::instance::{ComponentInstance, InstanceStore};

/// Produces a component instance.
///
/// Implementations read the store (to fetch dependency instances) but
/// never write it; the resolver owns all inserts. Strategies must be
/// `Send + Sync` so construction batches can fan out across threads.
pub trait ConstructionStrategy: Send + Sync {
    /// Construct the instance for `identity`.
    ///
    /// # Arguments
    ///
    /// * `identity` - The component being constructed
    /// * `instances` - Read-only view of everything built so far
    ///
    /// # Returns
    ///
    /// The type-erased instance, or an error the resolver surfaces as a
    /// construction failure for `identity`.
    fn construct(
        &self,
        identity: &ComponentId,
        instances: &InstanceStore,
    ) -> Result<ComponentInstance>;
}

/// Placeholder for a descriptor built without a construction strategy.
///
/// Fails at invocation time, so a registry can hold the descriptor and
/// the gap only surfaces when resolution actually reaches it.
#[derive(Debug, Default)]
pub struct AbsentConstruction;

impl ConstructionStrategy for AbsentConstruction {
    fn construct(
        &self,
        identity: &ComponentId,
        _instances: &InstanceStore,
    ) -> Result<ComponentInstance> {
        Err(Error::construction(
            identity.clone(),
            "no construction strategy was provided",
        ))
    }
}

/// Construction from a no-argument factory.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::ports::NullaryConstruction;
///
/// struct Clock;
///
/// let strategy = NullaryConstruction::new(|| Clock);
/// ```
pub struct NullaryConstruction {
    factory: Box<dyn Fn() -> ComponentInstance + Send + Sync>,
}

impl NullaryConstruction {
    /// Wrap a no-argument factory producing `T`
    pub fn new<T, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(move || ComponentInstance::new(factory())),
        }
    }

    /// Wrap a fixed shared value
    pub fn from_value<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            factory: Box::new(move || ComponentInstance::from_arc(Arc::clone(&value))),
        }
    }
}

impl ConstructionStrategy for NullaryConstruction {
    fn construct(
        &self,
        _identity: &ComponentId,
        _instances: &InstanceStore,
    ) -> Result<ComponentInstance> {
        Ok((self.factory)())
    }
}

/// Construction from a factory that receives the current store.
///
/// The factory pulls its dependency instances out of the store, mirroring
/// constructor-argument injection. A dependency the factory demands but
/// the descriptor never declared surfaces as a lookup error here.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::ComponentId;
/// use wirebox_domain::ports::FactoryConstruction;
///
/// struct Config;
/// struct Service {
///     config: std::sync::Arc<Config>,
/// }
///
/// let config_id = ComponentId::of::<Config>();
/// let strategy = FactoryConstruction::new(move |store| {
///     Ok(Service {
///         config: store.demand::<Config>(&config_id)?,
///     })
/// });
/// ```
pub struct FactoryConstruction {
    factory: Box<dyn Fn(&InstanceStore) -> Result<ComponentInstance> + Send + Sync>,
}

impl FactoryConstruction {
    /// Wrap a store-aware factory producing `T`
    pub fn new<T, F>(factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&InstanceStore) -> Result<T> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(move |store| factory(store).map(ComponentInstance::new)),
        }
    }
}

impl ConstructionStrategy for FactoryConstruction {
    fn construct(
        &self,
        _identity: &ComponentId,
        instances: &InstanceStore,
    ) -> Result<ComponentInstance> {
        (self.factory)(instances)
    }
}
