//! Configuration Strategy Port
//!
//! Port for post-construction configuration steps. A descriptor carries
//! an ordered list of these; the resolver applies them in declared order
//! after the instance is constructed and stored, before the component is
//! marked created.

use std::any::{Any, type_name};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::identity::ComponentId;
use crate::instance::{ComponentInstance, InstanceStore};
use crate::slot::Slot;

/// Applies one configuration step to a constructed instance.
///
/// Implementations read the store for dependency instances but never
/// write it. `Send + Sync` so descriptors stay shareable across threads.
pub trait ConfigurationStrategy: Send + Sync {
    /// Configure `instance`, reading dependencies from `instances`.
    fn configure(&self, instance: &ComponentInstance, instances: &InstanceStore) -> Result<()>;
}

fn downcast_target<T: Any + Send + Sync>(instance: &ComponentInstance) -> Result<Arc<T>> {
    instance.downcast::<T>().ok_or_else(|| {
        Error::internal(format!(
            "configuration target holds a {}, not a {}",
            instance.type_name(),
            type_name::<T>()
        ))
    })
}

/// Field-style injection into a write-once [`Slot`].
///
/// Fetches the declared dependency from the store and fills the slot the
/// accessor points at.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::{ComponentId, Slot};
/// use wirebox_domain::ports::SlotInjection;
///
/// struct Repository;
/// struct Service {
///     repository: Slot<Repository>,
/// }
///
/// let strategy = SlotInjection::new(
///     ComponentId::of::<Repository>(),
///     |service: &Service| &service.repository,
/// );
/// ```
pub struct SlotInjection {
    apply: Box<dyn Fn(&ComponentInstance, &InstanceStore) -> Result<()> + Send + Sync>,
}

impl SlotInjection {
    /// Inject the instance registered under `dependency` into the slot
    /// returned by `accessor`
    pub fn new<T, D>(dependency: impl Into<ComponentId>, accessor: fn(&T) -> &Slot<D>) -> Self
    where
        T: Any + Send + Sync,
        D: Any + Send + Sync,
    {
        let dependency = dependency.into();
        Self {
            apply: Box::new(move |instance, store| {
                let target = downcast_target::<T>(instance)?;
                let value = store.demand::<D>(&dependency)?;
                accessor(&target).fill(value)
            }),
        }
    }
}

impl ConfigurationStrategy for SlotInjection {
    fn configure(&self, instance: &ComponentInstance, instances: &InstanceStore) -> Result<()> {
        (self.apply)(instance, instances)
    }
}

/// Setter-style injection through an arbitrary closure.
///
/// The closure receives the typed target and the store; anything the
/// component exposes as an `&self` mutator (interior mutability, slots,
/// channels) can be driven from here.
pub struct SetterInjection {
    apply: Box<dyn Fn(&ComponentInstance, &InstanceStore) -> Result<()> + Send + Sync>,
}

impl SetterInjection {
    /// Wrap a typed configuration closure
    pub fn new<T, F>(apply: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&T, &InstanceStore) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(move |instance, store| {
                let target = downcast_target::<T>(instance)?;
                apply(&target, store)
            }),
        }
    }
}

impl ConfigurationStrategy for SetterInjection {
    fn configure(&self, instance: &ComponentInstance, instances: &InstanceStore) -> Result<()> {
        (self.apply)(instance, instances)
    }
}
