//! Component Instances and the Instance Store
//!
//! Constructed components are held as type-erased shared values. The
//! store is the single map the resolver fills; entries are created at
//! most once per identity and never removed.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::identity::ComponentId;

/// A constructed component, type-erased for storage.
///
/// Wraps the value in `Arc<dyn Any + Send + Sync>` and records the static
/// type name at construction time for diagnostics. Cloning shares the
/// underlying value.
#[derive(Clone)]
pub struct ComponentInstance {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ComponentInstance {
    /// Wrap a freshly constructed value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Wrap an already shared value
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    /// Whether the instance holds a `T`
    pub fn is<T: Any + Send + Sync>(&self) -> bool {
        self.value.is::<T>()
    }

    /// A shared handle to the value if it is a `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// The static type name captured at construction
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ComponentInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentInstance")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Identity-keyed store of constructed instances.
///
/// Insertion order is preserved, so type-based lookup is deterministic:
/// the scan visits instances in creation order and the first match wins.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::{ComponentId, ComponentInstance, InstanceStore};
///
/// let mut store = InstanceStore::new();
/// store
///     .insert(ComponentId::new("greeting"), ComponentInstance::new("hello".to_string()))
///     .unwrap();
///
/// let greeting = store.lookup::<String>().unwrap();
/// assert_eq!(greeting.as_str(), "hello");
/// ```
#[derive(Debug, Default)]
pub struct InstanceStore {
    instances: IndexMap<ComponentId, ComponentInstance>,
}

impl InstanceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the store holds no instances
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Whether an instance exists for `identity`
    pub fn contains(&self, identity: &ComponentId) -> bool {
        self.instances.contains_key(identity)
    }

    /// Insert the instance for `identity`, failing if one already exists.
    ///
    /// Instances are created at most once; a second insert under the same
    /// identity is a lifecycle violation, not an update.
    pub fn insert(&mut self, identity: ComponentId, instance: ComponentInstance) -> Result<()> {
        if self.instances.contains_key(&identity) {
            return Err(Error::duplicate_instance(identity));
        }
        self.instances.insert(identity, instance);
        Ok(())
    }

    /// The type-erased instance for `identity`, if present
    pub fn get(&self, identity: &ComponentId) -> Option<&ComponentInstance> {
        self.instances.get(identity)
    }

    /// A typed handle to the instance for `identity`, if present and a `T`
    pub fn get_as<T: Any + Send + Sync>(&self, identity: &ComponentId) -> Option<Arc<T>> {
        self.instances.get(identity).and_then(ComponentInstance::downcast::<T>)
    }

    /// A typed handle to the instance for `identity`, or an error.
    ///
    /// A missing identity yields [`Error::NoSuchInstance`]; an instance of
    /// a different type yields [`Error::Internal`] naming both types.
    pub fn demand<T: Any + Send + Sync>(&self, identity: &ComponentId) -> Result<Arc<T>> {
        let instance = self
            .instances
            .get(identity)
            .ok_or_else(|| Error::no_such_instance(identity.as_str()))?;
        instance.downcast::<T>().ok_or_else(|| {
            Error::internal(format!(
                "instance {} holds a {}, not a {}",
                identity,
                instance.type_name(),
                type_name::<T>()
            ))
        })
    }

    /// First stored instance of type `T`, scanning in creation order
    pub fn first_of_type<T: Any + Send + Sync>(&self) -> Option<(&ComponentId, Arc<T>)> {
        self.instances
            .iter()
            .find_map(|(id, instance)| instance.downcast::<T>().map(|value| (id, value)))
    }

    /// Type-based lookup: linear scan, first match wins.
    ///
    /// Matching is on the stored concrete type. No instance of `T` yields
    /// [`Error::NoSuchInstance`] carrying the type name.
    pub fn lookup<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        self.first_of_type::<T>()
            .map(|(_, value)| value)
            .ok_or_else(|| Error::no_such_instance(type_name::<T>()))
    }

    /// Identities in creation order
    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.instances.keys()
    }

    /// Entries in creation order
    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, &ComponentInstance)> {
        self.instances.iter()
    }
}
