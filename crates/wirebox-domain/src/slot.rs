//! Late-Injection Slots
//!
//! A [`Slot`] is a write-once cell a component exposes for a dependency
//! that is injected after construction. The owning component is built
//! with the slot empty; a configuration strategy fills it exactly once
//! before the component is marked created.

use std::any::type_name;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};

/// Write-once holder for a late-injected dependency.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use wirebox_domain::Slot;
///
/// struct Repository;
/// struct Service {
///     repository: Slot<Repository>,
/// }
///
/// let service = Service { repository: Slot::new() };
/// service.repository.fill(Arc::new(Repository)).unwrap();
/// assert!(service.repository.get().is_some());
/// ```
pub struct Slot<T> {
    cell: OnceLock<Arc<T>>,
}

impl<T> Slot<T> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Fill the slot, failing if it already holds a value
    pub fn fill(&self, value: Arc<T>) -> Result<()> {
        self.cell.set(value).map_err(|_| {
            Error::internal(format!("slot for {} already filled", type_name::<T>()))
        })
    }

    /// The injected value, if the slot has been filled
    pub fn get(&self) -> Option<&T> {
        self.cell.get().map(Arc::as_ref)
    }

    /// A shared handle to the injected value, if filled
    pub fn shared(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    /// The injected value, or an error naming the missing dependency type
    pub fn demand(&self) -> Result<&T> {
        self.get().ok_or_else(|| {
            Error::no_such_instance(format!("unfilled slot for {}", type_name::<T>()))
        })
    }

    /// Whether the slot holds a value
    pub fn is_filled(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("type", &type_name::<T>())
            .field("filled", &self.is_filled())
            .finish()
    }
}
