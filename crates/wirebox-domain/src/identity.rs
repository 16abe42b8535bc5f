//! Component Identity
//!
//! Opaque identity keys for components. Identity equality is plain
//! string equality; the resolver never interprets the contents.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// Identity of a component within one container.
///
/// Any unique string works. The [`ComponentId::of`] constructor derives the
/// identity from the fully qualified Rust type name, which keeps identities
/// unique without bookkeeping as long as one component exists per type.
///
/// Cloning is cheap; the backing string is shared.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::ComponentId;
///
/// struct AuditLog;
///
/// let by_name = ComponentId::new("audit_log");
/// let by_type = ComponentId::of::<AuditLog>();
/// assert_ne!(by_name, by_type);
/// assert!(by_type.as_str().ends_with("AuditLog"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(Arc<str>);

impl ComponentId {
    /// Create an identity from an explicit key
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Create an identity from the fully qualified name of `T`
    ///
    /// Works for unsized targets too, so `ComponentId::of::<dyn Trait>()`
    /// names an abstraction that a binding can later satisfy.
    pub fn of<T: ?Sized>() -> Self {
        Self(Arc::from(type_name::<T>()))
    }

    /// The identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
