//! # Wirebox
//!
//! A dependency-ordered component container: descriptors declare what a
//! component needs, the resolver materializes every component exactly once
//! in dependency order, and the container hands instances back by type or
//! identity.
//!
//! This crate provides the main public API for Wirebox. It re-exports the
//! layer crates and the types most programs need at the root.
//!
//! ## Features
//!
//! - **Staged resolution**: zero-dependency components first, then
//!   iterative frontiers until the graph is complete
//! - **Cycle diagnosis**: direct cycles, longer chains, and missing
//!   descriptors reported with their identities
//! - **Compile-time registration**: components self-register through a
//!   linkme distributed slice from any linked crate
//! - **Abstraction bindings**: logical dependencies rewritten to concrete
//!   implementations at assembly time
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use wirebox::domain::ports::NullaryConstruction;
//! use wirebox::{ComponentDescriptor, ContainerBuilder};
//!
//! # fn main() -> wirebox::Result<()> {
//! let container = ContainerBuilder::new()
//!     .register(
//!         ComponentDescriptor::builder("motd")
//!             .constructed_with(NullaryConstruction::new(|| "be kind".to_string()))
//!             .build(),
//!     )
//!     .build()?;
//!
//! let motd: Arc<String> = container.get()?;
//! assert_eq!(motd.as_str(), "be kind");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - identities, descriptors, instances, strategy ports, errors
//! - `resolver` - descriptor registry, staged graph resolver, registration slice
//! - `infrastructure` - configuration, logging, container assembly

/// Domain layer - identities, descriptors, instances, and strategy ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Resolution layer - registry, graph resolver, and the registration slice
///
/// Re-exports from the resolver crate for convenience
pub mod resolver {
    pub use wirebox_resolver::*;
}

/// Infrastructure layer - configuration, logging, and container assembly
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

// Re-export the domain vocabulary at the crate root
pub use domain::{
    ComponentDescriptor, ComponentId, ComponentInstance, ComponentStatus, DescriptorBuilder, Error,
    InstanceStore, Result, Slot,
};

// Re-export the resolution surface at the crate root
pub use resolver::{
    COMPONENT_REGISTRATIONS, ComponentRegistration, DescriptorRegistry, GraphResolver,
    registered_components,
};

// Re-export assembly entry points at the crate root
pub use infrastructure::{Container, ContainerBuilder, ContainerConfig, bootstrap};
