//! # Wirebox Domain
//!
//! Core model of the Wirebox container: component identities and
//! descriptors, the lifecycle status machine, type-erased instances and
//! the instance store, late-injection slots, the strategy ports, and the
//! error taxonomy.
//!
//! ## Architecture
//!
//! This crate has no knowledge of registries or resolution order. It
//! defines what a component *is*; `wirebox-resolver` decides *when* each
//! one is materialized and `wirebox-infrastructure` assembles the whole
//! container.
//!
//! - `identity` - Opaque component identity keys
//! - `descriptor` - Component blueprints and lifecycle status
//! - `instance` - Type-erased instances and the instance store
//! - `slot` - Write-once cells for late injection
//! - `ports` - Construction and configuration strategy contracts
//! - `error` - The container error taxonomy

/// Component blueprints and lifecycle status
pub mod descriptor;
/// Error handling types
pub mod error;
/// Opaque component identity keys
pub mod identity;
/// Type-erased instances and the instance store
pub mod instance;
/// Construction and configuration strategy ports
pub mod ports;
/// Write-once cells for late injection
pub mod slot;

// Re-export the working set at the crate root
pub use descriptor::{ComponentDescriptor, ComponentStatus, DescriptorBuilder};
pub use error::{Error, Result};
pub use identity::ComponentId;
pub use instance::{ComponentInstance, InstanceStore};
pub use slot::Slot;
