//! Domain Port Interfaces
//!
//! Boundary contracts between the descriptor model and the code that
//! actually builds and wires instances. The resolver drives these ports;
//! it never knows how a concrete component comes to exist.
//!
//! ## Organization
//!
//! - **construction** - Strategies that produce an instance
//! - **configuration** - Strategies that wire a constructed instance

/// Post-construction configuration strategies
pub mod configuration;
/// Instance construction strategies
pub mod construction;

// Re-export the port traits and shipped strategies for convenience
pub use configuration::{ConfigurationStrategy, SetterInjection, SlotInjection};
pub use construction::{
    AbsentConstruction, ConstructionStrategy, FactoryConstruction, NullaryConstruction,
};
