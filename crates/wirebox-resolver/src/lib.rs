//! Resolution Layer - Wirebox
//!
//! This crate turns a set of component descriptors into a fully
//! materialized instance store. It owns the descriptor registry, the
//! staged graph resolver, the stall diagnosis that explains unbuildable
//! graphs, and the compile-time component registration slice.
//!
//! ## Architecture
//!
//! - `registry` - Identity-keyed descriptor collection, the pass input
//! - `resolver` - Three-phase dependency-ordered materialization
//! - `diagnosis` - Cycle and not-found reporting for stalled passes
//! - `registration` - linkme slice for self-registering components
//!
//! ## Resolution contract
//!
//! One call, one registry, one store. The resolver mutates the store and
//! descriptor statuses only; registry membership is fixed for the whole
//! pass. A failed pass leaves a partial store that callers must discard.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `wirebox-domain`: Descriptors, instances, strategy ports, errors
//! - `indexmap`: Insertion-ordered registry, deterministic reports
//! - `tracing`: Phase and materialization diagnostics
//! - `rayon`: Optional in-frontier parallel construction
//! - `linkme`: Compile-time component registration slice

mod diagnosis;

pub mod registration;
pub mod registry;
pub mod resolver;

pub use registration::{
    COMPONENT_REGISTRATIONS, ComponentRegistration, populate_from_registrations,
    registered_bindings, registered_components,
};
pub use registry::DescriptorRegistry;
pub use resolver::GraphResolver;
