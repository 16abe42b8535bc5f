//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the domain and resolution
//! layers: configuration, structured logging, and container assembly.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration with environment overrides |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Assembly
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Container builder, binding rewrite, lookup facade |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{Container, ContainerBuilder, bootstrap};
pub use config::{ConfigBuilder, ConfigLoader, ContainerConfig, LoggingConfig, ResolverConfig};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
