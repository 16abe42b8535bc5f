//! Configuration module
//!
//! TOML-backed configuration with environment variable overrides,
//! loaded through figment and validated before use.

pub mod loader;
pub mod types;

// Re-export main types
pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{ContainerConfig, LoggingConfig, ResolverConfig};
