//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator between nested configuration keys in environment variables
///
/// Double underscore, so keys that themselves contain underscores survive
/// the split (`WIREBOX_RESOLVER__PARALLEL_CONSTRUCTION`).
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full tracing filter directive
pub const LOG_FILTER_ENV: &str = "WIREBOX_LOG";

/// File stem used when a log path has no usable name
pub const DEFAULT_LOG_STEM: &str = "wirebox";
