//! Error handling types

use thiserror::Error;

use crate::identity::ComponentId;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Wirebox container
#[derive(Error, Debug)]
pub enum Error {
    /// No descriptor registered under the requested identity
    #[error("Component descriptor for {identity} not found")]
    DescriptorNotFound {
        /// The identity that was looked up
        identity: ComponentId,
    },

    /// Two components each depend on the other
    #[error("Circular dependency between component {component} and component {dependency}")]
    CircularDependency {
        /// The component whose construction was blocked
        component: ComponentId,
        /// The dependency that points back at it
        dependency: ComponentId,
    },

    /// A dependency cycle spanning more than two components
    #[error("Circular dependency chain: {}", format_ids(.path, " -> "))]
    CircularChain {
        /// The cycle, first and last identity equal
        path: Vec<ComponentId>,
    },

    /// Resolution stalled without a diagnosable cycle
    #[error("Unresolved components remain: {}", format_ids(.remaining, ", "))]
    Unresolved {
        /// Identities still awaiting construction
        remaining: Vec<ComponentId>,
    },

    /// A construction or configuration strategy failed
    #[error("Construction of component {identity} failed: {message}")]
    Construction {
        /// The component being materialized
        identity: ComponentId,
        /// Description of the failure
        message: String,
        /// Optional underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An instance was inserted twice under one identity
    #[error("Instance for component {identity} already exists")]
    DuplicateInstance {
        /// The identity that was inserted again
        identity: ComponentId,
    },

    /// No stored instance matches the requested identity or type
    #[error("No instance matching {query}")]
    NoSuchInstance {
        /// The identity or type name that was queried
        query: String,
    },

    /// A depended-upon abstraction has no bound implementation
    #[error("No component bound to abstraction {abstraction}")]
    MissingBinding {
        /// The abstraction that was depended upon
        abstraction: ComponentId,
    },

    /// A depended-upon abstraction has more than one bound implementation
    #[error(
        "Ambiguous binding for abstraction {abstraction}: candidates {}",
        format_ids(.candidates, ", ")
    )]
    AmbiguousBinding {
        /// The abstraction that was depended upon
        abstraction: ComponentId,
        /// Every component claiming to satisfy it
        candidates: Vec<ComponentId>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn format_ids(ids: &[ComponentId], separator: &str) -> String {
    ids.iter()
        .map(ComponentId::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

// Resolution error creation methods
impl Error {
    /// Create a descriptor-not-found error
    pub fn descriptor_not_found<I: Into<ComponentId>>(identity: I) -> Self {
        Self::DescriptorNotFound {
            identity: identity.into(),
        }
    }

    /// Create a two-component circular dependency error
    pub fn circular_dependency<I: Into<ComponentId>, J: Into<ComponentId>>(
        component: I,
        dependency: J,
    ) -> Self {
        Self::CircularDependency {
            component: component.into(),
            dependency: dependency.into(),
        }
    }

    /// Create a circular chain error from a full cycle path
    pub fn circular_chain(path: Vec<ComponentId>) -> Self {
        Self::CircularChain { path }
    }

    /// Create an unresolved-components error
    pub fn unresolved(remaining: Vec<ComponentId>) -> Self {
        Self::Unresolved { remaining }
    }
}

// Construction error creation methods
impl Error {
    /// Create a construction failure
    pub fn construction<I: Into<ComponentId>, S: Into<String>>(identity: I, message: S) -> Self {
        Self::Construction {
            identity: identity.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a construction failure with source
    pub fn construction_with_source<I: Into<ComponentId>, S: Into<String>>(
        identity: I,
        message: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Construction {
            identity: identity.into(),
            message: message.into(),
            source: Some(source),
        }
    }
}

// Instance store error creation methods
impl Error {
    /// Create a duplicate-instance error
    pub fn duplicate_instance<I: Into<ComponentId>>(identity: I) -> Self {
        Self::DuplicateInstance {
            identity: identity.into(),
        }
    }

    /// Create a no-such-instance error
    pub fn no_such_instance<S: Into<String>>(query: S) -> Self {
        Self::NoSuchInstance {
            query: query.into(),
        }
    }
}

// Binding error creation methods
impl Error {
    /// Create a missing-binding error
    pub fn missing_binding<I: Into<ComponentId>>(abstraction: I) -> Self {
        Self::MissingBinding {
            abstraction: abstraction.into(),
        }
    }

    /// Create an ambiguous-binding error
    pub fn ambiguous_binding<I: Into<ComponentId>>(
        abstraction: I,
        candidates: Vec<ComponentId>,
    ) -> Self {
        Self::AmbiguousBinding {
            abstraction: abstraction.into(),
            candidates,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O and internal error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
