//! Component Descriptors
//!
//! A descriptor is the blueprint the resolver works from: identity,
//! declared dependencies, the construction strategy, and an ordered list
//! of configuration strategies. Descriptors also carry the per-pass
//! lifecycle status, the only field the resolver mutates.

use std::fmt;
use std::sync::Arc;

use crate::identity::ComponentId;
use crate::ports::{AbsentConstruction, ConfigurationStrategy, ConstructionStrategy};

/// Lifecycle status of a component within one resolution pass.
///
/// Transitions exactly once, `Initializing` to `Created`, and never
/// reverts. A component is `Created` only after its instance is
/// constructed, stored, and every configuration strategy has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    /// Registered; no instance in the store yet
    Initializing,
    /// Instance constructed, configured, and stored
    Created,
}

impl ComponentStatus {
    /// Whether the component finished materialization
    pub fn is_created(self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Blueprint for one component.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::{ComponentDescriptor, ComponentId, ComponentStatus};
/// use wirebox_domain::ports::NullaryConstruction;
///
/// struct Telemetry;
///
/// let descriptor = ComponentDescriptor::builder(ComponentId::of::<Telemetry>())
///     .constructed_with(NullaryConstruction::new(|| Telemetry))
///     .build();
///
/// assert!(descriptor.is_independent());
/// assert_eq!(descriptor.status(), ComponentStatus::Initializing);
/// ```
pub struct ComponentDescriptor {
    identity: ComponentId,
    dependencies: Vec<ComponentId>,
    construction: Arc<dyn ConstructionStrategy>,
    configuration: Vec<Arc<dyn ConfigurationStrategy>>,
    status: ComponentStatus,
}

impl ComponentDescriptor {
    /// Start building a descriptor for `identity`
    pub fn builder(identity: impl Into<ComponentId>) -> DescriptorBuilder {
        DescriptorBuilder {
            identity: identity.into(),
            dependencies: Vec::new(),
            construction: None,
            configuration: Vec::new(),
        }
    }

    /// The component's unique identity
    pub fn identity(&self) -> &ComponentId {
        &self.identity
    }

    /// Declared dependencies, in declaration order
    pub fn dependencies(&self) -> &[ComponentId] {
        &self.dependencies
    }

    /// Whether the descriptor declares no dependencies
    pub fn is_independent(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Whether `identity` appears among the declared dependencies
    pub fn depends_on(&self, identity: &ComponentId) -> bool {
        self.dependencies.contains(identity)
    }

    /// The construction strategy
    pub fn construction(&self) -> &Arc<dyn ConstructionStrategy> {
        &self.construction
    }

    /// Configuration strategies, in declared order
    pub fn configuration(&self) -> &[Arc<dyn ConfigurationStrategy>] {
        &self.configuration
    }

    /// Current lifecycle status
    pub fn status(&self) -> ComponentStatus {
        self.status
    }

    /// Mark the component created. One-way; called once per pass, after
    /// construction, storage, and configuration have all completed.
    pub fn mark_created(&mut self) {
        debug_assert_eq!(self.status, ComponentStatus::Initializing);
        self.status = ComponentStatus::Created;
    }

    /// Rewrite every dependency equal to `from` into `to`.
    ///
    /// Used by binding resolution during container assembly, before the
    /// resolver runs; dependencies naming an abstraction are retargeted
    /// at the bound concrete component.
    pub fn retarget_dependency(&mut self, from: &ComponentId, to: &ComponentId) {
        for dependency in &mut self.dependencies {
            if dependency == from {
                *dependency = to.clone();
            }
        }
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("identity", &self.identity)
            .field("dependencies", &self.dependencies)
            .field("configuration_steps", &self.configuration.len())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ComponentDescriptor`].
///
/// A descriptor built without [`constructed_with`](Self::constructed_with)
/// carries [`AbsentConstruction`] and fails when resolution reaches it;
/// registration itself stays validation-free.
pub struct DescriptorBuilder {
    identity: ComponentId,
    dependencies: Vec<ComponentId>,
    construction: Option<Arc<dyn ConstructionStrategy>>,
    configuration: Vec<Arc<dyn ConfigurationStrategy>>,
}

impl DescriptorBuilder {
    /// Declare one dependency
    pub fn depends_on(mut self, dependency: impl Into<ComponentId>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    /// Declare several dependencies, preserving order
    pub fn depends_on_all<I>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ComponentId>,
    {
        self.dependencies.extend(dependencies.into_iter().map(Into::into));
        self
    }

    /// Set the construction strategy
    pub fn constructed_with(mut self, strategy: impl ConstructionStrategy + 'static) -> Self {
        self.construction = Some(Arc::new(strategy));
        self
    }

    /// Append a configuration strategy; declared order is applied order
    pub fn configured_with(mut self, strategy: impl ConfigurationStrategy + 'static) -> Self {
        self.configuration.push(Arc::new(strategy));
        self
    }

    /// Finish the descriptor with status `Initializing`
    pub fn build(self) -> ComponentDescriptor {
        ComponentDescriptor {
            identity: self.identity,
            dependencies: self.dependencies,
            construction: self
                .construction
                .unwrap_or_else(|| Arc::new(AbsentConstruction)),
            configuration: self.configuration,
            status: ComponentStatus::Initializing,
        }
    }
}
