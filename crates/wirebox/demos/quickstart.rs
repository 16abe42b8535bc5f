//! Quickstart demo: assemble a small component graph and look components up.
//!
//! Shows the registration styles working together:
//! - compile-time self-registration (`system-clock`, providing `clock`)
//! - manual descriptors whose factories read their dependencies
//! - a logical dependency (`clock`) rewritten to its implementation
//!
//! Run with: `cargo run -p wirebox --example quickstart`

use std::sync::Arc;

use wirebox::domain::ports::{FactoryConstruction, NullaryConstruction};
use wirebox::{
    COMPONENT_REGISTRATIONS, ComponentDescriptor, ComponentRegistration, InstanceStore, Result,
    registered_components,
};

/// Wall-clock time source, self-registered under the logical identity `clock`
struct SystemClock;

impl SystemClock {
    fn unix_seconds(&self) -> u64 {
        std::time::UNIX_EPOCH
            .elapsed()
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

/// Caption for the report line
struct Label {
    text: String,
}

/// Built last: depends on the clock (by logical identity) and the label
struct Reporter {
    clock: Arc<SystemClock>,
    label: Arc<Label>,
}

#[linkme::distributed_slice(COMPONENT_REGISTRATIONS)]
static REGISTER_SYSTEM_CLOCK: ComponentRegistration = ComponentRegistration {
    identity: "system-clock",
    description: "Wall-clock time source",
    provides: &["clock"],
    descriptor: system_clock_descriptor,
};

fn system_clock_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::builder("system-clock")
        .constructed_with(NullaryConstruction::new(|| SystemClock))
        .build()
}

fn main() -> Result<()> {
    // Configuration from wirebox.toml / WIREBOX_* variables, logging per
    // that configuration.
    let builder = wirebox::bootstrap()?;

    println!("self-registered components:");
    for (identity, description) in registered_components() {
        println!("  {identity}: {description}");
    }

    let container = builder
        .include_registered()
        .register(
            ComponentDescriptor::builder("label")
                .constructed_with(NullaryConstruction::new(|| Label {
                    text: "uptime report".to_string(),
                }))
                .build(),
        )
        .register(
            ComponentDescriptor::builder("reporter")
                .depends_on("clock")
                .depends_on("label")
                .constructed_with(FactoryConstruction::new(|instances: &InstanceStore| {
                    Ok(Reporter {
                        clock: instances.lookup::<SystemClock>()?,
                        label: instances.lookup::<Label>()?,
                    })
                }))
                .build(),
        )
        .build()?;

    let reporter: Arc<Reporter> = container.get()?;
    println!("{}: {}", reporter.label.text, reporter.clock.unix_seconds());

    println!("components, in creation order:");
    for identity in container.component_ids() {
        println!("  {identity}");
    }

    Ok(())
}
