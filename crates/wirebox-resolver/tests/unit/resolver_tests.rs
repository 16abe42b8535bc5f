//! Unit tests for staged graph resolution
//!
//! Covers the ordering guarantees: zero-dependency completeness, chains,
//! diamonds, at-most-once construction, and configuration sequencing.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use wirebox_domain::ports::{
        FactoryConstruction, NullaryConstruction, SetterInjection, SlotInjection,
    };
    use wirebox_domain::{ComponentDescriptor, ComponentId, ComponentStatus, InstanceStore, Slot};
    use wirebox_resolver::{DescriptorRegistry, GraphResolver};

    type BuildLog = Arc<Mutex<Vec<String>>>;

    /// Descriptor whose construction appends its identity to `log`
    fn logged(id: &str, deps: &[&str], log: &BuildLog) -> ComponentDescriptor {
        let log = Arc::clone(log);
        let name = id.to_string();
        let mut builder = ComponentDescriptor::builder(id).constructed_with(
            NullaryConstruction::new(move || log.lock().unwrap().push(name.clone())),
        );
        for dep in deps {
            builder = builder.depends_on(*dep);
        }
        builder.build()
    }

    fn resolve(registry: &mut DescriptorRegistry) -> (InstanceStore, wirebox_domain::Result<()>) {
        let mut instances = InstanceStore::new();
        let outcome = GraphResolver::new().resolve(registry, &mut instances);
        (instances, outcome)
    }

    #[test]
    fn test_zero_dependency_components_all_materialize() {
        let log: BuildLog = Arc::default();
        let mut registry = DescriptorRegistry::new();
        for id in ["metrics", "clock", "rng"] {
            registry.register(logged(id, &[], &log));
        }

        let (instances, outcome) = resolve(&mut registry);
        outcome.unwrap();

        assert_eq!(instances.len(), 3);
        assert!(registry.iter().all(|d| d.status() == ComponentStatus::Created));

        let mut built = log.lock().unwrap().clone();
        built.sort();
        assert_eq!(built, ["clock", "metrics", "rng"]);
    }

    #[test]
    fn test_linear_chain_builds_dependencies_first() {
        // Registration order is the reverse of dependency order; the
        // build order must come from the graph, not the registry.
        let log: BuildLog = Arc::default();
        let mut registry = DescriptorRegistry::new();
        registry.register(logged("c", &["b"], &log));
        registry.register(logged("b", &["a"], &log));
        registry.register(logged("a", &[], &log));

        let (instances, outcome) = resolve(&mut registry);
        outcome.unwrap();

        assert_eq!(instances.len(), 3);
        assert_eq!(*log.lock().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_diamond_materializes_each_exactly_once() {
        let log: BuildLog = Arc::default();
        let mut registry = DescriptorRegistry::new();
        registry.register(logged("root", &[], &log));
        registry.register(logged("left", &["root"], &log));
        registry.register(logged("right", &["root"], &log));
        registry.register(logged("sink", &["left", "right"], &log));

        let (instances, outcome) = resolve(&mut registry);
        outcome.unwrap();

        let built = log.lock().unwrap().clone();
        assert_eq!(built.len(), 4);
        assert_eq!(built[0], "root");
        assert_eq!(built[3], "sink");
        assert_eq!(instances.len(), 4);

        // Shared dependency was constructed once, not once per dependent.
        assert_eq!(built.iter().filter(|id| *id == "root").count(), 1);
    }

    #[test]
    fn test_dependent_construction_sees_dependency_instance() {
        struct Config {
            port: u16,
        }
        struct Listener {
            port: u16,
        }

        let config_id = ComponentId::of::<Config>();
        let mut registry = DescriptorRegistry::new();
        registry.register(
            ComponentDescriptor::builder(config_id.clone())
                .constructed_with(NullaryConstruction::new(|| Config { port: 7070 }))
                .build(),
        );
        let wanted = config_id.clone();
        registry.register(
            ComponentDescriptor::builder(ComponentId::of::<Listener>())
                .depends_on(config_id)
                .constructed_with(FactoryConstruction::new(move |store: &InstanceStore| {
                    Ok(Listener {
                        port: store.demand::<Config>(&wanted)?.port,
                    })
                }))
                .build(),
        );

        let (instances, outcome) = resolve(&mut registry);
        outcome.unwrap();
        assert_eq!(instances.lookup::<Listener>().unwrap().port, 7070);
    }

    #[test]
    fn test_configuration_runs_in_declared_order_after_construction() {
        let trace: BuildLog = Arc::default();
        let during_construction = Arc::clone(&trace);
        let first = Arc::clone(&trace);
        let second = Arc::clone(&trace);

        let mut registry = DescriptorRegistry::new();
        registry.register(
            ComponentDescriptor::builder("staged")
                .constructed_with(NullaryConstruction::new(move || {
                    during_construction.lock().unwrap().push("construct".into());
                }))
                .configured_with(SetterInjection::new(move |_target: &(), _store| {
                    first.lock().unwrap().push("configure-1".into());
                    Ok(())
                }))
                .configured_with(SetterInjection::new(move |_target: &(), _store| {
                    second.lock().unwrap().push("configure-2".into());
                    Ok(())
                }))
                .build(),
        );

        let (_, outcome) = resolve(&mut registry);
        outcome.unwrap();
        assert_eq!(
            *trace.lock().unwrap(),
            ["construct", "configure-1", "configure-2"]
        );
        assert!(
            registry
                .get(&ComponentId::new("staged"))
                .unwrap()
                .status()
                .is_created()
        );
    }

    #[test]
    fn test_slot_injection_across_phases() {
        struct Settings {
            label: &'static str,
        }
        struct Banner {
            settings: Slot<Settings>,
        }

        let settings_id = ComponentId::of::<Settings>();
        let banner_id = ComponentId::of::<Banner>();

        let mut registry = DescriptorRegistry::new();
        registry.register(
            ComponentDescriptor::builder(settings_id.clone())
                .constructed_with(NullaryConstruction::new(|| Settings { label: "ready" }))
                .build(),
        );
        registry.register(
            ComponentDescriptor::builder(banner_id.clone())
                .depends_on(settings_id.clone())
                .constructed_with(NullaryConstruction::new(|| Banner {
                    settings: Slot::new(),
                }))
                .configured_with(SlotInjection::new(settings_id, |banner: &Banner| {
                    &banner.settings
                }))
                .build(),
        );

        let (instances, outcome) = resolve(&mut registry);
        outcome.unwrap();

        let banner = instances.demand::<Banner>(&banner_id).unwrap();
        assert_eq!(banner.settings.demand().unwrap().label, "ready");
    }

    #[test]
    fn test_zero_dependency_component_still_gets_configured() {
        // Independent components go through the same materialization
        // sequence as dependent ones, configuration included.
        let trace: BuildLog = Arc::default();
        let probe = Arc::clone(&trace);

        let mut registry = DescriptorRegistry::new();
        registry.register(
            ComponentDescriptor::builder("standalone")
                .constructed_with(NullaryConstruction::new(|| ()))
                .configured_with(SetterInjection::new(move |_target: &(), _store| {
                    probe.lock().unwrap().push("configured".into());
                    Ok(())
                }))
                .build(),
        );

        let (_, outcome) = resolve(&mut registry);
        outcome.unwrap();
        assert_eq!(*trace.lock().unwrap(), ["configured"]);
    }
}
