//! Unit tests for parallel frontier construction
//!
//! Parallel mode only changes where construction strategies run. Store
//! writes, configuration, and status transitions stay on the calling
//! thread, and the at-most-once guarantee must hold unchanged.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::thread::{self, ThreadId};

    use wirebox_domain::ports::{FactoryConstruction, NullaryConstruction, SetterInjection};
    use wirebox_domain::{ComponentDescriptor, ComponentId, ComponentStatus, Error, InstanceStore};
    use wirebox_resolver::{DescriptorRegistry, GraphResolver};

    fn unit_component(id: &str) -> ComponentDescriptor {
        ComponentDescriptor::builder(id)
            .constructed_with(NullaryConstruction::new(|| ()))
            .build()
    }

    #[test]
    fn test_wide_frontier_constructs_each_exactly_once() {
        const WIDTH: usize = 24;

        let counters: Vec<Arc<AtomicUsize>> =
            (0..WIDTH).map(|_| Arc::new(AtomicUsize::new(0))).collect();

        let mut registry = DescriptorRegistry::new();
        registry.register(unit_component("base"));
        for (i, counter) in counters.iter().enumerate() {
            let counter = Arc::clone(counter);
            registry.register(
                ComponentDescriptor::builder(format!("worker-{i}"))
                    .depends_on("base")
                    .constructed_with(NullaryConstruction::new(move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }))
                    .build(),
            );
        }

        let mut instances = InstanceStore::new();
        GraphResolver::new()
            .with_parallel(true)
            .resolve(&mut registry, &mut instances)
            .unwrap();

        assert_eq!(instances.len(), WIDTH + 1);
        assert!(counters.iter().all(|c| c.load(Ordering::SeqCst) == 1));
        assert!(registry.iter().all(|d| d.status() == ComponentStatus::Created));
    }

    #[test]
    fn test_configuration_runs_on_the_calling_thread() {
        let caller = thread::current().id();
        let seen: Arc<Mutex<Vec<ThreadId>>> = Arc::default();

        let mut registry = DescriptorRegistry::new();
        for i in 0..8 {
            let seen = Arc::clone(&seen);
            registry.register(
                ComponentDescriptor::builder(format!("component-{i}"))
                    .constructed_with(NullaryConstruction::new(|| ()))
                    .configured_with(SetterInjection::new(move |_: &(), _| {
                        seen.lock().unwrap().push(thread::current().id());
                        Ok(())
                    }))
                    .build(),
            );
        }

        let mut instances = InstanceStore::new();
        GraphResolver::new()
            .with_parallel(true)
            .resolve(&mut registry, &mut instances)
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 8);
        assert!(seen.iter().all(|id| *id == caller));
    }

    #[test]
    fn test_failed_frontier_commits_nothing() {
        let mut registry = DescriptorRegistry::new();
        registry.register(unit_component("base"));
        for i in 0..4 {
            registry.register(
                ComponentDescriptor::builder(format!("ok-{i}"))
                    .depends_on("base")
                    .constructed_with(NullaryConstruction::new(|| ()))
                    .build(),
            );
        }
        registry.register(
            ComponentDescriptor::builder("faulty")
                .depends_on("base")
                .constructed_with(FactoryConstruction::new(|_: &InstanceStore| {
                    Err::<(), Error>(Error::internal("refused"))
                }))
                .build(),
        );

        let mut instances = InstanceStore::new();
        let err = GraphResolver::new()
            .with_parallel(true)
            .resolve(&mut registry, &mut instances)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Construction { identity, .. } if identity.as_str() == "faulty"
        ));

        // The failed frontier inserted nothing; only phase 1 survives.
        assert_eq!(instances.len(), 1);
        assert!(instances.contains(&ComponentId::new("base")));
        assert_eq!(
            registry.get(&ComponentId::new("ok-0")).unwrap().status(),
            ComponentStatus::Initializing
        );
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        fn arithmetic_graph() -> DescriptorRegistry {
            let mut registry = DescriptorRegistry::new();
            registry.register(
                ComponentDescriptor::builder("root")
                    .constructed_with(NullaryConstruction::new(|| 7u32))
                    .build(),
            );
            let root = ComponentId::new("root");
            registry.register(
                ComponentDescriptor::builder("left")
                    .depends_on("root")
                    .constructed_with(FactoryConstruction::new({
                        let root = root.clone();
                        move |store: &InstanceStore| Ok(*store.demand::<u32>(&root)? * 2)
                    }))
                    .build(),
            );
            registry.register(
                ComponentDescriptor::builder("right")
                    .depends_on("root")
                    .constructed_with(FactoryConstruction::new({
                        let root = root.clone();
                        move |store: &InstanceStore| Ok(*store.demand::<u32>(&root)? + 3)
                    }))
                    .build(),
            );
            registry.register(
                ComponentDescriptor::builder("sink")
                    .depends_on_all(["left", "right"])
                    .constructed_with(FactoryConstruction::new(|store: &InstanceStore| {
                        let left = store.demand::<u32>(&ComponentId::new("left"))?;
                        let right = store.demand::<u32>(&ComponentId::new("right"))?;
                        Ok(*left + *right)
                    }))
                    .build(),
            );
            registry
        }

        let mut sequential = InstanceStore::new();
        GraphResolver::new()
            .resolve(&mut arithmetic_graph(), &mut sequential)
            .unwrap();

        let mut parallel = InstanceStore::new();
        GraphResolver::new()
            .with_parallel(true)
            .resolve(&mut arithmetic_graph(), &mut parallel)
            .unwrap();

        let sink = ComponentId::new("sink");
        assert_eq!(
            sequential.demand::<u32>(&sink).unwrap(),
            parallel.demand::<u32>(&sink).unwrap()
        );
        assert_eq!(*parallel.demand::<u32>(&sink).unwrap(), 24);

        let sequential_ids: Vec<_> = sequential.ids().cloned().collect();
        let parallel_ids: Vec<_> = parallel.ids().cloned().collect();
        assert_eq!(sequential_ids, parallel_ids);
    }
}
