//! Unit tests for descriptor materialization building blocks
//!
//! Drives a descriptor through the construct, store, configure, mark
//! sequence by hand, the same sequence the resolver performs per
//! component.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wirebox_domain::ports::{FactoryConstruction, NullaryConstruction, SlotInjection};
    use wirebox_domain::{ComponentDescriptor, ComponentId, ComponentStatus, InstanceStore, Slot};

    struct Settings {
        retries: u32,
    }

    struct Notifier {
        settings: Slot<Settings>,
    }

    struct Dispatcher {
        notifier: Arc<Notifier>,
    }

    #[test]
    fn test_manual_materialization_sequence() {
        let settings_id = ComponentId::of::<Settings>();
        let notifier_id = ComponentId::of::<Notifier>();
        let dispatcher_id = ComponentId::of::<Dispatcher>();

        let mut descriptors = vec![
            ComponentDescriptor::builder(settings_id.clone())
                .constructed_with(NullaryConstruction::new(|| Settings { retries: 3 }))
                .build(),
            ComponentDescriptor::builder(notifier_id.clone())
                .depends_on(settings_id.clone())
                .constructed_with(NullaryConstruction::new(|| Notifier {
                    settings: Slot::new(),
                }))
                .configured_with(SlotInjection::new(settings_id.clone(), |n: &Notifier| {
                    &n.settings
                }))
                .build(),
            {
                let notifier_id = notifier_id.clone();
                ComponentDescriptor::builder(dispatcher_id.clone())
                    .depends_on(notifier_id.clone())
                    .constructed_with(FactoryConstruction::new(move |store: &InstanceStore| {
                        Ok(Dispatcher {
                            notifier: store.demand::<Notifier>(&notifier_id)?,
                        })
                    }))
                    .build()
            },
        ];

        let mut store = InstanceStore::new();
        for descriptor in &mut descriptors {
            let instance = descriptor
                .construction()
                .construct(descriptor.identity(), &store)
                .unwrap();
            store.insert(descriptor.identity().clone(), instance).unwrap();
            let stored = store.get(descriptor.identity()).unwrap().clone();
            for step in descriptor.configuration() {
                step.configure(&stored, &store).unwrap();
            }
            descriptor.mark_created();
        }

        assert!(descriptors.iter().all(|d| d.status() == ComponentStatus::Created));

        let notifier = store.demand::<Notifier>(&notifier_id).unwrap();
        assert_eq!(notifier.settings.demand().unwrap().retries, 3);

        let dispatcher = store.demand::<Dispatcher>(&dispatcher_id).unwrap();
        assert!(dispatcher.notifier.settings.is_filled());
    }
}
