//! Unit tests for container assembly
//!
//! Covers end-to-end building, abstraction bindings, lookup through the
//! container facade, and assembly-time failures.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wirebox_domain::ports::{FactoryConstruction, NullaryConstruction};
    use wirebox_domain::{ComponentDescriptor, ComponentId, Error, InstanceStore};
    use wirebox_infrastructure::ContainerBuilder;
    use wirebox_infrastructure::config::ConfigBuilder;

    struct Settings {
        base_url: String,
    }

    struct HttpClient {
        settings: Arc<Settings>,
    }

    struct SmtpMailer {
        host: String,
    }

    struct NotificationService {
        mailer: Arc<SmtpMailer>,
    }

    fn settings_descriptor() -> ComponentDescriptor {
        ComponentDescriptor::builder("settings")
            .constructed_with(NullaryConstruction::new(|| Settings {
                base_url: "https://api.example.test".to_string(),
            }))
            .build()
    }

    #[test]
    fn test_container_lookup_by_type_and_id() {
        let container = ContainerBuilder::new()
            .register(settings_descriptor())
            .register(
                ComponentDescriptor::builder("client")
                    .depends_on("settings")
                    .constructed_with(FactoryConstruction::new(|instances: &InstanceStore| {
                        let settings =
                            instances.demand::<Settings>(&ComponentId::new("settings"))?;
                        Ok(HttpClient { settings })
                    }))
                    .build(),
            )
            .build()
            .unwrap();

        let client: Arc<HttpClient> = container.get().unwrap();
        assert_eq!(client.settings.base_url, "https://api.example.test");

        let settings: Arc<Settings> = container.get_by_id("settings").unwrap();
        assert_eq!(settings.base_url, "https://api.example.test");

        let ids: Vec<&str> = container.component_ids().map(ComponentId::as_str).collect();
        assert_eq!(ids, ["settings", "client"]);
        assert_eq!(container.len(), 2);
        assert!(!container.is_empty());
    }

    #[test]
    fn test_bind_routes_logical_dependency() {
        let container = ContainerBuilder::new()
            .register(
                ComponentDescriptor::builder("smtp-mailer")
                    .constructed_with(NullaryConstruction::new(|| SmtpMailer {
                        host: "mail.example.test".to_string(),
                    }))
                    .build(),
            )
            .register(
                ComponentDescriptor::builder("notifier")
                    .depends_on("mailer")
                    .constructed_with(FactoryConstruction::new(|instances: &InstanceStore| {
                        Ok(NotificationService {
                            mailer: instances.lookup::<SmtpMailer>()?,
                        })
                    }))
                    .build(),
            )
            .bind("mailer", "smtp-mailer")
            .build()
            .unwrap();

        let notifier: Arc<NotificationService> = container.get().unwrap();
        assert_eq!(notifier.mailer.host, "mail.example.test");

        // The store key stays the concrete identity, not the abstraction.
        let ids: Vec<&str> = container.component_ids().map(ComponentId::as_str).collect();
        assert_eq!(ids, ["smtp-mailer", "notifier"]);
    }

    #[test]
    fn test_unbound_dependency_fails_assembly() {
        let err = ContainerBuilder::new()
            .register(
                ComponentDescriptor::builder("app")
                    .depends_on("storage")
                    .constructed_with(NullaryConstruction::new(|| ()))
                    .build(),
            )
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingBinding { abstraction } if abstraction.as_str() == "storage"
        ));
    }

    #[test]
    fn test_conflicting_bindings_fail_assembly() {
        let err = ContainerBuilder::new()
            .register(
                ComponentDescriptor::builder("smtp-mailer")
                    .constructed_with(NullaryConstruction::new(|| ()))
                    .build(),
            )
            .register(
                ComponentDescriptor::builder("sendmail-mailer")
                    .constructed_with(NullaryConstruction::new(|| ()))
                    .build(),
            )
            .register(
                ComponentDescriptor::builder("notifier")
                    .depends_on("mailer")
                    .constructed_with(NullaryConstruction::new(|| ()))
                    .build(),
            )
            .bind("mailer", "smtp-mailer")
            .bind("mailer", "sendmail-mailer")
            .build()
            .unwrap_err();

        match err {
            Error::AmbiguousBinding {
                abstraction,
                candidates,
            } => {
                assert_eq!(abstraction.as_str(), "mailer");
                let names: Vec<&str> = candidates.iter().map(ComponentId::as_str).collect();
                assert_eq!(names, ["smtp-mailer", "sendmail-mailer"]);
            }
            other => panic!("expected AmbiguousBinding, got {other:?}"),
        }
    }

    #[test]
    fn test_parallel_configuration_flows_into_resolution() {
        let config = ConfigBuilder::new().with_parallel_construction(true).build();

        let mut builder = ContainerBuilder::new().with_config(config);
        for id in ["north", "south", "east", "west"] {
            builder = builder.register(
                ComponentDescriptor::builder(id)
                    .constructed_with(NullaryConstruction::new(|| ()))
                    .build(),
            );
        }
        let container = builder
            .register(
                ComponentDescriptor::builder("compass")
                    .depends_on("north")
                    .depends_on("south")
                    .depends_on("east")
                    .depends_on("west")
                    .constructed_with(NullaryConstruction::new(|| "assembled".to_string()))
                    .build(),
            )
            .build()
            .unwrap();

        assert_eq!(container.len(), 5);
        let compass: Arc<String> = container.get_by_id("compass").unwrap();
        assert_eq!(compass.as_str(), "assembled");
    }

    #[test]
    fn test_construction_failure_surfaces_identity() {
        let err = ContainerBuilder::new()
            .register(
                ComponentDescriptor::builder("flaky")
                    .constructed_with(FactoryConstruction::new(|_: &InstanceStore| {
                        Err::<(), Error>(Error::internal("socket refused"))
                    }))
                    .build(),
            )
            .build()
            .unwrap_err();

        match err {
            Error::Construction { identity, .. } => assert_eq!(identity.as_str(), "flaky"),
            other => panic!("expected Construction, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_builder_yields_empty_container() {
        let container = ContainerBuilder::new().build().unwrap();
        assert!(container.is_empty());
        assert!(matches!(
            container.get::<u32>(),
            Err(Error::NoSuchInstance { .. })
        ));
    }
}
