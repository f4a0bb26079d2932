use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;
use workload_api::crd::statefulset_crd;

fn property<'a>(schema: &'a JSONSchemaProps, path: &[&str]) -> &'a JSONSchemaProps {
    path.iter().fold(schema, |schema, key| {
        schema
            .properties
            .as_ref()
            .and_then(|p| p.get(*key))
            .unwrap_or_else(|| panic!("missing property {key}"))
    })
}

#[test_log::test]
fn test_crd_names() {
    let crd = statefulset_crd().unwrap();
    assert_eq!(
        crd.metadata.name.as_deref(),
        Some("statefulsets.apps.kruise.io")
    );
    assert_eq!(crd.spec.group, "apps.kruise.io");
    assert_eq!(crd.spec.scope, "Namespaced");

    let names = &crd.spec.names;
    assert_eq!(names.kind, "StatefulSet");
    assert_eq!(names.plural, "statefulsets");
    assert_eq!(names.singular.as_deref(), Some("statefulset"));
    assert_eq!(names.list_kind.as_deref(), Some("StatefulSetList"));
    assert_eq!(
        names.short_names,
        Some(vec!["sts".to_owned(), "asts".to_owned()])
    );
}

#[test_log::test]
fn test_crd_version_and_subresources() {
    let crd = statefulset_crd().unwrap();
    assert_eq!(crd.spec.versions.len(), 1);
    let version = &crd.spec.versions[0];
    assert_eq!(version.name, "v1alpha1");
    assert!(version.served);
    assert!(version.storage);

    let subresources = version.subresources.as_ref().unwrap();
    assert!(subresources.status.is_some());
    let scale = subresources.scale.as_ref().unwrap();
    assert_eq!(scale.spec_replicas_path, ".spec.replicas");
    assert_eq!(scale.status_replicas_path, ".status.replicas");
    assert_eq!(
        scale.label_selector_path.as_deref(),
        Some(".status.labelSelector")
    );

    let columns: Vec<(&str, &str, &str)> = version
        .additional_printer_columns
        .as_ref()
        .unwrap()
        .iter()
        .map(|c| (c.name.as_str(), c.type_.as_str(), c.json_path.as_str()))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("DESIRED", "integer", ".spec.replicas"),
            ("CURRENT", "integer", ".status.replicas"),
            ("UPDATED", "integer", ".status.updatedReplicas"),
            ("READY", "integer", ".status.readyReplicas"),
            ("AGE", "date", ".metadata.creationTimestamp"),
        ]
    );
}

#[test_log::test]
fn test_crd_schema() {
    let crd = statefulset_crd().unwrap();
    let schema = crd.spec.versions[0]
        .schema
        .as_ref()
        .and_then(|s| s.open_api_v3_schema.as_ref())
        .unwrap();

    assert_eq!(schema.type_.as_deref(), Some("object"));
    assert_eq!(schema.required, Some(vec!["spec".to_owned()]));

    let spec = property(schema, &["spec"]);
    let required = spec.required.clone().unwrap_or_default();
    assert!(required.contains(&"selector".to_owned()));
    assert!(required.contains(&"template".to_owned()));
    assert!(!required.contains(&"replicas".to_owned()));

    let max_unavailable = property(
        schema,
        &["spec", "updateStrategy", "rollingUpdate", "maxUnavailable"],
    );
    assert_eq!(max_unavailable.x_kubernetes_int_or_string, Some(true));

    let conditions = property(schema, &["status", "conditions"]);
    assert_eq!(conditions.x_kubernetes_list_type.as_deref(), Some("map"));
    assert_eq!(
        conditions.x_kubernetes_list_map_keys,
        Some(vec!["type".to_owned()])
    );
}

#[test_log::test]
fn test_crd_yaml() {
    let crd = statefulset_crd().unwrap();
    let yaml = serde_yaml::to_string(&crd).unwrap();
    assert!(yaml.contains("kind: CustomResourceDefinition"));
    assert!(yaml.contains("apiVersion: apiextensions.k8s.io/v1"));
}
