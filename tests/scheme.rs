use common::new_statefulset;
use k8s_openapi::NamespaceResourceScope;
use serde_json::json;
use workload_api::apps::v1alpha1::{add_to_scheme, StatefulSet, StatefulSetList, GROUP_VERSION};
use workload_api::resources::GroupVersionKind;
use workload_api::{Error, Scheme};

mod common;

/// Claims the StatefulSet kind without being a StatefulSet.
struct Impostor;

impl k8s_openapi::Resource for Impostor {
    type Scope = NamespaceResourceScope;

    const API_VERSION: &'static str = "apps.kruise.io/v1alpha1";
    const GROUP: &'static str = "apps.kruise.io";
    const KIND: &'static str = "StatefulSet";
    const VERSION: &'static str = "v1alpha1";
    const URL_PATH_SEGMENT: &'static str = "statefulsets";
}

#[test_log::test]
fn test_add_to_scheme_registers_resource_and_list() {
    let mut scheme = Scheme::new();
    assert!(scheme.is_empty());
    add_to_scheme(&mut scheme).unwrap();

    assert_eq!(scheme.len(), 2);
    assert!(scheme.recognizes(&StatefulSet::GVK));
    assert!(scheme.recognizes(&StatefulSet::LIST_GVK));
    assert_eq!(scheme.kind_for::<StatefulSet>(), Some(&StatefulSet::GVK));
    assert_eq!(scheme.kind_for::<StatefulSetList>(), Some(&StatefulSet::LIST_GVK));
    assert_eq!(StatefulSet::GVK.api_version(), GROUP_VERSION.to_string());
}

#[test_log::test]
fn test_add_to_scheme_is_idempotent() {
    let mut scheme = Scheme::new();
    add_to_scheme(&mut scheme).unwrap();
    let before: Vec<(GroupVersionKind, &str)> = scheme
        .known_kinds()
        .map(|e| (e.gvk, e.type_name))
        .collect();

    add_to_scheme(&mut scheme).unwrap();
    add_to_scheme(&mut scheme).unwrap();
    let after: Vec<(GroupVersionKind, &str)> = scheme
        .known_kinds()
        .map(|e| (e.gvk, e.type_name))
        .collect();

    assert_eq!(before, after);
    assert!(!scheme.add_known_type::<StatefulSet>().unwrap());
    assert!(!scheme.add_known_list::<StatefulSet>().unwrap());
}

#[test_log::test]
fn test_conflicting_registration_is_rejected() {
    let mut scheme = workload_api::default_scheme().unwrap();
    let err = scheme.add_known_type::<Impostor>().unwrap_err();
    assert!(matches!(err, Error::KindConflict { .. }), "{err}");
    assert_eq!(scheme.kind_for::<StatefulSet>(), Some(&StatefulSet::GVK));
    assert_eq!(scheme.kind_for::<Impostor>(), None);
}

#[test_log::test]
fn test_api_resource() {
    let scheme = workload_api::default_scheme().unwrap();
    let resource = scheme.api_resource(&StatefulSet::GVK).unwrap();
    assert_eq!(resource.api_version, "apps.kruise.io/v1alpha1");
    assert_eq!(resource.plural, "statefulsets");
    assert_eq!(resource.kind, "StatefulSet");

    let list = scheme.api_resource(&StatefulSet::LIST_GVK).unwrap();
    assert_eq!(list.kind, "StatefulSetList");
    assert_eq!(list.plural, "statefulsets");

    // Generic clients see the same identity.
    assert_eq!(<StatefulSet as kube::core::Resource>::plural(&()), "statefulsets");
    assert_eq!(
        <StatefulSet as kube::core::Resource>::api_version(&()),
        "apps.kruise.io/v1alpha1"
    );
}

#[test_log::test]
fn test_decode_by_kind() {
    let scheme = workload_api::default_scheme().unwrap();
    let statefulset = new_statefulset("test-decode", "default", 3);
    let value = serde_json::to_value(&statefulset).unwrap();

    let decoded: StatefulSet = scheme.decode(value.clone()).unwrap();
    assert_eq!(decoded, statefulset);

    let err = scheme.decode::<StatefulSetList>(value).unwrap_err();
    assert!(matches!(err, Error::KindMismatch { .. }), "{err}");
}

#[test_log::test]
fn test_decode_rejects_unregistered_documents() {
    let scheme = workload_api::default_scheme().unwrap();

    let err = scheme
        .decode::<StatefulSet>(json!({"apiVersion": "apps/v1", "kind": "StatefulSet", "spec": {}}))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownKind { .. }), "{err}");

    let err = scheme
        .decode::<StatefulSet>(json!({"kind": "StatefulSet", "spec": {}}))
        .unwrap_err();
    assert!(matches!(err, Error::MissingTypeMeta), "{err}");

    let empty = Scheme::new();
    let value = serde_json::to_value(new_statefulset("test-empty", "default", 1)).unwrap();
    assert!(matches!(
        empty.decode::<StatefulSet>(value),
        Err(Error::UnknownKind { .. })
    ));
}

#[test_log::test]
fn test_decode_yaml_list() {
    let scheme = workload_api::default_scheme().unwrap();
    let doc = r#"
apiVersion: apps.kruise.io/v1alpha1
kind: StatefulSetList
metadata: {}
items:
  - apiVersion: apps.kruise.io/v1alpha1
    kind: StatefulSet
    metadata:
      name: a
    spec:
      selector:
        matchLabels:
          app: a
      template:
        metadata:
          labels:
            app: a
"#;
    let list: StatefulSetList = scheme.decode_yaml(doc).unwrap();
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].metadata.name.as_deref(), Some("a"));
    assert_eq!(list.items[0].spec.replicas, None);
}
