//! CustomResourceDefinition manifests for the kinds of this crate.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceColumnDefinition, CustomResourceDefinition, CustomResourceDefinitionNames,
    CustomResourceDefinitionSpec, CustomResourceDefinitionVersion, CustomResourceSubresourceScale,
    CustomResourceSubresourceStatus, CustomResourceSubresources, CustomResourceValidation,
    JSONSchemaProps,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::{ListableResource, Resource};
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use std::collections::BTreeMap;
use tracing::debug;

use crate::api::APIObject;
use crate::apps::v1alpha1::{StatefulSet, StatefulSetSpec, StatefulSetStatus};
use crate::error::Result;

fn column(name: &str, type_: &str, json_path: &str, description: &str) -> CustomResourceColumnDefinition {
    CustomResourceColumnDefinition {
        name: name.to_owned(),
        type_: type_.to_owned(),
        json_path: json_path.to_owned(),
        description: Some(description.to_owned()),
        ..Default::default()
    }
}

fn typed(type_: &str) -> JSONSchemaProps {
    JSONSchemaProps {
        type_: Some(type_.to_owned()),
        ..Default::default()
    }
}

/// OpenAPI v3 schema of `T` with every subschema inlined, as CRDs require.
pub fn schema_for<T: JsonSchema>() -> Result<JSONSchemaProps> {
    let gen = SchemaSettings::openapi3()
        .with(|s| {
            s.inline_subschemas = true;
            s.meta_schema = None;
        })
        .into_generator();
    let schema = gen.into_root_schema_for::<T>();
    Ok(serde_json::from_value(serde_json::to_value(schema)?)?)
}

fn root_schema(mut spec: JSONSchemaProps, mut status: JSONSchemaProps) -> JSONSchemaProps {
    // The root schema carries no titles, only the objects themselves.
    spec.title = None;
    status.title = None;

    if let Some(conditions) = status
        .properties
        .as_mut()
        .and_then(|p| p.get_mut("conditions"))
    {
        conditions.x_kubernetes_list_type = Some("map".to_owned());
        conditions.x_kubernetes_list_map_keys = Some(vec!["type".to_owned()]);
    }

    let mut properties = BTreeMap::new();
    properties.insert("apiVersion".to_owned(), typed("string"));
    properties.insert("kind".to_owned(), typed("string"));
    properties.insert("metadata".to_owned(), typed("object"));
    properties.insert("spec".to_owned(), spec);
    properties.insert("status".to_owned(), status);

    JSONSchemaProps {
        type_: Some("object".to_owned()),
        properties: Some(properties),
        required: Some(vec!["spec".to_owned()]),
        ..Default::default()
    }
}

pub fn statefulset_crd() -> Result<CustomResourceDefinition> {
    let schema = root_schema(
        schema_for::<StatefulSetSpec>()?,
        schema_for::<StatefulSetStatus>()?,
    );

    let columns = vec![
        column("DESIRED", "integer", ".spec.replicas", "The desired number of pods."),
        column("CURRENT", "integer", ".status.replicas", "The number of currently all pods."),
        column("UPDATED", "integer", ".status.updatedReplicas", "The number of pods updated."),
        column("READY", "integer", ".status.readyReplicas", "The number of pods ready."),
        column(
            "AGE",
            "date",
            ".metadata.creationTimestamp",
            "CreationTimestamp is a timestamp representing the server time when this object was created. \
             It is not guaranteed to be set in happens-before order across separate operations. \
             Clients may not set this value. It is represented in RFC3339 form and is in UTC.",
        ),
    ];

    let subresources = CustomResourceSubresources {
        status: Some(CustomResourceSubresourceStatus(serde_json::json!({}))),
        scale: Some(CustomResourceSubresourceScale {
            spec_replicas_path: ".spec.replicas".to_owned(),
            status_replicas_path: ".status.replicas".to_owned(),
            label_selector_path: Some(".status.labelSelector".to_owned()),
        }),
    };

    let name = format!("{}.{}", StatefulSet::URL_PATH_SEGMENT, StatefulSet::GROUP);
    debug!(%name, "generating custom resource definition");

    Ok(CustomResourceDefinition {
        metadata: ObjectMeta {
            name: Some(name),
            ..Default::default()
        },
        spec: CustomResourceDefinitionSpec {
            group: StatefulSet::GROUP.to_owned(),
            names: CustomResourceDefinitionNames {
                kind: StatefulSet::KIND.to_owned(),
                list_kind: Some(StatefulSet::LIST_KIND.to_owned()),
                plural: StatefulSet::URL_PATH_SEGMENT.to_owned(),
                singular: Some(StatefulSet::SINGULAR.to_owned()),
                short_names: Some(
                    StatefulSet::SHORT_NAMES
                        .iter()
                        .map(|s| (*s).to_owned())
                        .collect(),
                ),
                categories: None,
            },
            scope: "Namespaced".to_owned(),
            versions: vec![CustomResourceDefinitionVersion {
                name: StatefulSet::VERSION.to_owned(),
                served: true,
                storage: true,
                schema: Some(CustomResourceValidation {
                    open_api_v3_schema: Some(schema),
                }),
                subresources: Some(subresources),
                additional_printer_columns: Some(columns),
                ..Default::default()
            }],
            ..Default::default()
        },
        status: None,
    })
}
