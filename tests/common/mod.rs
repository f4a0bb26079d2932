#![allow(dead_code)]

use k8s_openapi::api::apps::v1::StatefulSetCondition;
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta, Time};
use k8s_openapi::chrono::{TimeZone, Utc};
use maplit::btreemap;
use workload_api::apps::v1alpha1::{StatefulSet, StatefulSetSpec};

pub fn new_statefulset(name: &str, namespace: &str, replicas: i32) -> StatefulSet {
    let test_labels = btreemap! {"name".to_owned() => "test".to_owned()};
    StatefulSet {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            namespace: Some(namespace.to_owned()),
            ..Default::default()
        },
        spec: StatefulSetSpec {
            replicas: Some(replicas),
            selector: LabelSelector {
                match_labels: Some(test_labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(test_labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: "fake".to_owned(),
                        image: Some("fake".to_owned()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            service_name: name.to_owned(),
            ..Default::default()
        },
        status: None,
    }
}

/// A condition with a fixed, whole-second transition time so it survives encoding.
pub fn condition(cond_type: &str, status: &str, reason: &str, minute: u32) -> StatefulSetCondition {
    StatefulSetCondition {
        type_: cond_type.to_owned(),
        status: status.to_owned(),
        reason: Some(reason.to_owned()),
        message: None,
        last_transition_time: Some(Time(
            Utc.with_ymd_and_hms(2024, 1, 2, 3, minute, 0).unwrap(),
        )),
    }
}
