use k8s_openapi::api::apps::v1::StatefulSetCondition;
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta, Time};
use k8s_openapi::chrono::{SubsecRound, Utc};
use k8s_openapi::Resource;
use schemars::JsonSchema;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

use super::GROUP_VERSION;
use crate::apps::is_default;
use crate::apps::public::{InPlaceUpdateStrategy, UpdatePriorityStrategy};
use crate::intstr::IntOrPercent;
use crate::resources::GroupVersionKind;

/// The largest value admission accepts for `RollingUpdateStatefulSetStrategy::min_ready_seconds`.
pub const MAX_MIN_READY_SECONDS: i32 = 300;

/// A replicated workload whose pods keep a stable identity and storage across updates.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSet {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: StatefulSetSpec,
    #[serde(default)]
    pub status: Option<StatefulSetStatus>,
}

impl StatefulSet {
    pub const GVK: GroupVersionKind = GROUP_VERSION.with_kind("StatefulSet");
    pub const LIST_GVK: GroupVersionKind = GROUP_VERSION.with_kind("StatefulSetList");
}

// apiVersion and kind are constants of the type, written out but never stored.
impl Serialize for StatefulSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 4 + usize::from(self.status.is_some());
        let mut state = serializer.serialize_struct(<Self as Resource>::KIND, len)?;
        state.serialize_field("apiVersion", <Self as Resource>::API_VERSION)?;
        state.serialize_field("kind", <Self as Resource>::KIND)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("spec", &self.spec)?;
        match &self.status {
            Some(status) => state.serialize_field("status", status)?,
            None => state.skip_field("status")?,
        }
        state.end()
    }
}

pub type StatefulSetList = k8s_openapi::List<StatefulSet>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSetSpec {
    // The desired number of pods stamped out from the template, each with its own ordinal.
    // Defaults to 1 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    // Label query over pods that should match the replica count. It must match the pod template's labels.
    pub selector: LabelSelector,

    pub template: PodTemplateSpec,

    // Claims that each pod gets its own copy of. Every claim must be matched by name by a
    // volumeMount in one container of the template.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_claim_templates: Vec<PersistentVolumeClaim>,

    // The governing service, giving pods hostnames of the form pod-specific-string.serviceName.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_management_policy: Option<PodManagementPolicyType>,

    #[serde(default, skip_serializing_if = "is_default")]
    pub update_strategy: StatefulSetUpdateStrategy,

    // Revisions kept besides the current one. Defaults to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum PodManagementPolicyType {
    // Create pods in increasing ordinal order, waiting for each to be ready, and remove them in reverse.
    #[default]
    OrderedReady,
    // Create and delete pods all at once.
    Parallel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSetUpdateStrategy {
    // Defaults to RollingUpdate.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<StatefulSetUpdateStrategyType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RollingUpdateStatefulSetStrategy>,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum StatefulSetUpdateStrategyType {
    #[default]
    RollingUpdate,
    OnDelete,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RollingUpdateStatefulSetStrategy {
    // Ordinal at which the set is partitioned: only pods with an ordinal >= partition are updated.
    // With unorderedUpdate set it is instead the number of pods left on the old revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<i32>,

    // Percentages round down. Only honoured together with the Parallel pod management policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<IntOrPercent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_update_policy: Option<PodUpdateStrategyType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,

    // Present means pods are updated in priority order instead of by ordinal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unordered_update: Option<UnorderedUpdateStrategy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_place_update_strategy: Option<InPlaceUpdateStrategy>,

    // Bounded by MAX_MIN_READY_SECONDS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ready_seconds: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnorderedUpdateStrategy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_strategy: Option<UpdatePriorityStrategy>,
}

/// How a pod is brought to a new revision.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum PodUpdateStrategyType {
    // Delete the pod and create a new one.
    #[default]
    #[serde(rename = "ReCreate")]
    Recreate,
    // Update in place when only images changed, recreate otherwise.
    InPlaceIfPossible,
    // Always update in place; any change beyond images is rejected.
    InPlaceOnly,
}

impl PodUpdateStrategyType {
    pub const ALL: [PodUpdateStrategyType; 3] = [
        PodUpdateStrategyType::Recreate,
        PodUpdateStrategyType::InPlaceIfPossible,
        PodUpdateStrategyType::InPlaceOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PodUpdateStrategyType::Recreate => "ReCreate",
            PodUpdateStrategyType::InPlaceIfPossible => "InPlaceIfPossible",
            PodUpdateStrategyType::InPlaceOnly => "InPlaceOnly",
        }
    }
}

impl Display for PodUpdateStrategyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatefulSetStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,

    // Pods created by the controller.
    #[serde(default)]
    pub replicas: i32,

    // Pods with a Ready condition.
    #[serde(default)]
    pub ready_replicas: i32,

    // Pods that have been ready for at least minReadySeconds.
    #[serde(default)]
    pub available_replicas: i32,

    // Pods at currentRevision, occupying ordinals [0, currentReplicas).
    #[serde(default)]
    pub current_replicas: i32,

    // Pods at updateRevision, occupying ordinals [replicas - updatedReplicas, replicas).
    #[serde(default)]
    pub updated_replicas: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_revision: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_revision: Option<String>,

    // Bumped on hash collisions when naming the newest revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collision_count: Option<i32>,

    // Merged by type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<StatefulSetCondition>,

    // Serialized pod selector, read through the scale subresource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,
}

impl StatefulSetStatus {
    pub fn condition(&self, cond_type: impl AsRef<str>) -> Option<&StatefulSetCondition> {
        let cond_type = cond_type.as_ref();
        self.conditions.iter().find(|c| c.type_ == cond_type)
    }

    /// Merge `condition` by type: an existing condition of the same type is replaced where it
    /// stands, otherwise the condition is appended.
    ///
    /// The transition time of the existing condition is kept when the status did not change.
    pub fn set_condition(&mut self, mut condition: StatefulSetCondition) {
        match self
            .conditions
            .iter_mut()
            .find(|c| c.type_ == condition.type_)
        {
            Some(existing) => {
                if existing.status == condition.status {
                    condition.last_transition_time = existing.last_transition_time.clone();
                }
                *existing = condition;
            }
            None => self.conditions.push(condition),
        }
    }

    pub fn remove_condition(&mut self, cond_type: impl AsRef<str>) {
        let cond_type = cond_type.as_ref();
        self.conditions.retain(|c| c.type_ != cond_type)
    }
}

/// Condition types the controller reports on a StatefulSet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatefulSetConditionType {
    FailedCreatePod,
    FailedUpdatePod,
}

impl StatefulSetConditionType {
    pub const ALL: [StatefulSetConditionType; 2] = [
        StatefulSetConditionType::FailedCreatePod,
        StatefulSetConditionType::FailedUpdatePod,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatefulSetConditionType::FailedCreatePod => "FailedCreatePod",
            StatefulSetConditionType::FailedUpdatePod => "FailedUpdatePod",
        }
    }
}

impl AsRef<str> for StatefulSetConditionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for StatefulSetConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl ConditionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
    }
}

/// Builds a condition stamped with the current time, truncated to the whole seconds `Time` keeps on the wire.
pub fn new_statefulset_condition(
    cond_type: StatefulSetConditionType,
    status: ConditionStatus,
    reason: String,
    message: String,
) -> StatefulSetCondition {
    StatefulSetCondition {
        status: status.as_str().to_owned(),
        type_: cond_type.as_str().to_owned(),
        last_transition_time: Some(Time(Utc::now().trunc_subsecs(0))),
        message: Some(message),
        reason: Some(reason),
    }
}
