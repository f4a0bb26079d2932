use std::fmt::Display;

use crate::apps::v1alpha1::{StatefulSet, StatefulSetSpec, StatefulSetStatus};

pub trait ObservedGeneration {
    /// The generation the controller last acted on, `None` until it has reported status.
    fn observed_generation(&self) -> Option<i64>;
}

macro_rules! impl_observed_generation {
    ($r:ident) => {
        impl ObservedGeneration for $r {
            fn observed_generation(&self) -> Option<i64> {
                self.status.as_ref().and_then(|s| s.observed_generation)
            }
        }
    };
}

impl_observed_generation!(StatefulSet);

/// Get the desired state of the resource, typically the `spec`.
pub trait Spec {
    type Spec: PartialEq;
    fn spec(&self) -> &Self::Spec;
}

macro_rules! impl_spec {
    ($r:ident, $spec:ident) => {
        impl Spec for $r {
            type Spec = $spec;
            fn spec(&self) -> &Self::Spec {
                &self.spec
            }
        }
    };
}

impl_spec!(StatefulSet, StatefulSetSpec);

/// Get the observed state of the resource, if the controller has written one.
pub trait Status {
    type Status: PartialEq;
    fn status(&self) -> Option<&Self::Status>;
}

macro_rules! impl_status {
    ($r:ident, $status:ident) => {
        impl Status for $r {
            type Status = $status;
            fn status(&self) -> Option<&Self::Status> {
                self.status.as_ref()
            }
        }
    };
}

impl_status!(StatefulSet, StatefulSetStatus);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionKind {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
}

impl GroupVersionKind {
    pub fn group_version(&self) -> GroupVersion {
        GroupVersion {
            group: self.group,
            version: self.version,
        }
    }

    pub fn api_version(&self) -> String {
        self.group_version().to_string()
    }

    pub fn matches(&self, api_version: &str, kind: &str) -> bool {
        self.kind == kind && self.api_version() == api_version
    }
}

impl Display for GroupVersionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersion {
    pub group: &'static str,
    pub version: &'static str,
}

impl GroupVersion {
    pub const fn with_kind(self, kind: &'static str) -> GroupVersionKind {
        GroupVersionKind {
            group: self.group,
            version: self.version,
            kind,
        }
    }
}

impl Display for GroupVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.group, self.version) {
            ("", version) => write!(f, "{}", version),
            (group, "") => write!(f, "{}", group),
            (group, version) => write!(f, "{}/{}", group, version),
        }
    }
}
