use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, ObjectMeta};
use k8s_openapi::NamespaceResourceScope;
use k8s_openapi::Resource;

use crate::apps::v1alpha1::StatefulSet;

/// Discovery information for a kind, as the API server would list it for its group version.
pub trait APIObject: Resource {
    const SINGULAR: &'static str;
    const SHORT_NAMES: &'static [&'static str];

    fn api_resource() -> APIResource;
}

macro_rules! impl_resource {
    ($r:ident, $scope:ident, $apiversion:expr, $group:expr, $kind:expr, $version:expr, $urlpathsegment:expr) => {
        impl Resource for $r {
            type Scope = $scope;

            const API_VERSION: &'static str = $apiversion;
            const GROUP: &'static str = $group;
            const KIND: &'static str = $kind;
            const VERSION: &'static str = $version;
            const URL_PATH_SEGMENT: &'static str = $urlpathsegment;
        }
    };
}

impl_resource!(
    StatefulSet,
    NamespaceResourceScope,
    "apps.kruise.io/v1alpha1",
    "apps.kruise.io",
    "StatefulSet",
    "v1alpha1",
    "statefulsets"
);

macro_rules! impl_listable {
    ($r:ident, $kind:expr) => {
        impl k8s_openapi::ListableResource for $r {
            const LIST_KIND: &'static str = $kind;
        }
    };
}

impl_listable!(StatefulSet, "StatefulSetList");

macro_rules! impl_metadata {
    ($r:ident) => {
        impl k8s_openapi::Metadata for $r {
            type Ty = ObjectMeta;

            fn metadata(&self) -> &Self::Ty {
                &self.metadata
            }

            fn metadata_mut(&mut self) -> &mut Self::Ty {
                &mut self.metadata
            }
        }
    };
}

impl_metadata!(StatefulSet);

macro_rules! impl_api_object {
    ($r:ident, $singular:expr, [$($short:expr),*]) => {
        impl APIObject for $r {
            const SINGULAR: &'static str = $singular;
            const SHORT_NAMES: &'static [&'static str] = &[$($short),*];

            fn api_resource() -> APIResource {
                APIResource {
                    categories: None,
                    group: Some($r::GROUP.to_owned()),
                    kind: $r::KIND.to_owned(),
                    name: $r::URL_PATH_SEGMENT.to_owned(),
                    namespaced: true,
                    short_names: Some(Self::SHORT_NAMES.iter().map(|s| (*s).to_owned()).collect()),
                    singular_name: Self::SINGULAR.to_owned(),
                    storage_version_hash: None,
                    verbs: vec![
                        "create".to_owned(),
                        "delete".to_owned(),
                        "deletecollection".to_owned(),
                        "get".to_owned(),
                        "list".to_owned(),
                        "patch".to_owned(),
                        "update".to_owned(),
                        "watch".to_owned(),
                    ],
                    version: Some($r::VERSION.to_owned()),
                }
            }
        }
    };
}

impl_api_object!(StatefulSet, "statefulset", ["sts", "asts"]);
