use k8s_openapi::{List, ListableResource, Resource};
use kube::core::ApiResource;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::{type_name, TypeId};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::resources::GroupVersionKind;

/// A registered kind and the Rust type documents of that kind decode into.
#[derive(Clone, Debug)]
pub struct KindEntry {
    pub gvk: GroupVersionKind,
    pub type_name: &'static str,
    pub resource: ApiResource,
    type_id: TypeId,
}

/// Mapping from kinds to the Rust types that represent them.
///
/// Built by the hosting process through the `add_to_scheme` functions of each group version,
/// then used to look up kinds and to decode documents into the right type.
#[derive(Clone, Debug, Default)]
pub struct Scheme {
    kinds: BTreeMap<GroupVersionKind, KindEntry>,
}

fn api_resource<K: Resource>() -> ApiResource {
    ApiResource {
        group: K::GROUP.to_owned(),
        version: K::VERSION.to_owned(),
        api_version: K::API_VERSION.to_owned(),
        kind: K::KIND.to_owned(),
        plural: K::URL_PATH_SEGMENT.to_owned(),
    }
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `K` under its kind. Returns whether the kind was newly added.
    pub fn add_known_type<K>(&mut self) -> Result<bool>
    where
        K: Resource + 'static,
    {
        let gvk = GroupVersionKind {
            group: K::GROUP,
            version: K::VERSION,
            kind: K::KIND,
        };
        self.register(KindEntry {
            gvk,
            type_name: type_name::<K>(),
            resource: api_resource::<K>(),
            type_id: TypeId::of::<K>(),
        })
    }

    /// Register `List<K>` under the list kind of `K`. Returns whether the kind was newly added.
    pub fn add_known_list<K>(&mut self) -> Result<bool>
    where
        K: ListableResource + 'static,
    {
        let gvk = GroupVersionKind {
            group: K::GROUP,
            version: K::VERSION,
            kind: K::LIST_KIND,
        };
        let mut resource = api_resource::<K>();
        resource.kind = K::LIST_KIND.to_owned();
        self.register(KindEntry {
            gvk,
            type_name: type_name::<List<K>>(),
            resource,
            type_id: TypeId::of::<List<K>>(),
        })
    }

    fn register(&mut self, entry: KindEntry) -> Result<bool> {
        match self.kinds.get(&entry.gvk) {
            Some(existing) if existing.type_id == entry.type_id => {
                trace!(gvk = %entry.gvk, "kind already registered");
                Ok(false)
            }
            Some(existing) => Err(Error::KindConflict {
                gvk: entry.gvk.to_string(),
                existing: existing.type_name,
                incoming: entry.type_name,
            }),
            None => {
                debug!(gvk = %entry.gvk, type_name = entry.type_name, "registering kind");
                self.kinds.insert(entry.gvk, entry);
                Ok(true)
            }
        }
    }

    pub fn recognizes(&self, gvk: &GroupVersionKind) -> bool {
        self.kinds.contains_key(gvk)
    }

    pub fn lookup(&self, api_version: &str, kind: &str) -> Option<&KindEntry> {
        self.kinds
            .values()
            .find(|e| e.gvk.matches(api_version, kind))
    }

    /// The kind `T` is registered under, if any.
    pub fn kind_for<T: 'static>(&self) -> Option<&GroupVersionKind> {
        let type_id = TypeId::of::<T>();
        self.kinds
            .values()
            .find(|e| e.type_id == type_id)
            .map(|e| &e.gvk)
    }

    pub fn api_resource(&self, gvk: &GroupVersionKind) -> Option<&ApiResource> {
        self.kinds.get(gvk).map(|e| &e.resource)
    }

    pub fn known_kinds(&self) -> impl Iterator<Item = &KindEntry> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Decode a document into `T`, checking that its `apiVersion` and `kind` are registered to `T`.
    pub fn decode<T>(&self, value: Value) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        let api_version = value.get("apiVersion").and_then(Value::as_str);
        let kind = value.get("kind").and_then(Value::as_str);
        let (api_version, kind) = match (api_version, kind) {
            (Some(api_version), Some(kind)) => (api_version, kind),
            _ => return Err(Error::MissingTypeMeta),
        };
        let entry = self
            .lookup(api_version, kind)
            .ok_or_else(|| Error::UnknownKind {
                api_version: api_version.to_owned(),
                kind: kind.to_owned(),
            })?;
        if entry.type_id != TypeId::of::<T>() {
            return Err(Error::KindMismatch {
                expected: type_name::<T>(),
                found: entry.gvk.to_string(),
            });
        }
        trace!(gvk = %entry.gvk, "decoding document");
        Ok(serde_json::from_value(value)?)
    }

    pub fn decode_yaml<T>(&self, doc: &str) -> Result<T>
    where
        T: DeserializeOwned + 'static,
    {
        let value: Value = serde_yaml::from_str(doc)?;
        self.decode(value)
    }
}
