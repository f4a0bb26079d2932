//! Version `v1alpha1` of the `apps.kruise.io` group.

mod statefulset;

pub use statefulset::*;

use tracing::debug;

use crate::error::Result;
use crate::resources::GroupVersion;
use crate::scheme::Scheme;

pub const GROUP_VERSION: GroupVersion = GroupVersion {
    group: "apps.kruise.io",
    version: "v1alpha1",
};

/// Register the kinds of this group version with `scheme`.
///
/// Meant to be called once by the hosting process during startup. Calling it again is
/// harmless: kinds already registered to the same types are left untouched.
pub fn add_to_scheme(scheme: &mut Scheme) -> Result<()> {
    let added = scheme.add_known_type::<StatefulSet>()? | scheme.add_known_list::<StatefulSet>()?;
    debug!(group_version = %GROUP_VERSION, added, "registered kinds");
    Ok(())
}
