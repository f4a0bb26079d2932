//! Custom workload kinds of the `apps.kruise.io` group.

pub mod public;
pub mod v1alpha1;

pub(crate) fn is_default<D: Default + PartialEq>(val: &D) -> bool {
    val == &D::default()
}
