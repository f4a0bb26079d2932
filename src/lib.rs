pub mod api;
pub mod apps;
pub mod crd;
pub mod error;
pub mod intstr;
pub mod resources;
pub mod scheme;

pub use error::Error;
pub use scheme::Scheme;

/// Build a scheme with every kind this crate declares.
pub fn default_scheme() -> Result<Scheme, Error> {
    let mut scheme = Scheme::new();
    apps::v1alpha1::add_to_scheme(&mut scheme)?;
    Ok(scheme)
}
