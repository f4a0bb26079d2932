use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A value that is neither an integer nor a `N%` string.
    #[error("invalid int-or-percent value {0:?}, expected an integer or a percentage like \"25%\"")]
    InvalidIntOrPercent(String),

    /// Another Rust type is already registered under this kind.
    #[error("kind {gvk} is already registered to {existing}, refusing to register {incoming}")]
    KindConflict {
        gvk: String,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("no kind {kind:?} registered for apiVersion {api_version:?}")]
    UnknownKind { api_version: String, kind: String },

    #[error("document is {found} but {expected} was requested")]
    KindMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("document has no apiVersion or kind")]
    MissingTypeMeta,

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
