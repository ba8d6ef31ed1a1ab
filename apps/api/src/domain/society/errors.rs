use thiserror::Error;

/// Failures while building the society registry.
///
/// All of these are fatal configuration errors: they are raised at start-up and
/// never while resolving an address.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Society registry is empty")]
    Empty,

    #[error("Invalid society '{name}': {reason}")]
    InvalidSociety { name: String, reason: String },

    #[error("Duplicate society name: {0}")]
    DuplicateName(String),

    #[error("Failed to read society registry from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse society registry")]
    Parse(#[from] serde_json::Error),
}
