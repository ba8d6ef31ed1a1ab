use crate::domain::society::{RegistryError, Society, SocietyRegistry};
use std::path::Path;

/// Loads the society registry from a JSON file, or the built-in list when no path
/// is configured.
///
/// The file holds an array of societies with the keys `name`, `latitude`,
/// `longitude`, `blocks` and `flatsInEachBlock`.
///
/// # Errors
///
/// Any read, parse or validation failure is returned as a [`RegistryError`]; callers
/// treat it as fatal at start-up.
pub fn load_registry(path: Option<&Path>) -> Result<SocietyRegistry, RegistryError> {
    let Some(path) = path else {
        let registry = SocietyRegistry::builtin();
        tracing::info!(societies = registry.len(), "using built-in society registry");
        return Ok(registry);
    };

    let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let registry = registry_from_json(&raw)?;
    tracing::info!(
        societies = registry.len(),
        path = %path.display(),
        "loaded society registry"
    );
    Ok(registry)
}

pub fn registry_from_json(raw: &str) -> Result<SocietyRegistry, RegistryError> {
    let societies: Vec<Society> = serde_json::from_str(raw)?;
    SocietyRegistry::new(societies)
}
