use super::{entity::Society, errors::RegistryError};
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

/// Immutable, cheaply clonable set of known societies.
///
/// The registry is injected into the resolver at construction; clones share the same
/// backing slice, so handing it to many callers costs one reference count each.
#[derive(Debug, Clone)]
pub struct SocietyRegistry {
    societies: Arc<[Society]>,
}

impl SocietyRegistry {
    /// Builds a registry after validating every entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the list is empty, an entry fails field
    /// validation, or two entries share a name (compared case-insensitively).
    pub fn new(societies: Vec<Society>) -> Result<Self, RegistryError> {
        if societies.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(societies.len());
        for society in &societies {
            society
                .validate()
                .map_err(|e| RegistryError::InvalidSociety {
                    name: society.name.clone(),
                    reason: e.to_string(),
                })?;

            if society.blocks.iter().any(|b| b.trim().is_empty())
                || society.flats_in_each_block.iter().any(|f| f.trim().is_empty())
            {
                return Err(RegistryError::InvalidSociety {
                    name: society.name.clone(),
                    reason: "block and flat identifiers must not be blank".to_string(),
                });
            }

            if !seen.insert(society.name.to_lowercase()) {
                return Err(RegistryError::DuplicateName(society.name.clone()));
            }
        }

        Ok(Self {
            societies: societies.into(),
        })
    }

    /// The societies served out of the box when no registry file is configured.
    pub fn builtin() -> Self {
        Self {
            societies: builtin_societies().into(),
        }
    }

    pub fn societies(&self) -> &[Society] {
        &self.societies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Society> {
        self.societies.iter()
    }

    pub fn len(&self) -> usize {
        self.societies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.societies.is_empty()
    }

    /// Case-insensitive lookup by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Society> {
        let wanted = name.trim().to_lowercase();
        self.societies
            .iter()
            .find(|society| society.name.to_lowercase() == wanted)
    }
}

fn builtin_societies() -> Vec<Society> {
    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    vec![
        Society {
            name: "Prestige Fern Residency".to_string(),
            latitude: 12.9031,
            longitude: 77.6619,
            blocks: ids(&["1", "2"]),
            flats_in_each_block: ids(&["101", "102", "201", "202"]),
        },
        Society {
            name: "Sobha Silicon Oasis".to_string(),
            latitude: 12.8683,
            longitude: 77.66,
            blocks: ids(&["Magnifica", "Vivo"]),
            flats_in_each_block: ids(&["101", "102", "103", "201", "202", "203"]),
        },
        Society {
            name: "Prestige Sunrise Park".to_string(),
            latitude: 12.8341,
            longitude: 77.6625,
            blocks: ids(&["A", "B"]),
            flats_in_each_block: ids(&["101", "102", "201", "203"]),
        },
    ]
}
