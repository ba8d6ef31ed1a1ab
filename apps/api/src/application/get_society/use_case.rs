use crate::domain::address::DomainError;
use crate::domain::society::{Society, SocietyRegistry};

/// Read-only lookups against the loaded registry.
pub struct GetSocietyUseCase {
    registry: SocietyRegistry,
}

impl GetSocietyUseCase {
    pub fn new(registry: SocietyRegistry) -> Self {
        Self { registry }
    }

    pub fn list(&self) -> Vec<Society> {
        self.registry.societies().to_vec()
    }

    /// Finds a society by name, ignoring case and surrounding whitespace.
    pub fn by_name(&self, name: &str) -> Result<Society, DomainError> {
        self.registry.find_by_name(name).cloned().ok_or_else(|| {
            DomainError::NotFound(format!("Society '{}' is not registered", name.trim()))
        })
    }
}
