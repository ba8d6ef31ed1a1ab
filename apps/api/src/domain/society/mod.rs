pub mod entity;
pub mod errors;
pub mod registry;

pub use entity::Society;
pub use errors::RegistryError;
pub use registry::SocietyRegistry;
