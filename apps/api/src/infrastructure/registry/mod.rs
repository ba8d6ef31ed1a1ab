pub mod json_registry;

pub use json_registry::{load_registry, registry_from_json};
