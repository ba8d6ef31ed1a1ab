pub mod validation;

pub use validation::{ValidationConfig, ValidationError, ValidationResult, ValidationService};
