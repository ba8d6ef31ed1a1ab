use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{instrument, warn};

use crate::domain::address::Coordinates;

lazy_static! {
    static ref DECIMAL_DEGREES: Regex = Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").unwrap();
    static ref CONTROL_CHARACTERS: Regex = Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap();
}

/// Input validation for everything handed to the resolver.
///
/// The resolver assumes numeric, in-range coordinates and non-empty text; this
/// service is where callers turn raw form or CSV values into those guarantees.
pub struct ValidationService {
    config: ValidationConfig,
}

/// Configurable validation limits
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub max_address_length: usize,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

/// Input validation errors with detailed context
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Input too long: {field} exceeds {max_length} characters")]
    TooLong { field: String, max_length: usize },

    #[error("Missing value: {field} is required")]
    Missing { field: String },

    #[error("Invalid format: {field} does not match required pattern")]
    InvalidFormat { field: String },

    #[error("Invalid range: {field} value {value} outside allowed range")]
    InvalidRange { field: String, value: String },

    #[error("Coordinate validation failed: invalid geographic location")]
    InvalidCoordinates,
}

/// Validation result with sanitized content
#[derive(Debug, Clone)]
pub struct ValidationResult<T> {
    pub is_valid: bool,
    pub value: Option<T>,
    pub errors: Vec<ValidationError>,
}

impl<T> ValidationResult<T> {
    fn from_parts(value: T, errors: Vec<ValidationError>) -> Self {
        let is_valid = errors.is_empty();
        Self {
            is_valid,
            value: is_valid.then_some(value),
            errors,
        }
    }

    /// Collapses the result, joining every error message when invalid.
    pub fn into_result(self) -> Result<T, String> {
        match self.value {
            Some(value) if self.is_valid => Ok(value),
            _ => Err(self
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")),
        }
    }
}

impl ValidationService {
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Parses a decimal-degree string such as `"12.87"` or `"-77.5"`.
    ///
    /// Only plain decimal notation is accepted; `NaN`, `inf` and exponents are
    /// rejected even though `f64::from_str` would take them.
    pub fn parse_coordinate(&self, field: &str, raw: &str) -> Result<f64, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing {
                field: field.to_string(),
            });
        }
        if !DECIMAL_DEGREES.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: field.to_string(),
            });
        }
        trimmed.parse::<f64>().map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
        })
    }

    /// Validates geographic coordinates before they reach the resolver
    #[instrument(skip(self))]
    pub fn validate_coordinates(&self, latitude: f64, longitude: f64) -> ValidationResult<Coordinates> {
        let mut errors = Vec::new();

        if !latitude.is_finite()
            || latitude < self.config.min_latitude
            || latitude > self.config.max_latitude
        {
            errors.push(ValidationError::InvalidRange {
                field: "latitude".to_string(),
                value: latitude.to_string(),
            });
        }

        if !longitude.is_finite()
            || longitude < self.config.min_longitude
            || longitude > self.config.max_longitude
        {
            errors.push(ValidationError::InvalidRange {
                field: "longitude".to_string(),
                value: longitude.to_string(),
            });
        }

        // (0, 0) is what an unset form field usually turns into
        if longitude == 0.0 && latitude == 0.0 {
            errors.push(ValidationError::InvalidCoordinates);
        }

        if !errors.is_empty() {
            warn!("Coordinate validation failed: {:?}", errors);
        }

        ValidationResult::from_parts(
            Coordinates {
                latitude,
                longitude,
            },
            errors,
        )
    }

    /// Validates free-text address input, returning it trimmed
    #[instrument(skip(self, address), fields(address_length = address.len()))]
    pub fn validate_address(&self, address: &str) -> ValidationResult<String> {
        let mut errors = Vec::new();
        let trimmed = address.trim();

        if trimmed.is_empty() {
            errors.push(ValidationError::Missing {
                field: "address".to_string(),
            });
        }

        if trimmed.chars().count() > self.config.max_address_length {
            errors.push(ValidationError::TooLong {
                field: "address".to_string(),
                max_length: self.config.max_address_length,
            });
        }

        if CONTROL_CHARACTERS.is_match(trimmed) {
            errors.push(ValidationError::InvalidFormat {
                field: "address".to_string(),
            });
        }

        if !errors.is_empty() {
            warn!("Address validation failed: {:?}", errors);
        }

        ValidationResult::from_parts(trimmed.to_string(), errors)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_address_length: 500,
            min_longitude: -180.0,
            max_longitude: 180.0,
            min_latitude: -90.0,
            max_latitude: 90.0,
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
