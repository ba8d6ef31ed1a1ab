use super::dto::{CoordinateInput, ParseAddressRequest};
use crate::domain::address::{AddressParser, Coordinates, DomainError, ParsedAddressRecord};
use crate::infrastructure::security::ValidationService;
use std::sync::Arc;
use tracing::instrument;

/// Validates one submitted address, resolves it, and stamps the result.
pub struct ParseAddressUseCase {
    parser: Arc<dyn AddressParser>,
    validation: Arc<ValidationService>,
}

impl ParseAddressUseCase {
    pub fn new(parser: Arc<dyn AddressParser>, validation: Arc<ValidationService>) -> Self {
        Self { parser, validation }
    }

    #[instrument(skip(self, request))]
    pub fn execute(&self, request: ParseAddressRequest) -> Result<ParsedAddressRecord, DomainError> {
        let latitude = self.coordinate("latitude", &request.latitude)?;
        let longitude = self.coordinate("longitude", &request.longitude)?;
        let Coordinates {
            latitude,
            longitude,
        } = self
            .validation
            .validate_coordinates(latitude, longitude)
            .into_result()
            .map_err(DomainError::ValidationError)?;
        let address = self
            .validation
            .validate_address(&request.address)
            .into_result()
            .map_err(DomainError::ValidationError)?;

        let parsed = self.parser.parse(latitude, longitude, &address);
        tracing::info!(
            society = %parsed.society_name,
            matched = parsed.is_matched(),
            "address parsed"
        );

        Ok(ParsedAddressRecord::stamp(
            parsed,
            latitude,
            longitude,
            &request.address,
        ))
    }

    fn coordinate(&self, field: &str, input: &CoordinateInput) -> Result<f64, DomainError> {
        match input {
            CoordinateInput::Number(value) => Ok(*value),
            CoordinateInput::Text(raw) => self
                .validation
                .parse_coordinate(field, raw)
                .map_err(|e| DomainError::ValidationError(e.to_string())),
        }
    }
}
