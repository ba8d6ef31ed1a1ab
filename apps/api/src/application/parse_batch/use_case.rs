use super::dto::{BatchParseRequest, BatchParseResponse, ImportColumn};
use crate::domain::address::{AddressParser, DomainError, ParsedAddressRecord};
use crate::infrastructure::security::ValidationService;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;

/// Resolves every row of an import, collecting per-row errors instead of failing
/// the whole batch.
pub struct ParseBatchUseCase {
    parser: Arc<dyn AddressParser>,
    validation: Arc<ValidationService>,
    max_records: usize,
}

#[derive(Debug, Default)]
struct ImportRow {
    latitude: Option<String>,
    longitude: Option<String>,
    address: Option<String>,
}

impl ImportRow {
    /// The first non-empty value wins when several headers map to the same input.
    fn from_record(record: &BTreeMap<String, Value>) -> Self {
        let mut row = Self::default();
        for (header, value) in record {
            let Some(column) = ImportColumn::from_header(header) else {
                continue;
            };
            let Some(text) = cell_text(value) else {
                continue;
            };
            let slot = match column {
                ImportColumn::Latitude => &mut row.latitude,
                ImportColumn::Longitude => &mut row.longitude,
                ImportColumn::Address => &mut row.address,
            };
            slot.get_or_insert(text);
        }
        row
    }
}

fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

impl ParseBatchUseCase {
    pub fn new(
        parser: Arc<dyn AddressParser>,
        validation: Arc<ValidationService>,
        max_records: usize,
    ) -> Self {
        Self {
            parser,
            validation,
            max_records,
        }
    }

    #[instrument(skip(self, request), fields(records = request.records.len()))]
    pub fn execute(&self, request: BatchParseRequest) -> Result<BatchParseResponse, DomainError> {
        if request.records.is_empty() {
            return Err(DomainError::ValidationError(
                "Batch contains no records".to_string(),
            ));
        }
        if request.records.len() > self.max_records {
            return Err(DomainError::ValidationError(format!(
                "Batch exceeds {} records",
                self.max_records
            )));
        }

        let mut results = Vec::with_capacity(request.records.len());
        let mut errors = Vec::new();

        for (index, record) in request.records.iter().enumerate() {
            let row_number = index + 1;
            match self.resolve_row(record) {
                Ok(parsed) => results.push(parsed),
                Err(message) => {
                    tracing::warn!(row = row_number, reason = message, "import row rejected");
                    errors.push(format!("{message} for row {row_number}"));
                }
            }
        }

        tracing::info!(
            processed = request.records.len(),
            resolved = results.len(),
            rejected = errors.len(),
            "batch parsed"
        );

        Ok(BatchParseResponse {
            processed: request.records.len(),
            results,
            errors,
        })
    }

    fn resolve_row(&self, record: &BTreeMap<String, Value>) -> Result<ParsedAddressRecord, &'static str> {
        let row = ImportRow::from_record(record);

        let coordinates = match (&row.latitude, &row.longitude) {
            (Some(lat), Some(lng)) => self
                .validation
                .parse_coordinate("latitude", lat)
                .and_then(|lat| Ok((lat, self.validation.parse_coordinate("longitude", lng)?)))
                .ok(),
            _ => None,
        };
        let (latitude, longitude) = coordinates
            .filter(|(lat, lng)| self.validation.validate_coordinates(*lat, *lng).is_valid)
            .ok_or("Invalid coordinates")?;

        let original = row.address.ok_or("Missing address")?;
        let address = self
            .validation
            .validate_address(&original)
            .value
            .ok_or("Invalid address")?;

        let parsed = self.parser.parse(latitude, longitude, &address);
        Ok(ParsedAddressRecord::stamp(parsed, latitude, longitude, &original))
    }
}
