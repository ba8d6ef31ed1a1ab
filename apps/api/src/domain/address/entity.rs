use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Society name reported when the address cannot be served.
pub const NOT_SERVICEABLE: &str = "Not Serviceable";

/// Outcome of resolving one address against the society registry.
///
/// `block` and `flat` are only ever copies of identifiers registered on the matched
/// society; the resolver never synthesizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParsedAddress {
    /// Matched society name, or [`NOT_SERVICEABLE`]
    pub society_name: String,

    /// Block identifier drawn from the society's `blocks`
    pub block: Option<String>,

    /// Flat identifier drawn from the society's `flats_in_each_block`
    pub flat: Option<String>,

    /// Human-readable explanation of match confidence and distance
    pub proximity_note: String,
}

impl ParsedAddress {
    pub fn not_serviceable() -> Self {
        Self {
            society_name: NOT_SERVICEABLE.to_string(),
            block: None,
            flat: None,
            proximity_note: "No matching society found".to_string(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.society_name != NOT_SERVICEABLE
    }
}

/// A [`ParsedAddress`] stamped by the caller with the input it came from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParsedAddressRecord {
    pub id: Uuid,

    #[serde(flatten)]
    #[ts(flatten)]
    pub parsed: ParsedAddress,

    pub latitude: f64,
    pub longitude: f64,

    /// Address text exactly as submitted
    pub original: String,

    pub timestamp: DateTime<Utc>,
}

impl ParsedAddressRecord {
    pub fn stamp(parsed: ParsedAddress, latitude: f64, longitude: f64, original: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            parsed,
            latitude,
            longitude,
            original: original.to_string(),
            timestamp: Utc::now(),
        }
    }
}
