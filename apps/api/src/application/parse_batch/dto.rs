use crate::domain::address::ParsedAddressRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Rows of a spreadsheet-like import, each keyed by its original column header.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchParseRequest {
    #[ts(type = "Array<Record<string, string | number | null>>")]
    pub records: Vec<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatchParseResponse {
    /// Number of rows examined, including rejected ones
    pub processed: usize,
    pub results: Vec<ParsedAddressRecord>,
    /// One message per rejected row, e.g. `"Invalid coordinates for row 3"`
    pub errors: Vec<String>,
}

/// Input the resolver needs, which import headers are mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportColumn {
    Latitude,
    Longitude,
    Address,
}

impl ImportColumn {
    /// Maps a free-form header such as `"Lat"`, `"LNG"` or `"Delivery Location"`.
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim().to_lowercase();
        if header.contains("lat") {
            Some(Self::Latitude)
        } else if header.contains("long") || header.contains("lng") {
            Some(Self::Longitude)
        } else if header.contains("address") || header.contains("location") {
            Some(Self::Address)
        } else {
            None
        }
    }
}
