use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A coordinate as submitted: forms post strings, API clients post numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
}

/// Length and content of `address` are checked after trimming by the use case.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParseAddressRequest {
    pub latitude: CoordinateInput,
    pub longitude: CoordinateInput,
    pub address: String,
}
