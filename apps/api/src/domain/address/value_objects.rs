use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A WGS84 point that has passed input validation.
///
/// Only `ValidationService::validate_coordinates` hands these out, after checking
/// ranges and rejecting `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
