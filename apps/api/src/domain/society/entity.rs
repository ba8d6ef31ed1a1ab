use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// A residential society the service delivers to.
///
/// Societies are static reference data: they are loaded once at start-up and never
/// mutated afterwards. Block and flat identifiers are kept exactly as registered so
/// that every resolved component can be traced back to this record verbatim.
///
/// # Invariants
/// - `name` is unique within a registry
/// - `latitude`/`longitude` are WGS84 decimal degrees
/// - `flats_in_each_block` is shared by every block of the society; it is not a
///   per-block mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Society {
    /// Display name, also the key the address text is matched against
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    /// Registered latitude of the society gate
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    /// Registered longitude of the society gate
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Ordered block identifiers, numeric ("1") or named ("Magnifica")
    #[validate(length(min = 1))]
    pub blocks: Vec<String>,

    /// Ordered flat identifiers valid in any block
    #[validate(length(min = 1))]
    pub flats_in_each_block: Vec<String>,
}

impl Society {
    /// Returns the registered block equal to `candidate`, trying an exact comparison
    /// before a case-insensitive one.
    pub fn find_block(&self, candidate: &str) -> Option<&str> {
        self.blocks
            .iter()
            .find(|block| block.as_str() == candidate)
            .or_else(|| {
                self.blocks
                    .iter()
                    .find(|block| block.to_lowercase() == candidate.to_lowercase())
            })
            .map(String::as_str)
    }

    /// Returns the registered flat equal to `candidate`. Flats are matched exactly.
    pub fn find_flat(&self, candidate: &str) -> Option<&str> {
        self.flats_in_each_block
            .iter()
            .find(|flat| flat.as_str() == candidate)
            .map(String::as_str)
    }
}
