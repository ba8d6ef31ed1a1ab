use super::entity::ParsedAddress;

/// Seam between callers and the resolution core.
///
/// Implementations must be pure: the same inputs always produce the same output and
/// nothing is persisted.
#[cfg_attr(test, mockall::automock)]
pub trait AddressParser: Send + Sync {
    fn parse(&self, latitude: f64, longitude: f64, address: &str) -> ParsedAddress;
}
