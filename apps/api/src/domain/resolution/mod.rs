//! Address resolution core.
//!
//! A pure pipeline over an injected [`SocietyRegistry`](crate::domain::society::SocietyRegistry):
//! normalize the text, fuzzy-match a society, check the point is within the service
//! radius, then extract block and flat through ordered strategy chains. Nothing here
//! performs I/O or keeps state between calls.

pub mod block_extractor;
pub mod flat_extractor;
pub mod fuzzy;
pub mod normalizer;
pub mod proximity;
pub mod resolver;
pub mod society_matcher;
pub mod strategy;

pub use block_extractor::extract_block;
pub use flat_extractor::extract_flat;
pub use proximity::{DEFAULT_SERVICE_RADIUS_KM, Proximity, ProximityValidator, haversine_km};
pub use resolver::{AddressResolver, HIGH_CONFIDENCE_SIMILARITY, ResolverSettings};
pub use society_matcher::{SocietyMatch, match_society};
pub use strategy::{ExtractionStrategy, StrategyChain};
