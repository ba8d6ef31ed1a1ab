use super::block_extractor::block_chain;
use super::flat_extractor::flat_chain;
use super::normalizer::normalize;
use super::proximity::{DEFAULT_SERVICE_RADIUS_KM, Proximity, ProximityValidator};
use super::society_matcher::{SocietyMatch, match_society};
use super::strategy::StrategyChain;
use crate::domain::address::{AddressParser, ParsedAddress};
use crate::domain::society::SocietyRegistry;

/// Below this similarity the note tells the reader the input was auto-corrected.
pub const HIGH_CONFIDENCE_SIMILARITY: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverSettings {
    pub service_radius_km: f64,
    pub high_confidence_similarity: f64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            service_radius_km: DEFAULT_SERVICE_RADIUS_KM,
            high_confidence_similarity: HIGH_CONFIDENCE_SIMILARITY,
        }
    }
}

/// Resolves free-text addresses plus coordinates to society/block/flat records.
///
/// The resolver owns nothing mutable: it is safe to share behind an `Arc` and call
/// from any number of threads at once.
#[derive(Debug)]
pub struct AddressResolver {
    registry: SocietyRegistry,
    settings: ResolverSettings,
    proximity: ProximityValidator,
    block_chain: StrategyChain,
    flat_chain: StrategyChain,
}

impl AddressResolver {
    pub fn new(registry: SocietyRegistry) -> Self {
        Self::with_settings(registry, ResolverSettings::default())
    }

    pub fn with_settings(registry: SocietyRegistry, settings: ResolverSettings) -> Self {
        Self {
            registry,
            settings,
            proximity: ProximityValidator::new(settings.service_radius_km),
            block_chain: block_chain(),
            flat_chain: flat_chain(),
        }
    }

    pub fn registry(&self) -> &SocietyRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn resolve(&self, latitude: f64, longitude: f64, address: &str) -> ParsedAddress {
        let normalized = normalize(address);

        let Some(SocietyMatch {
            society,
            similarity,
        }) = match_society(&self.registry, &normalized)
        else {
            tracing::debug!(address = %normalized, "no society matched");
            return ParsedAddress::not_serviceable();
        };

        let radius = self.proximity.radius_km();
        match self.proximity.validate(society, latitude, longitude) {
            Proximity::Beyond { distance_km } => {
                tracing::debug!(society = %society.name, distance_km, "location outside service radius");
                ParsedAddress {
                    society_name: society.name.clone(),
                    block: None,
                    flat: None,
                    proximity_note: format!(
                        "Location is beyond {radius} km range of registered society coordinates ({distance_km:.2} km away)."
                    ),
                }
            }
            Proximity::Within { distance_km } => {
                let block = self.block_chain.extract(society, &normalized);
                let flat = self.flat_chain.extract(society, &normalized);

                let mut proximity_note = format!(
                    "Location is within {radius} km range of {} ({distance_km:.2} km away).",
                    society.name
                );
                if similarity < self.settings.high_confidence_similarity {
                    proximity_note.push_str(" Address components were auto-corrected from input.");
                }

                tracing::debug!(
                    society = %society.name,
                    similarity,
                    distance_km,
                    block,
                    flat,
                    "address resolved"
                );

                ParsedAddress {
                    society_name: society.name.clone(),
                    block: block.map(str::to_string),
                    flat: flat.map(str::to_string),
                    proximity_note,
                }
            }
        }
    }
}

impl AddressParser for AddressResolver {
    fn parse(&self, latitude: f64, longitude: f64, address: &str) -> ParsedAddress {
        self.resolve(latitude, longitude, address)
    }
}
