use crate::domain::society::Society;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_SERVICE_RADIUS_KM: f64 = 5.0;

/// Great-circle distance between two WGS84 points, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proximity {
    Within { distance_km: f64 },
    Beyond { distance_km: f64 },
}

impl Proximity {
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Within { distance_km } | Self::Beyond { distance_km } => *distance_km,
        }
    }

    pub fn is_within(&self) -> bool {
        matches!(self, Self::Within { .. })
    }
}

/// Decides whether a point is close enough to a society to be serviced.
#[derive(Debug, Clone, Copy)]
pub struct ProximityValidator {
    radius_km: f64,
}

impl ProximityValidator {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// A point exactly on the radius is still serviceable.
    pub fn validate(&self, society: &Society, latitude: f64, longitude: f64) -> Proximity {
        let distance_km = haversine_km(latitude, longitude, society.latitude, society.longitude);
        if distance_km > self.radius_km {
            Proximity::Beyond { distance_km }
        } else {
            Proximity::Within { distance_km }
        }
    }
}

impl Default for ProximityValidator {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_RADIUS_KM)
    }
}
