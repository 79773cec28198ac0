use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::profile::errors::GeoCoordinatesError;

/// WGS84 latitude/longitude pair, rounded to 6 decimal places (~11 cm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoCoordinatesRaw")]
pub struct GeoCoordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct GeoCoordinatesRaw {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinates {
    pub const PRECISION: i32 = 6;

    pub fn create(latitude: f64, longitude: f64) -> Result<Self, GeoCoordinatesError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoCoordinatesError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoCoordinatesError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude: round_to_precision(latitude),
            longitude: round_to_precision(longitude),
        })
    }

    /// Both halves of a stored pair, or neither
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Self>, GeoCoordinatesError> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Self::create(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(GeoCoordinatesError::Incomplete),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(GeoCoordinates::PRECISION);
    (value * factor).round() / factor
}

impl TryFrom<GeoCoordinatesRaw> for GeoCoordinates {
    type Error = GeoCoordinatesError;

    fn try_from(raw: GeoCoordinatesRaw) -> Result<Self, Self::Error> {
        Self::create(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for GeoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
