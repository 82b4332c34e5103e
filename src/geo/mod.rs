use std::f64::consts::PI;
use std::num::ParseFloatError;

use thiserror::Error;

use crate::models::coordinate::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

#[derive(Debug, Error)]
#[error("invalid degree value {value:?}: {source}")]
pub struct ParseError {
    pub value: String,
    #[source]
    pub source: ParseFloatError,
}

pub fn degrees_to_radians(value: f64) -> f64 {
    value * PI / 180.0
}

pub fn parse_degrees(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map(degrees_to_radians)
        .map_err(|source| ParseError {
            value: text.to_string(),
            source,
        })
}

/// The cosine is clamped to [-1, 1] so rounding on coincident or antipodal
/// points cannot push `acos` out of its domain.
pub fn central_angle(a: &Coordinate, b: &Coordinate) -> f64 {
    let delta_lng = (a.lng - b.lng).abs();
    let cosine = a.lat.sin() * b.lat.sin() + a.lat.cos() * b.lat.cos() * delta_lng.cos();

    cosine.clamp(-1.0, 1.0).acos()
}

pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    EARTH_RADIUS_KM * central_angle(a, b)
}
