use crate::geo::degrees_to_radians;

/// A point on the sphere. Both fields are radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat: degrees_to_radians(lat),
            lng: degrees_to_radians(lng),
        }
    }
}
