use serde::Deserialize;

use crate::geo::{ParseError, parse_degrees};
use crate::models::coordinate::Coordinate;

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    pub user_id: i64,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub user_id: i64,
    pub name: String,
    pub location: Coordinate,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = ParseError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        let lat = parse_degrees(&record.latitude)?;
        let lng = parse_degrees(&record.longitude)?;

        Ok(Self {
            user_id: record.user_id,
            name: record.name,
            location: Coordinate::new(lat, lng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, CustomerRecord};

    fn record(latitude: &str, longitude: &str) -> CustomerRecord {
        CustomerRecord {
            user_id: 12,
            name: "Christina McArdle".to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        }
    }

    #[test]
    fn record_decodes_from_wire_json() {
        let line = r#"{"latitude": "52.986375", "user_id": 12, "name": "Christina McArdle", "longitude": "-6.043701"}"#;
        let record: CustomerRecord = serde_json::from_str(line).unwrap();

        assert_eq!(record.user_id, 12);
        assert_eq!(record.name, "Christina McArdle");
        assert_eq!(record.latitude, "52.986375");
        assert_eq!(record.longitude, "-6.043701");
    }

    #[test]
    fn numeric_coordinates_are_a_structural_error() {
        let line = r#"{"latitude": 52.986375, "user_id": 12, "name": "x", "longitude": "-6.043701"}"#;
        assert!(serde_json::from_str::<CustomerRecord>(line).is_err());
    }

    #[test]
    fn conversion_stores_radians() {
        let customer = Customer::try_from(record("90", "-180")).unwrap();

        assert_eq!(customer.user_id, 12);
        assert!((customer.location.lat - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((customer.location.lng + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn conversion_reports_the_offending_value() {
        let err = Customer::try_from(record("52.98", "west")).unwrap_err();
        assert_eq!(err.value, "west");
    }
}
