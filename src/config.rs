use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::geo::degrees_to_radians;
use crate::models::coordinate::Coordinate;

pub const DEFAULT_REFERENCE: Coordinate = Coordinate::new(0.930948639728, -0.10921684028);
pub const DEFAULT_RADIUS_KM: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    /// Degrees. `None` falls back to [`DEFAULT_REFERENCE`].
    pub reference_lat: Option<f64>,
    pub reference_lng: Option<f64>,
    pub radius_km: f64,
    pub workers: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            input_path: lookup("INPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("customer.json")),
            reference_lat: parse_optional(&lookup, "REFERENCE_LAT")?,
            reference_lng: parse_optional(&lookup, "REFERENCE_LNG")?,
            radius_km: parse_or_default(&lookup, "RADIUS_KM", DEFAULT_RADIUS_KM)?,
            workers: parse_or_default(&lookup, "FILTER_WORKERS", 1)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        if !config.radius_km.is_finite() || config.radius_km < 0.0 {
            return Err(AppError::Config(format!(
                "RADIUS_KM must be a non-negative number, got {}",
                config.radius_km
            )));
        }
        if config.workers == 0 {
            return Err(AppError::Config("FILTER_WORKERS must be at least 1".to_string()));
        }

        Ok(config)
    }

    pub fn reference(&self) -> Coordinate {
        let mut reference = DEFAULT_REFERENCE;
        if let Some(lat) = self.reference_lat {
            reference.lat = degrees_to_radians(lat);
        }
        if let Some(lng) = self.reference_lng {
            reference.lng = degrees_to_radians(lng);
        }
        reference
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|err| AppError::Config(format!("invalid {key}: {err}")))
        })
        .transpose()
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional(lookup, key)?.unwrap_or(default))
}
