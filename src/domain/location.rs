use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Millimeters;

/// Location errors
#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
    #[error("Latitude out of range: {0} (expected -90 to 90)")]
    LatitudeOutOfRange(f64),
    #[error("Longitude out of range: {0} (expected -180 to 180)")]
    LongitudeOutOfRange(f64),
}

/// Geographic coordinate of the household
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Environmental data resolved for a location.
///
/// Only the rainfall figure feeds the calculation; aquifer and groundwater
/// labels are carried through to the result untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    /// Average annual rainfall (mm)
    #[serde(rename = "avgAnnualRainfall")]
    pub avg_annual_rainfall_mm: f64,
    pub principal_aquifer: String,
    pub depth_to_groundwater: String,
}

impl LocationData {
    pub fn new(
        avg_annual_rainfall_mm: f64,
        principal_aquifer: impl Into<String>,
        depth_to_groundwater: impl Into<String>,
    ) -> Self {
        Self {
            avg_annual_rainfall_mm,
            principal_aquifer: principal_aquifer.into(),
            depth_to_groundwater: depth_to_groundwater.into(),
        }
    }

    pub fn annual_rainfall(&self) -> Millimeters {
        Millimeters::new(self.avg_annual_rainfall_mm)
    }
}
