//! Environmental data lookup for a household location.
//!
//! Real weather and GIS services are not wired in yet; the static resolver
//! returns the same configured values for every coordinate.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{GeoPoint, LocationData, LocationError};

#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, point: GeoPoint) -> Result<LocationData, LocationError>;
}

pub struct StaticLocationResolver {
    data: LocationData,
}

impl StaticLocationResolver {
    pub fn new(data: LocationData) -> Self {
        Self { data }
    }
}

impl Default for StaticLocationResolver {
    fn default() -> Self {
        Self::new(LocationData::new(1470.0, "Fissured Rock", "10-20 meters"))
    }
}

#[async_trait]
impl LocationResolver for StaticLocationResolver {
    async fn resolve(&self, point: GeoPoint) -> Result<LocationData, LocationError> {
        debug!(
            latitude = point.latitude,
            longitude = point.longitude,
            "resolving location from static data"
        );
        Ok(self.data.clone())
    }
}
