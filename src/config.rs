use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::analysis::AnalysisParameters;
use crate::domain::LocationData;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub analysis: AnalysisParameters,
    pub defaults: FormDefaults,
    pub location: LocationConfig,
    pub roof_estimator: RoofEstimatorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
            request_timeout_secs: 30,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Values used for form fields the client leaves out
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub dwellers: u32,
    pub open_space_sq_m: f64,
    pub roof_area_sq_m: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            dwellers: 4,
            open_space_sq_m: 20.0,
            roof_area_sq_m: 150.0,
            latitude: 29.3803,
            longitude: 79.4636,
        }
    }
}

/// Static environmental data served for every location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub avg_annual_rainfall_mm: f64,
    pub principal_aquifer: String,
    pub depth_to_groundwater: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            avg_annual_rainfall_mm: 1470.0,
            principal_aquifer: "Fissured Rock".to_string(),
            depth_to_groundwater: "10-20 meters".to_string(),
        }
    }
}

impl LocationConfig {
    pub fn validate(&self) -> Result<(), String> {
        let rainfall = self.avg_annual_rainfall_mm;
        if !rainfall.is_finite() || rainfall <= 0.0 {
            return Err(format!(
                "avg_annual_rainfall_mm must be a positive number, got {rainfall}"
            ));
        }
        Ok(())
    }

    pub fn to_location_data(&self) -> LocationData {
        LocationData::new(
            self.avg_annual_rainfall_mm,
            self.principal_aquifer.clone(),
            self.depth_to_groundwater.clone(),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoofEstimatorConfig {
    pub placeholder_area_sq_m: f64,
}

impl Default for RoofEstimatorConfig {
    fn default() -> Self {
        Self {
            placeholder_area_sq_m: 150.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("RWH__").split("__"));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract()?;
        cfg.analysis
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid [analysis] config: {e}"))?;
        cfg.location
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid [location] config: {e}"))?;
        if !(cfg.roof_estimator.placeholder_area_sq_m > 0.0) {
            anyhow::bail!("roof_estimator.placeholder_area_sq_m must be positive");
        }
        Ok(cfg)
    }
}
