use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::Display;

use super::types::CubicMeters;

/// Recharge structure family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum DesignKind {
    #[strum(serialize = "Recharge Pit")]
    #[serde(rename = "Recharge Pit")]
    RechargePit,
    #[strum(serialize = "Recharge Trench")]
    #[serde(rename = "Recharge Trench")]
    RechargeTrench,
}

/// Cylindrical recharge pit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PitDimensions {
    pub diameter_m: f64,
    pub depth_m: f64,
}

impl PitDimensions {
    pub fn volume(&self) -> CubicMeters {
        let radius = self.diameter_m / 2.0;
        CubicMeters::new(PI * radius * radius * self.depth_m)
    }
}

impl Default for PitDimensions {
    /// Typical pit for a 100-150 m² roof
    fn default() -> Self {
        Self {
            diameter_m: 1.5,
            depth_m: 3.0,
        }
    }
}

/// Rectangular recharge trench
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrenchDimensions {
    pub width_m: f64,
    pub depth_m: f64,
    pub length_m: f64,
}

impl TrenchDimensions {
    pub fn volume(&self) -> CubicMeters {
        CubicMeters::new(self.width_m * self.depth_m * self.length_m)
    }
}

impl Default for TrenchDimensions {
    fn default() -> Self {
        Self {
            width_m: 0.5,
            depth_m: 1.5,
            length_m: 4.0,
        }
    }
}

/// Recommended recharge structure with its reference dimensions.
///
/// Serializes as the bare dimension set; the structure name travels next to
/// it in [`SystemRecommendation`](super::SystemRecommendation). Both dimension
/// sets reject unknown fields, so a trench never parses as a pit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RechargeDesign {
    Pit(PitDimensions),
    Trench(TrenchDimensions),
}

impl RechargeDesign {
    pub fn kind(&self) -> DesignKind {
        match self {
            RechargeDesign::Pit(_) => DesignKind::RechargePit,
            RechargeDesign::Trench(_) => DesignKind::RechargeTrench,
        }
    }

    /// Excavated volume of the structure
    pub fn volume(&self) -> CubicMeters {
        match self {
            RechargeDesign::Pit(pit) => pit.volume(),
            RechargeDesign::Trench(trench) => trench.volume(),
        }
    }
}
