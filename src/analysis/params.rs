use serde::{Deserialize, Serialize};

use crate::domain::{PitDimensions, TrenchDimensions};

/// Days in the household demand year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Tunable constants of the harvesting analysis.
///
/// Defaults describe a tiled roof in northern India. Every field can be
/// overridden from the `[analysis]` config table for regional tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParameters {
    /// Fraction of rainfall on the roof that becomes collectible runoff (0.7-0.95)
    pub runoff_coefficient: f64,
    /// Daily water need per person in liters (LPCD)
    pub water_need_lpcd: f64,
    /// Smallest open space (m²) that fits a recharge pit
    pub pit_min_open_space_sq_m: f64,
    /// Reference pit dimensions
    pub pit: PitDimensions,
    /// Reference trench dimensions
    pub trench: TrenchDimensions,
    /// Excavation cost (INR per m³)
    pub excavation_cost_per_m3: f64,
    /// Cost of substitute water from municipal supply or tankers (INR per 1000 L)
    pub water_cost_per_kl: f64,
}

impl Default for AnalysisParameters {
    fn default() -> Self {
        Self {
            runoff_coefficient: 0.85,
            water_need_lpcd: 135.0,
            pit_min_open_space_sq_m: 10.0,
            pit: PitDimensions::default(),
            trench: TrenchDimensions::default(),
            excavation_cost_per_m3: 500.0,
            water_cost_per_kl: 25.0,
        }
    }
}

impl AnalysisParameters {
    /// Validate parameters for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(self.runoff_coefficient > 0.0 && self.runoff_coefficient <= 1.0) {
            return Err(format!(
                "runoff_coefficient must be in (0, 1], got {}",
                self.runoff_coefficient
            ));
        }

        if !(self.water_need_lpcd >= 0.0) {
            return Err("water_need_lpcd cannot be negative".to_string());
        }

        if !(self.pit_min_open_space_sq_m >= 0.0) {
            return Err("pit_min_open_space_sq_m cannot be negative".to_string());
        }

        let dimensions = [
            self.pit.diameter_m,
            self.pit.depth_m,
            self.trench.width_m,
            self.trench.depth_m,
            self.trench.length_m,
        ];
        if dimensions.iter().any(|d| !(*d > 0.0) || !d.is_finite()) {
            return Err("recharge structure dimensions must be positive".to_string());
        }

        if !(self.excavation_cost_per_m3 >= 0.0) || !(self.water_cost_per_kl >= 0.0) {
            return Err("costs cannot be negative".to_string());
        }

        Ok(())
    }
}
