//! Harvest potential: how much water the roof yields against what the
//! household needs.

use crate::domain::{Liters, Millimeters, Percentage, SquareMeters};

use super::params::{AnalysisParameters, DAYS_PER_YEAR};

/// Annual water balance of the household, full precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarvestPotential {
    pub annual_harvestable: Liters,
    pub daily_need: Liters,
    pub annual_need: Liters,
    pub needs_met: Percentage,
}

/// Runoff collected from the roof over a year.
///
/// 1 mm of rain on 1 m² is 1 liter, scaled by the runoff coefficient.
pub fn annual_harvestable_water(
    roof_area: SquareMeters,
    rainfall: Millimeters,
    runoff_coefficient: f64,
) -> Liters {
    Liters::new(roof_area.as_sq_m() * rainfall.as_meters() * runoff_coefficient * 1000.0)
}

/// Household water need per day
pub fn daily_household_need(dwellers: u32, lpcd: f64) -> Liters {
    Liters::new(dwellers as f64 * lpcd)
}

/// Share of the annual need covered by harvested water.
///
/// A household with no demand is fully served.
pub fn needs_met(harvestable: Liters, annual_need: Liters) -> Percentage {
    if annual_need.as_liters() > 0.0 {
        Percentage::from_ratio(harvestable.as_liters() / annual_need.as_liters())
    } else {
        Percentage::full()
    }
}

pub fn calculate(
    roof_area: SquareMeters,
    rainfall: Millimeters,
    dwellers: u32,
    params: &AnalysisParameters,
) -> HarvestPotential {
    let annual_harvestable = annual_harvestable_water(roof_area, rainfall, params.runoff_coefficient);
    let daily_need = daily_household_need(dwellers, params.water_need_lpcd);
    let annual_need = daily_need * DAYS_PER_YEAR;

    HarvestPotential {
        annual_harvestable,
        daily_need,
        annual_need,
        needs_met: needs_met(annual_harvestable, annual_need),
    }
}
