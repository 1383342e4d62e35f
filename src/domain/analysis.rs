use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::design::RechargeDesign;
use super::location::LocationData;
use super::types::SquareMeters;

/// Rejections raised before any calculation runs
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Roof area must be a positive number of square meters, got {0}")]
    InvalidRoofArea(f64),
    #[error("Household must have at least one dweller")]
    NoDwellers,
    #[error("Open space must be zero or more square meters, got {0}")]
    InvalidOpenSpace(f64),
    #[error("Average annual rainfall must be a positive number of millimeters, got {0}")]
    InvalidRainfall(f64),
}

/// Household description fed to the analysis engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub roof_area_sq_m: f64,
    pub dwellers: u32,
    pub open_space_sq_m: f64,
    pub location_data: LocationData,
}

impl AnalysisInput {
    pub fn new(
        roof_area_sq_m: f64,
        dwellers: u32,
        open_space_sq_m: f64,
        location_data: LocationData,
    ) -> Self {
        Self {
            roof_area_sq_m,
            dwellers,
            open_space_sq_m,
            location_data,
        }
    }

    pub fn roof_area(&self) -> SquareMeters {
        SquareMeters::new(self.roof_area_sq_m)
    }

    pub fn open_space(&self) -> SquareMeters {
        SquareMeters::new(self.open_space_sq_m)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.roof_area_sq_m.is_finite() || self.roof_area_sq_m <= 0.0 {
            return Err(AnalysisError::InvalidRoofArea(self.roof_area_sq_m));
        }

        if self.dwellers == 0 {
            return Err(AnalysisError::NoDwellers);
        }

        if !self.open_space_sq_m.is_finite() || self.open_space_sq_m < 0.0 {
            return Err(AnalysisError::InvalidOpenSpace(self.open_space_sq_m));
        }

        let rainfall = self.location_data.avg_annual_rainfall_mm;
        if !rainfall.is_finite() || rainfall <= 0.0 {
            return Err(AnalysisError::InvalidRainfall(rainfall));
        }

        Ok(())
    }
}

/// Years needed for savings to pay back the structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Payback {
    Years { years: f64 },
    /// No savings, so the structure never pays for itself
    NotApplicable,
}

impl Payback {
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Years { years } => Some(*years),
            Payback::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Payback::Years { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialAnalysis {
    pub annual_harvestable_water_liters: u64,
    pub percentage_of_needs_met: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecommendation {
    pub name: String,
    #[serde(rename = "dimensions")]
    pub design: RechargeDesign,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBenefitAnalysis {
    #[serde(rename = "estimatedCostINR")]
    pub estimated_cost_inr: u64,
    #[serde(rename = "annualSavingsINR")]
    pub annual_savings_inr: u64,
    #[serde(rename = "roiYears")]
    pub roi_years: Payback,
}

/// Complete analysis, rounded for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub potential_analysis: PotentialAnalysis,
    pub system_recommendation: SystemRecommendation,
    pub cost_benefit_analysis: CostBenefitAnalysis,
    pub location_data: LocationData,
}
