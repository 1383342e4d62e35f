//! Recharge structure selection.
//!
//! A single open-space threshold decides between a pit and a trench. Soil
//! type and rainfall are not considered yet.

use crate::domain::{RechargeDesign, SquareMeters};

use super::params::AnalysisParameters;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub design: RechargeDesign,
    pub reason: String,
}

/// Pick the structure that fits the available open space
pub fn select_design(open_space: SquareMeters, params: &AnalysisParameters) -> RechargeDesign {
    if open_space.as_sq_m() >= params.pit_min_open_space_sq_m {
        RechargeDesign::Pit(params.pit)
    } else {
        RechargeDesign::Trench(params.trench)
    }
}

pub fn justification(design: &RechargeDesign, open_space: SquareMeters) -> String {
    format!(
        "A {} is suitable for your available open space of {} sq. meters.",
        design.kind().to_string().to_lowercase(),
        open_space.as_sq_m()
    )
}

pub fn recommend(open_space: SquareMeters, params: &AnalysisParameters) -> Recommendation {
    let design = select_design(open_space, params);
    let reason = justification(&design, open_space);
    Recommendation { design, reason }
}
