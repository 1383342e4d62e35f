use tracing::debug;

use crate::domain::{
    round_to, round_whole, AnalysisError, AnalysisInput, AnalysisResult, CostBenefitAnalysis,
    PotentialAnalysis, SystemRecommendation,
};

use super::cost::{self, CostProjection};
use super::params::AnalysisParameters;
use super::potential::{self, HarvestPotential};
use super::recommend::{self, Recommendation};

/// Rainwater harvesting analysis.
///
/// Runs potential calculation, structure recommendation and cost projection
/// in sequence. Holds only its parameters, so one engine can serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    params: AnalysisParameters,
}

impl AnalysisEngine {
    pub fn new(params: AnalysisParameters) -> Self {
        Self { params }
    }

    pub fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        input.validate()?;

        let potential = potential::calculate(
            input.roof_area(),
            input.location_data.annual_rainfall(),
            input.dwellers,
            &self.params,
        );
        let recommendation = recommend::recommend(input.open_space(), &self.params);
        let projection = cost::project(
            &recommendation.design,
            potential.annual_harvestable,
            &self.params,
        );

        debug!(
            design = %recommendation.design.kind(),
            harvestable_l = potential.annual_harvestable.as_liters(),
            needs_met_percent = potential.needs_met.as_percent(),
            cost_inr = projection.estimated_cost.as_inr(),
            "analysis complete"
        );

        Ok(assemble(input, potential, recommendation, projection))
    }
}

/// Analyze with the default parameters
pub fn run_analysis(input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
    AnalysisEngine::default().analyze(input)
}

fn assemble(
    input: &AnalysisInput,
    potential: HarvestPotential,
    recommendation: Recommendation,
    projection: CostProjection,
) -> AnalysisResult {
    AnalysisResult {
        potential_analysis: PotentialAnalysis {
            annual_harvestable_water_liters: round_whole(potential.annual_harvestable.as_liters()),
            percentage_of_needs_met: round_to(potential.needs_met.as_percent(), 2),
        },
        system_recommendation: SystemRecommendation {
            name: recommendation.design.kind().to_string(),
            design: recommendation.design,
            reason: recommendation.reason,
        },
        cost_benefit_analysis: CostBenefitAnalysis {
            estimated_cost_inr: projection.estimated_cost.to_whole(),
            annual_savings_inr: projection.annual_savings.to_whole(),
            roi_years: projection.payback,
        },
        location_data: input.location_data.clone(),
    }
}
