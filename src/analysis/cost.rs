//! Construction cost, water savings and payback period.

use crate::domain::{round_to, Liters, Payback, RechargeDesign, Rupees};

use super::params::AnalysisParameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostProjection {
    pub estimated_cost: Rupees,
    pub annual_savings: Rupees,
    pub payback: Payback,
}

pub fn construction_cost(design: &RechargeDesign, params: &AnalysisParameters) -> Rupees {
    Rupees::inr(design.volume().as_m3() * params.excavation_cost_per_m3)
}

/// Value of the harvested water at the substitute supply price
pub fn annual_savings(harvestable: Liters, params: &AnalysisParameters) -> Rupees {
    Rupees::inr(harvestable.as_kiloliters() * params.water_cost_per_kl)
}

/// Years of savings needed to cover the cost, to one decimal
pub fn payback(cost: Rupees, savings: Rupees) -> Payback {
    if savings.as_inr() > 0.0 {
        Payback::Years {
            years: round_to(cost.as_inr() / savings.as_inr(), 1),
        }
    } else {
        Payback::NotApplicable
    }
}

pub fn project(
    design: &RechargeDesign,
    harvestable: Liters,
    params: &AnalysisParameters,
) -> CostProjection {
    let estimated_cost = construction_cost(design, params);
    let annual_savings = annual_savings(harvestable, params);

    CostProjection {
        estimated_cost,
        annual_savings,
        payback: payback(estimated_cost, annual_savings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PitDimensions, TrenchDimensions};

    #[test]
    fn test_pit_projection() {
        let projection = project(
            &RechargeDesign::Pit(PitDimensions::default()),
            Liters::new(187_425.0),
            &AnalysisParameters::default(),
        );

        assert_eq!(projection.estimated_cost.to_whole(), 2651);
        assert_eq!(projection.annual_savings.to_whole(), 4686);
        assert_eq!(projection.payback, Payback::Years { years: 0.6 });
    }

    #[test]
    fn test_trench_cost() {
        let cost = construction_cost(
            &RechargeDesign::Trench(TrenchDimensions::default()),
            &AnalysisParameters::default(),
        );
        assert_eq!(cost.to_whole(), 1500);
    }

    #[test]
    fn test_no_savings_is_not_applicable() {
        assert_eq!(payback(Rupees::inr(2651.0), Rupees::inr(0.0)), Payback::NotApplicable);
        assert_eq!(payback(Rupees::inr(2651.0), Rupees::inr(-10.0)), Payback::NotApplicable);
    }

    #[test]
    fn test_free_water_never_pays_back() {
        let mut params = AnalysisParameters::default();
        params.water_cost_per_kl = 0.0;
        let projection = project(
            &RechargeDesign::Trench(TrenchDimensions::default()),
            Liters::new(50_000.0),
            &params,
        );
        assert_eq!(projection.annual_savings.to_whole(), 0);
        assert!(!projection.payback.is_applicable());
    }

    #[test]
    fn test_payback_rounds_to_one_decimal() {
        let years = payback(Rupees::inr(1500.0), Rupees::inr(400.0)).years();
        assert_eq!(years, Some(3.8));
    }
}
