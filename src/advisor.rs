use std::sync::Arc;
use thiserror::Error;
use tokio::task::{self, JoinError};
use tracing::info;

use crate::analysis::AnalysisEngine;
use crate::config::Config;
use crate::domain::{AnalysisError, AnalysisInput, AnalysisResult, GeoPoint, LocationError, SquareMeters};
use crate::location::{LocationResolver, StaticLocationResolver};
use crate::roof::{PlaceholderRoofEstimator, RoofAreaEstimator, RoofEstimateError};

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Roof(#[from] RoofEstimateError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("roof estimation task failed: {0}")]
    Task(#[from] JoinError),
}

/// Where the roof area comes from
#[derive(Debug, Clone)]
pub enum RoofSource {
    Manual(f64),
    Photo(Vec<u8>),
}

/// One household analysis request as submitted by a client
#[derive(Debug, Clone)]
pub struct AdvisorRequest {
    pub dwellers: u32,
    pub open_space_sq_m: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub roof: RoofSource,
}

/// Resolves roof area and location, then runs the analysis engine
pub struct Advisor {
    engine: AnalysisEngine,
    locations: Arc<dyn LocationResolver>,
    roof_estimator: Arc<dyn RoofAreaEstimator>,
}

impl Advisor {
    pub fn new(
        engine: AnalysisEngine,
        locations: Arc<dyn LocationResolver>,
        roof_estimator: Arc<dyn RoofAreaEstimator>,
    ) -> Self {
        Self {
            engine,
            locations,
            roof_estimator,
        }
    }

    pub async fn analyze(&self, req: AdvisorRequest) -> Result<AnalysisResult, AdvisorError> {
        let roof_area = match req.roof {
            RoofSource::Manual(area) => SquareMeters::new(area),
            RoofSource::Photo(image) => {
                // image analysis is CPU bound, keep it off the async workers
                let estimator = Arc::clone(&self.roof_estimator);
                task::spawn_blocking(move || estimator.estimate(&image)).await??
            }
        };

        let point = GeoPoint::new(req.latitude, req.longitude)?;
        let location_data = self.locations.resolve(point).await?;

        let input = AnalysisInput::new(
            roof_area.as_sq_m(),
            req.dwellers,
            req.open_space_sq_m,
            location_data,
        );
        let result = self.engine.analyze(&input)?;

        info!(
            roof_area = %roof_area,
            dwellers = req.dwellers,
            design = %result.system_recommendation.name,
            harvestable_l = result.potential_analysis.annual_harvestable_water_liters,
            "household analysed"
        );
        Ok(result)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub advisor: Arc<Advisor>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let engine = AnalysisEngine::new(cfg.analysis.clone());
        let locations: Arc<dyn LocationResolver> =
            Arc::new(StaticLocationResolver::new(cfg.location.to_location_data()));
        let roof_estimator: Arc<dyn RoofAreaEstimator> = Arc::new(PlaceholderRoofEstimator::new(
            SquareMeters::new(cfg.roof_estimator.placeholder_area_sq_m),
        ));

        Self {
            cfg,
            advisor: Arc::new(Advisor::new(engine, locations, roof_estimator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Payback;

    fn request(roof: RoofSource) -> AdvisorRequest {
        AdvisorRequest {
            dwellers: 4,
            open_space_sq_m: 20.0,
            latitude: 29.3803,
            longitude: 79.4636,
            roof,
        }
    }

    #[tokio::test]
    async fn test_manual_roof_area() {
        let state = AppState::new(Config::default());
        let result = state
            .advisor
            .analyze(request(RoofSource::Manual(150.0)))
            .await
            .unwrap();

        assert_eq!(result.potential_analysis.annual_harvestable_water_liters, 187_425);
        assert_eq!(result.cost_benefit_analysis.roi_years, Payback::Years { years: 0.6 });
        assert_eq!(result.location_data.principal_aquifer, "Fissured Rock");
    }

    #[tokio::test]
    async fn test_photo_uses_estimated_area() {
        let mut cfg = Config::default();
        cfg.roof_estimator.placeholder_area_sq_m = 100.0;
        let state = AppState::new(cfg);

        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        let result = state
            .advisor
            .analyze(request(RoofSource::Photo(jpeg)))
            .await
            .unwrap();

        // 100 m² * 1.47 m * 0.85
        assert_eq!(result.potential_analysis.annual_harvestable_water_liters, 124_950);
    }

    #[tokio::test]
    async fn test_unreadable_photo_fails() {
        let state = AppState::new(Config::default());
        let err = state
            .advisor
            .analyze(request(RoofSource::Photo(b"not an image".to_vec())))
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Roof(RoofEstimateError::UnsupportedFormat)));
    }

    #[tokio::test]
    async fn test_bad_coordinates_fail() {
        let state = AppState::new(Config::default());
        let mut req = request(RoofSource::Manual(150.0));
        req.latitude = 120.0;
        let err = state.advisor.analyze(req).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Location(_)));
    }

    #[tokio::test]
    async fn test_invalid_household_fails() {
        let state = AppState::new(Config::default());
        let mut req = request(RoofSource::Manual(150.0));
        req.dwellers = 0;
        let err = state.advisor.analyze(req).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Analysis(AnalysisError::NoDwellers)));
    }

    struct BrokenEstimator;

    impl RoofAreaEstimator for BrokenEstimator {
        fn estimate(&self, _image: &[u8]) -> Result<SquareMeters, RoofEstimateError> {
            panic!("estimator crashed");
        }
    }

    #[tokio::test]
    async fn test_crashed_estimator_is_task_error() {
        let cfg = Config::default();
        let advisor = Advisor::new(
            AnalysisEngine::new(cfg.analysis.clone()),
            Arc::new(StaticLocationResolver::new(cfg.location.to_location_data())),
            Arc::new(BrokenEstimator),
        );

        let err = advisor
            .analyze(request(RoofSource::Photo(vec![0xFF, 0xD8, 0xFF])))
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Task(_)));
    }
}
