//! Concurrent callers share one engine and one app state.

use std::sync::Arc;
use tokio::task::JoinSet;

use rainwater_harvest_advisor::advisor::{AdvisorRequest, AppState, RoofSource};
use rainwater_harvest_advisor::config::Config;
use rainwater_harvest_advisor::{AnalysisEngine, AnalysisInput, LocationData};

fn location() -> LocationData {
    LocationData::new(1470.0, "Fissured Rock", "10-20 meters")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_engine_shared_across_tasks() {
    let engine = Arc::new(AnalysisEngine::default());
    let expected = engine
        .analyze(&AnalysisInput::new(150.0, 4, 20.0, location()))
        .unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..64 {
        let engine = engine.clone();
        tasks.spawn(async move {
            engine
                .analyze(&AnalysisInput::new(150.0, 4, 20.0, location()))
                .unwrap()
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert_eq!(result.unwrap(), expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_advisor_requests_are_independent() {
    let state = AppState::new(Config::default());

    let mut tasks = JoinSet::new();
    for i in 0..50u32 {
        let state = state.clone();
        tasks.spawn(async move {
            let space = if i % 2 == 0 { 20.0 } else { 5.0 };
            let result = state
                .advisor
                .analyze(AdvisorRequest {
                    dwellers: 4,
                    open_space_sq_m: space,
                    latitude: 29.3803,
                    longitude: 79.4636,
                    roof: RoofSource::Manual(150.0),
                })
                .await
                .unwrap();
            (i, result)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (i, result) = joined.unwrap();
        let expected_cost = if i % 2 == 0 { 2651 } else { 1500 };
        assert_eq!(result.cost_benefit_analysis.estimated_cost_inr, expected_cost);
        assert_eq!(result.potential_analysis.annual_harvestable_water_liters, 187_425);
    }
}
