pub mod cost;
pub mod engine;
pub mod params;
pub mod potential;
pub mod recommend;

pub use engine::*;
pub use params::AnalysisParameters;
