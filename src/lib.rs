//! Rainwater harvesting advisor.
//!
//! Estimates how much rainwater a household roof can yield, recommends a
//! groundwater recharge structure for the available open space and projects
//! its cost and payback. The [`analysis`] engine is pure; [`api`] exposes it
//! over HTTP.

pub mod advisor;
pub mod analysis;
pub mod api;
pub mod config;
pub mod domain;
pub mod location;
pub mod roof;
pub mod telemetry;

pub use analysis::{run_analysis, AnalysisEngine, AnalysisParameters};
pub use domain::{AnalysisError, AnalysisInput, AnalysisResult, LocationData, Payback, RechargeDesign};
