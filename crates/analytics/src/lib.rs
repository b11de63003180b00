//! # Carlog Analytics Engine
//!
//! This crate derives fuel-efficiency metrics from a user's fill-up history.
//! It is the only place in the system where mileage math lives; the dashboard,
//! the statistics screen, and the per-vehicle cards all call through here.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `FuelEfficiencyAnalyzer` is a stateless
//!   calculator. It takes an in-memory collection of `FuelLog` records as
//!   input and produces derived metrics as output. This makes it highly
//!   reliable and easy to test.
//! - **Degrade, never fail:** insufficient or corrupt data yields `None` or
//!   an empty result, so one bad record never blocks the metrics that can
//!   still be computed from the good ones.
//!
//! ## Public API
//!
//! - `FuelEfficiencyAnalyzer`: The main struct that contains the calculation logic.
//! - `EfficiencyRating`, `VehicleEfficiencyRanking`, `MonthlyComparison`,
//!   `FuelUsageSummary`: the derived result types handed to presentation code.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::FuelEfficiencyAnalyzer;
pub use report::{
    EfficiencyRating, FuelUsageSummary, MileageSample, MonthlyComparison, PlausibilityWarning,
    VehicleEfficiencyRanking, WarningLevel, format_mileage,
};
