//! Carbon Footprint Engine
//!
//! Estimates an organization's annual greenhouse-gas emissions (tCO2e) from
//! questionnaire answers, following a modular pipeline:
//! - `data`: questionnaire model with lenient deserialization
//! - `factors`: emission factor table (built-in or loaded from JSON)
//! - `categories/`: one calculator per emission category
//! - `scope`: Scope 1/2/3 allocation
//! - `benchmark`: per-employee comparison against sector benchmarks
//! - `calculator`: coordinator producing `EmissionResults`
//! - `recommendations/`: rule-driven reduction actions
//! - `report/`: markdown and JSON rendering

pub mod utils;
pub mod error;
pub mod data;
pub mod factors;
pub mod categories;
pub mod scope;
pub mod benchmark;
pub mod calculator;
pub mod recommendations;
pub mod report;

// Re-export commonly used types
pub use error::FactorError;
pub use data::{
    Company, CompanySize, EmissionData, EnergyRating, IndustrySector, Survey, SurveyInput,
};
pub use factors::{EmissionFactors, BUILTIN_FACTORS};
pub use categories::{CategoryBreakdown, EmissionCategory};
pub use scope::ScopeBreakdown;
pub use benchmark::{BenchmarkComparison, EmissionTrend, PerformanceLabel};
pub use calculator::{calculate_emissions, EmissionResults, EmissionsCalculator};
pub use recommendations::{ActionPlan, Recommendation, RecommendationGenerator};
pub use report::{EmissionReport, JsonFormatter, MarkdownFormatter};
pub use utils::format_emissions;
