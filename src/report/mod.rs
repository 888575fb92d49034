//! Footprint report
//!
//! Bundles a calculation result with the company it belongs to, the action
//! plan and the derived labels, ready for rendering.

pub mod formatters;

use serde::{Deserialize, Serialize};

use crate::benchmark::{EmissionTrend, PerformanceLabel};
use crate::calculator::EmissionResults;
use crate::data::Company;
use crate::recommendations::{ActionPlan, RecommendationGenerator};

pub use formatters::{JsonFormatter, MarkdownFormatter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionReport {
    pub company: Company,
    pub results: EmissionResults,
    pub action_plan: ActionPlan,
    pub trend: EmissionTrend,
    pub performance: PerformanceLabel,
}

impl EmissionReport {
    pub fn build(company: &Company, results: &EmissionResults) -> Self {
        Self {
            company: company.clone(),
            results: *results,
            action_plan: RecommendationGenerator::action_plan(
                &results.emissions_by_category,
                results.total_emissions,
            ),
            trend: results.trend(),
            performance: results.benchmark_comparison.performance(),
        }
    }
}
