use crate::categories::CategoryBreakdown;
use crate::recommendations::rules::RULES;
use crate::recommendations::types::{ActionPlan, Recommendation};

/// Rule-driven recommendation generator
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Evaluate every rule against the category totals
    ///
    /// Returns the fired recommendations sorted by descending priority.
    /// The sort is stable, so equal priorities keep rule-table order.
    /// A zero (or invalid) total fires nothing.
    pub fn generate(categories: &CategoryBreakdown, total_emissions: f64) -> Vec<Recommendation> {
        if !(total_emissions.is_finite() && total_emissions > 0.0) {
            return Vec::new();
        }

        let mut recommendations: Vec<Recommendation> = RULES
            .iter()
            .filter(|rule| rule.is_triggered(categories, total_emissions))
            .map(|rule| rule.to_recommendation(categories))
            .collect();

        recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));

        tracing::debug!(
            "Generated {} recommendations for {:.3} t total",
            recommendations.len(),
            total_emissions
        );

        recommendations
    }

    /// Generate recommendations and summarize them as an action plan
    pub fn action_plan(categories: &CategoryBreakdown, total_emissions: f64) -> ActionPlan {
        ActionPlan::new(Self::generate(categories, total_emissions), total_emissions)
    }
}
