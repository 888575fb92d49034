use serde::{Deserialize, Serialize};

use crate::categories::EmissionCategory;
use crate::utils::coercion::safe_ratio;

/// Expected emission impact of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn display_name(&self) -> &'static str {
        match self {
            Impact::Low => "Low impact",
            Impact::Medium => "Medium impact",
            Impact::High => "High impact",
        }
    }
}

/// Implementation effort of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One reduction action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,                // "led-lighting"
    pub category: EmissionCategory,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub difficulty: Difficulty,
    pub potential_reduction: f64,  // tCO2e
    pub estimated_cost: f64,       // currency units
    pub payback_period: u32,       // months
    pub priority: u8,              // 1-5, 5 = act first
}

/// Recommendations plus the headline figures of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub recommendations: Vec<Recommendation>,
    /// Sum of potential reductions (tCO2e)
    pub total_potential_reduction: f64,
    /// Potential reduction as a percentage of total emissions
    pub reduction_percentage: f64,
    pub easy_actions: usize,
    /// Mean payback period, rounded to whole months
    pub average_payback_months: u32,
    pub total_estimated_cost: f64,
}

impl ActionPlan {
    /// Summarize a recommendation list against the footprint it was built for
    pub fn new(recommendations: Vec<Recommendation>, total_emissions: f64) -> Self {
        let total_potential_reduction: f64 =
            recommendations.iter().map(|r| r.potential_reduction).sum();

        let easy_actions = recommendations
            .iter()
            .filter(|r| r.difficulty == Difficulty::Easy)
            .count();

        let total_payback: u32 = recommendations.iter().map(|r| r.payback_period).sum();
        let average_payback_months = if recommendations.is_empty() {
            0
        } else {
            (total_payback as f64 / recommendations.len() as f64).round() as u32
        };

        let total_estimated_cost = recommendations.iter().map(|r| r.estimated_cost).sum();

        Self {
            reduction_percentage: safe_ratio(total_potential_reduction, total_emissions) * 100.0,
            total_potential_reduction,
            easy_actions,
            average_payback_months,
            total_estimated_cost,
            recommendations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
