//! Recommendation decision table
//!
//! A rule fires when its category holds strictly more than `trigger_share`
//! of the total footprint. Several rules can share a trigger (energy and
//! transport each have two). Table order is the tie-break order once the
//! generator sorts by priority. Real estate has no rule.

use crate::categories::{CategoryBreakdown, EmissionCategory};
use crate::recommendations::types::{Difficulty, Impact, Recommendation};

/// One row of the decision table
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    pub id: &'static str,
    pub category: EmissionCategory,
    /// Fraction of total emissions the category must exceed
    pub trigger_share: f64,
    /// Fraction of the category total the action removes
    pub reduction_fraction: f64,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub difficulty: Difficulty,
    pub estimated_cost: f64,
    pub payback_months: u32,
    pub priority: u8,
}

impl RecommendationRule {
    pub fn is_triggered(&self, categories: &CategoryBreakdown, total_emissions: f64) -> bool {
        categories.get(self.category) > total_emissions * self.trigger_share
    }

    pub fn to_recommendation(&self, categories: &CategoryBreakdown) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            category: self.category,
            title: self.title.to_string(),
            description: self.description.to_string(),
            impact: self.impact,
            difficulty: self.difficulty,
            potential_reduction: categories.get(self.category) * self.reduction_fraction,
            estimated_cost: self.estimated_cost,
            payback_period: self.payback_months,
            priority: self.priority,
        }
    }
}

pub static RULES: &[RecommendationRule] = &[
    // Energy
    RecommendationRule {
        id: "led-lighting",
        category: EmissionCategory::Energy,
        trigger_share: 0.20,
        reduction_fraction: 0.15,
        title: "Switch to LED lighting",
        description: "Replace all lighting with LEDs to cut lighting electricity use by 50-70%",
        impact: Impact::Medium,
        difficulty: Difficulty::Easy,
        estimated_cost: 5000.0,
        payback_months: 18,
        priority: 4,
    },
    RecommendationRule {
        id: "renewable-energy",
        category: EmissionCategory::Energy,
        trigger_share: 0.20,
        reduction_fraction: 0.70,
        title: "Green electricity contract",
        description: "Subscribe to a 100% renewable electricity supply contract",
        impact: Impact::High,
        difficulty: Difficulty::Easy,
        estimated_cost: 0.0,
        payback_months: 0,
        priority: 5,
    },
    // Transport
    RecommendationRule {
        id: "remote-work",
        category: EmissionCategory::Transport,
        trigger_share: 0.25,
        reduction_fraction: 0.40,
        title: "Remote work two days a week",
        description: "Introduce a remote work policy to reduce home-to-work commuting",
        impact: Impact::Medium,
        difficulty: Difficulty::Medium,
        estimated_cost: 2000.0,
        payback_months: 6,
        priority: 4,
    },
    RecommendationRule {
        id: "electric-vehicles",
        category: EmissionCategory::Transport,
        trigger_share: 0.25,
        reduction_fraction: 0.60,
        title: "Electric vehicle fleet",
        description: "Progressively replace the company fleet with electric vehicles",
        impact: Impact::High,
        difficulty: Difficulty::Hard,
        estimated_cost: 25000.0,
        payback_months: 48,
        priority: 3,
    },
    // Waste
    RecommendationRule {
        id: "waste-reduction",
        category: EmissionCategory::Waste,
        trigger_share: 0.10,
        reduction_fraction: 0.50,
        title: "Waste reduction programme",
        description: "Set up selective sorting and reduce waste at the source",
        impact: Impact::Medium,
        difficulty: Difficulty::Medium,
        estimated_cost: 3000.0,
        payback_months: 12,
        priority: 3,
    },
    // IT
    RecommendationRule {
        id: "server-optimization",
        category: EmissionCategory::It,
        trigger_share: 0.15,
        reduction_fraction: 0.30,
        title: "Server optimisation",
        description: "Virtualize servers and raise their utilization",
        impact: Impact::Medium,
        difficulty: Difficulty::Medium,
        estimated_cost: 8000.0,
        payback_months: 24,
        priority: 3,
    },
    // Purchases
    RecommendationRule {
        id: "local-suppliers",
        category: EmissionCategory::Purchases,
        trigger_share: 0.30,
        reduction_fraction: 0.25,
        title: "Local and eco-certified suppliers",
        description: "Favour local suppliers with environmental certification",
        impact: Impact::High,
        difficulty: Difficulty::Medium,
        estimated_cost: 0.0,
        payback_months: 0,
        priority: 4,
    },
];
