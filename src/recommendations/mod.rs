pub mod types;
pub mod rules;
pub mod generator;

pub use types::{ActionPlan, Difficulty, Impact, Recommendation};
pub use rules::{RecommendationRule, RULES};
pub use generator::RecommendationGenerator;
