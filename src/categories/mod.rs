//! Category calculators
//!
//! Each of the six questionnaire categories has its own calculator module.
//! Calculators are independent pure functions of one answer record and the
//! factor table; they return tonnes CO2e and never fail.

pub mod energy;
pub mod transport;
pub mod waste;
pub mod purchases;
pub mod it;
pub mod real_estate;

// Re-export calculator functions
pub use energy::calculate_energy;
pub use transport::{calculate_transport, commuting_kg, WORKING_DAYS_PER_YEAR};
pub use waste::calculate_waste;
pub use purchases::calculate_purchases;
pub use it::calculate_it;
pub use real_estate::calculate_real_estate;

use serde::{Deserialize, Serialize};

use crate::data::EmissionData;
use crate::factors::EmissionFactors;
use crate::utils::coercion::{quantity, safe_ratio};

/// The six questionnaire categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmissionCategory {
    Energy,
    Transport,
    Waste,
    Purchases,
    It,
    RealEstate,
}

impl EmissionCategory {
    pub const ALL: [EmissionCategory; 6] = [
        EmissionCategory::Energy,
        EmissionCategory::Transport,
        EmissionCategory::Waste,
        EmissionCategory::Purchases,
        EmissionCategory::It,
        EmissionCategory::RealEstate,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EmissionCategory::Energy => "Energy",
            EmissionCategory::Transport => "Transport",
            EmissionCategory::Waste => "Waste",
            EmissionCategory::Purchases => "Purchases",
            EmissionCategory::It => "IT",
            EmissionCategory::RealEstate => "Real estate",
        }
    }
}

/// Emissions per category in tCO2e
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub energy: f64,
    pub transport: f64,
    pub waste: f64,
    pub purchases: f64,
    pub it: f64,
    pub real_estate: f64,
}

impl CategoryBreakdown {
    pub fn get(&self, category: EmissionCategory) -> f64 {
        match category {
            EmissionCategory::Energy => self.energy,
            EmissionCategory::Transport => self.transport,
            EmissionCategory::Waste => self.waste,
            EmissionCategory::Purchases => self.purchases,
            EmissionCategory::It => self.it,
            EmissionCategory::RealEstate => self.real_estate,
        }
    }

    /// Categories with their totals, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (EmissionCategory, f64)> + '_ {
        EmissionCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of all six categories
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    /// Share of `total` held by `category`, in percent (0 when total is 0)
    pub fn share(&self, category: EmissionCategory, total: f64) -> f64 {
        safe_ratio(self.get(category), total) * 100.0
    }
}

/// Run all six calculators
///
/// Each result is resolved to a finite, non-negative value. Extreme answers
/// can overflow a product to infinity; such a category counts as 0.
pub fn calculate_categories(data: &EmissionData, factors: &EmissionFactors) -> CategoryBreakdown {
    CategoryBreakdown {
        energy: resolve(EmissionCategory::Energy, calculate_energy(&data.energy, factors)),
        transport: resolve(
            EmissionCategory::Transport,
            calculate_transport(&data.transport, factors),
        ),
        waste: resolve(EmissionCategory::Waste, calculate_waste(&data.waste, factors)),
        purchases: resolve(
            EmissionCategory::Purchases,
            calculate_purchases(&data.purchases, factors),
        ),
        it: resolve(EmissionCategory::It, calculate_it(&data.it, factors)),
        real_estate: resolve(
            EmissionCategory::RealEstate,
            calculate_real_estate(&data.real_estate, factors),
        ),
    }
}

fn resolve(category: EmissionCategory, tonnes: f64) -> f64 {
    if !tonnes.is_finite() {
        tracing::warn!("{} emissions overflowed ({}), counting as 0", category.display_name(), tonnes);
    }
    quantity(Some(tonnes))
}
