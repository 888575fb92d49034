//! CATEGORY: PURCHASES
//!
//! Spend-based estimate: each purchasing line × its kg-per-currency-unit factor.

use crate::data::PurchaseData;
use crate::factors::EmissionFactors;
use crate::utils::coercion::quantity;

/// Purchasing emissions in tCO2e
pub fn calculate_purchases(purchases: &PurchaseData, factors: &EmissionFactors) -> f64 {
    let f = &factors.purchases;

    let total_kg = quantity(purchases.raw_materials) * f.raw_materials
        + quantity(purchases.equipment) * f.equipment
        + quantity(purchases.services) * f.services
        + quantity(purchases.digital_services) * f.digital_services;

    total_kg / 1000.0
}
