//! CATEGORY: REAL ESTATE
//!
//! Floor area × per-m² factor, scaled by the building's energy rating.
//! A missing rating counts as class D (multiplier 1.0 in the built-in table).

use crate::data::RealEstateData;
use crate::factors::EmissionFactors;
use crate::utils::coercion::quantity;

/// Real estate emissions in tCO2e
pub fn calculate_real_estate(real_estate: &RealEstateData, factors: &EmissionFactors) -> f64 {
    let f = &factors.real_estate;

    let office_kg = quantity(real_estate.office_space) * f.office;
    let warehouse_kg = quantity(real_estate.warehouse_space) * f.warehouse;

    let rating = real_estate.energy_efficiency_rating.unwrap_or_default();
    let multiplier = f.energy_rating_multiplier.get(rating);

    (office_kg + warehouse_kg) * multiplier / 1000.0
}
