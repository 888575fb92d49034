//! CATEGORY: WASTE
//!
//! Waste quantities are answered in tonnes while the waste factors are
//! kg-basis. Each term is converted to kg (×1000) and the sum is converted
//! back to tonnes (÷1000), so the kg factors apply directly per tonne.
//! Both conversions are kept so the unit bookkeeping stays visible.

use crate::data::WasteData;
use crate::factors::EmissionFactors;
use crate::utils::coercion::{fraction, quantity};

const KG_PER_TONNE: f64 = 1000.0;

/// Waste emissions in tCO2e
pub fn calculate_waste(waste: &WasteData, factors: &EmissionFactors) -> f64 {
    let f = &factors.waste;

    let total_waste = quantity(waste.total_waste);
    let recycling_rate = fraction(waste.recycling_rate);

    let recycled = total_waste * recycling_rate;
    let landfilled = total_waste * (1.0 - recycling_rate);

    let recycling_kg = recycled * f.recycling * KG_PER_TONNE;
    let landfill_kg = landfilled * f.landfill * KG_PER_TONNE;
    let organic_kg = quantity(waste.organic_waste) * f.organic * KG_PER_TONNE;
    let hazardous_kg = quantity(waste.hazardous_waste) * f.hazardous * KG_PER_TONNE;

    (recycling_kg + landfill_kg + organic_kg + hazardous_kg) / KG_PER_TONNE
}
