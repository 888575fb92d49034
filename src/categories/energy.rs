//! CATEGORY: ENERGY
//!
//! Electricity, natural gas and fuel consumption. The renewable share of
//! electricity removes that share of the electricity term only; gas and fuel
//! are unaffected.

use crate::data::EnergyData;
use crate::factors::EmissionFactors;
use crate::utils::coercion::{fraction, quantity};

/// Energy emissions in tCO2e
pub fn calculate_energy(energy: &EnergyData, factors: &EmissionFactors) -> f64 {
    let f = &factors.energy;

    let electricity_kg = quantity(energy.electricity) * f.electricity;
    let gas_kg = quantity(energy.gas) * f.gas;
    let fuel_kg = quantity(energy.fuel) * f.fuel;

    let renewable_share = fraction(energy.renewable_percentage);
    let adjusted_electricity_kg = electricity_kg * (1.0 - renewable_share);

    (adjusted_electricity_kg + gas_kg + fuel_kg) / 1000.0
}
