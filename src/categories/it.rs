//! CATEGORY: IT
//!
//! Device footprints are annualized per unit. Cloud spend is answered per
//! month and annualized here (×12).

use crate::data::ItData;
use crate::factors::EmissionFactors;
use crate::utils::coercion::quantity;

const MONTHS_PER_YEAR: f64 = 12.0;

/// IT emissions in tCO2e
pub fn calculate_it(it: &ItData, factors: &EmissionFactors) -> f64 {
    let f = &factors.it;

    let servers_kg = quantity(it.servers) * f.server;
    let computers_kg = quantity(it.computers) * f.computer;
    let mobile_kg = quantity(it.mobile_devices) * f.mobile_device;
    let cloud_kg = quantity(it.cloud_services) * MONTHS_PER_YEAR * f.cloud_services;
    let storage_kg = quantity(it.data_storage) * f.data_storage;

    (servers_kg + computers_kg + mobile_kg + cloud_kg + storage_kg) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::BUILTIN_FACTORS;
    use approx::assert_relative_eq;

    #[test]
    fn test_it() {
        let it = ItData {
            servers: Some(4.0),
            computers: Some(30.0),
            mobile_devices: Some(25.0),
            cloud_services: Some(500.0),
            data_storage: Some(10.0),
        };
        // 1200 + 2400 + 625 + 3000 + 500 = 7725 kg
        assert_relative_eq!(calculate_it(&it, &BUILTIN_FACTORS), 7.725, epsilon = 1e-9);
    }

    #[test]
    fn test_cloud_spend_is_annualized() {
        let it = ItData {
            cloud_services: Some(100.0),
            ..ItData::default()
        };
        assert_relative_eq!(calculate_it(&it, &BUILTIN_FACTORS), 0.6, epsilon = 1e-9);
    }
}
