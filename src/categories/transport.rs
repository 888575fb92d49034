//! CATEGORY: TRANSPORT
//!
//! Three independent contributions, summed in kg and converted to tonnes:
//!   1. Business trips: car, train and plane km. Plane km always use the
//!      international per-km factor, whatever the trip length.
//!   2. Commuting: employees × modal share × annual round-trip distance,
//!      with 220 working days per year.
//!   3. Freight: tonne-km per mode × mode factor.

use crate::data::{BusinessTrips, Commuting, Freight, TransportData};
use crate::factors::{EmissionFactors, TransportFactors};
use crate::utils::coercion::{fraction, quantity};

/// Working days per year used for commuting distance
pub const WORKING_DAYS_PER_YEAR: f64 = 220.0;

/// Transport emissions in tCO2e
pub fn calculate_transport(transport: &TransportData, factors: &EmissionFactors) -> f64 {
    let f = &factors.transport;

    let business_kg = business_trips_kg(&transport.business_trips, f);
    let commuting_kg = commuting_kg(&transport.commuting, f);
    let freight_kg = freight_kg(&transport.freight, f);

    (business_kg + commuting_kg + freight_kg) / 1000.0
}

fn business_trips_kg(trips: &BusinessTrips, f: &TransportFactors) -> f64 {
    quantity(trips.car) * f.car
        + quantity(trips.train) * f.train
        + quantity(trips.plane) * f.plane.international
}

/// Annual commuting emissions in kg
pub fn commuting_kg(commuting: &Commuting, f: &TransportFactors) -> f64 {
    let employees = quantity(commuting.total_employees);
    let car_share = fraction(commuting.car_percentage);
    let public_share = fraction(commuting.public_transport_percentage);

    // Nobody commutes: skip before the distance term can overflow
    if employees == 0.0 || car_share + public_share == 0.0 {
        return 0.0;
    }

    // Round trip, every working day
    let annual_distance = quantity(commuting.average_distance) * 2.0 * WORKING_DAYS_PER_YEAR;

    let car_kg = employees * car_share * annual_distance * f.car;
    let public_kg = employees * public_share * annual_distance * f.public_transport;

    car_kg + public_kg
}

fn freight_kg(freight: &Freight, f: &TransportFactors) -> f64 {
    quantity(freight.road) * f.freight.road
        + quantity(freight.rail) * f.freight.rail
        + quantity(freight.sea) * f.freight.sea
        + quantity(freight.air) * f.freight.air
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::BUILTIN_FACTORS;
    use approx::assert_relative_eq;

    fn sample_transport() -> TransportData {
        TransportData {
            business_trips: BusinessTrips {
                car: Some(15_000.0),
                train: Some(8_000.0),
                plane: Some(20_000.0),
            },
            commuting: Commuting {
                total_employees: Some(25.0),
                average_distance: Some(12.0),
                car_percentage: Some(60.0),
                public_transport_percentage: Some(30.0),
            },
            freight: Freight {
                road: Some(10_000.0),
                rail: Some(5_000.0),
                sea: Some(20_000.0),
                air: Some(100.0),
            },
        }
    }

    #[test]
    fn test_business_trips_use_international_plane_factor() {
        let trips = BusinessTrips { car: None, train: None, plane: Some(1000.0) };
        let kg = business_trips_kg(&trips, &BUILTIN_FACTORS.transport);
        assert_relative_eq!(kg, 195.0, epsilon = 1e-9);
    }

    #[test]
    fn test_commuting() {
        // 12 km × 2 × 220 = 5280 km per employee
        // car: 25 × 0.6 × 5280 × 0.193 = 15285.6
        // public: 25 × 0.3 × 5280 × 0.103 = 4078.8
        let kg = commuting_kg(&sample_transport().commuting, &BUILTIN_FACTORS.transport);
        assert_relative_eq!(kg, 19_364.4, epsilon = 1e-6);
    }

    #[test]
    fn test_full_transport() {
        // business 7091 + commuting 19364.4 + freight 1654 = 28109.4 kg
        let result = calculate_transport(&sample_transport(), &BUILTIN_FACTORS);
        assert_relative_eq!(result, 28.1094, epsilon = 1e-9);
    }

    #[test]
    fn test_commuting_without_employees_is_zero() {
        let mut transport = sample_transport();
        transport.commuting.total_employees = None;
        let kg = commuting_kg(&transport.commuting, &BUILTIN_FACTORS.transport);
        assert_eq!(kg, 0.0);
    }

    #[test]
    fn test_huge_distance_without_commuters_is_zero() {
        let commuting = Commuting { average_distance: Some(1e308), ..Commuting::default() };
        assert_eq!(commuting_kg(&commuting, &BUILTIN_FACTORS.transport), 0.0);

        let commuting = Commuting {
            total_employees: Some(10.0),
            average_distance: Some(1e308),
            car_percentage: Some(0.0),
            ..Commuting::default()
        };
        assert_eq!(commuting_kg(&commuting, &BUILTIN_FACTORS.transport), 0.0);
    }

    #[test]
    fn test_empty_transport_is_zero() {
        assert_eq!(calculate_transport(&TransportData::default(), &BUILTIN_FACTORS), 0.0);
    }
}
