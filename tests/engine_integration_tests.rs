// Engine Integration Tests
//
// Purpose: Run the full pipeline on a JSON survey fixture and check the
// aggregate invariants on randomized questionnaires.
// Run with: cargo test --test engine_integration_tests

use std::path::Path;

use approx::assert_relative_eq;
use carbon_footprint_engine::data::{
    BusinessTrips, Commuting, EnergyData, Freight, ItData, PurchaseData, RealEstateData,
    TransportData, WasteData,
};
use carbon_footprint_engine::{
    calculate_emissions, Company, CompanySize, EmissionData, EmissionFactors, EmissionReport,
    EmissionTrend, EmissionsCalculator, EnergyRating, IndustrySector, JsonFormatter,
    MarkdownFormatter, PerformanceLabel, RecommendationGenerator, Survey, SurveyInput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fixture_surveys() -> Vec<Survey> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_survey.json");
    SurveyInput::load(&path)
        .expect("Failed to load survey fixture")
        .into_surveys()
}

// =========================================================================
// Section 1: Fixture pipeline
// =========================================================================

#[test]
fn test_fixture_loads_both_surveys() {
    let surveys = fixture_surveys();
    assert_eq!(surveys.len(), 2);

    assert_eq!(surveys[0].company.name, "Atelier Martin");
    assert_eq!(surveys[0].company.sector, IndustrySector::Manufacturing);
    assert_eq!(
        surveys[0].emissions.real_estate.energy_efficiency_rating,
        Some(EnergyRating::E)
    );

    // Unknown labels fall back to defaults
    assert_eq!(surveys[1].company.sector, IndustrySector::Other);
    assert_eq!(surveys[1].company.size, CompanySize::Medium);
    assert_eq!(surveys[1].emissions.real_estate.energy_efficiency_rating, None);
}

#[test]
fn test_fully_filled_survey() {
    let surveys = fixture_surveys();
    let result = EmissionsCalculator::default().calculate_survey(&surveys[0]);
    let c = &result.emissions_by_category;

    assert_relative_eq!(c.energy, 21.074, epsilon = 1e-9);
    assert_relative_eq!(c.transport, 47.5716, epsilon = 1e-9);
    assert_relative_eq!(c.waste, 12.85, epsilon = 1e-9);
    assert_relative_eq!(c.purchases, 231.0, epsilon = 1e-9);
    assert_relative_eq!(c.it, 8.0, epsilon = 1e-9);
    assert_relative_eq!(c.real_estate, 45.0, epsilon = 1e-9);
    assert_relative_eq!(result.total_emissions, 365.4956, epsilon = 1e-9);

    let s = &result.emissions_by_scope;
    assert_relative_eq!(s.scope1, 15.83652, epsilon = 1e-9);
    assert_relative_eq!(s.scope2, 14.7518, epsilon = 1e-9);
    assert_relative_eq!(s.scope3, 334.90728, epsilon = 1e-9);

    // 365.4956 / 30 = 12.18 t per employee against 8.5 → ratio ≈ 1.43
    let b = &result.benchmark_comparison;
    assert_relative_eq!(b.industry, 8.5, epsilon = 1e-9);
    assert_relative_eq!(b.emissions_per_employee, 365.4956 / 30.0, epsilon = 1e-9);
    assert_eq!(b.percentile, 75);
    assert_eq!(b.performance(), PerformanceLabel::Average);
    assert_eq!(result.trend(), EmissionTrend::High);

    // Only purchases (63%) crosses its threshold
    let recs = result.recommendations();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].id, "local-suppliers");
    assert_relative_eq!(recs[0].potential_reduction, 57.75, epsilon = 1e-9);
}

#[test]
fn test_loosely_typed_survey() {
    let surveys = fixture_surveys();
    let result = EmissionsCalculator::default().calculate_survey(&surveys[1]);
    let c = &result.emissions_by_category;

    // Renewable share clamped to 100% wipes out electricity
    assert_eq!(c.energy, 0.0);
    // Negative commuting distance resolves to zero
    assert_eq!(c.transport, 0.0);
    // Empty recycling rate → everything landfilled
    assert_relative_eq!(c.waste, 2.8, epsilon = 1e-9);
    assert_relative_eq!(c.it, 0.96, epsilon = 1e-9);
    // Unknown rating "Z" uses class D
    assert_relative_eq!(c.real_estate, 5.0, epsilon = 1e-9);
    assert_relative_eq!(result.total_emissions, 8.76, epsilon = 1e-9);

    assert_eq!(result.employee_count, 10.0);
    assert_eq!(result.benchmark_comparison.percentile, 10);
    assert_eq!(result.trend(), EmissionTrend::Low);

    let recs = result.recommendations();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].id, "waste-reduction");
}

#[test]
fn test_batch_matches_single_calculation() {
    let surveys = fixture_surveys();
    let calculator = EmissionsCalculator::default();
    let batch = calculator.calculate_batch(&surveys);

    assert_eq!(batch.len(), surveys.len());
    for (survey, result) in surveys.iter().zip(&batch) {
        assert_eq!(*result, calculate_emissions(&survey.emissions, &survey.company));
    }
}

#[test]
fn test_reports_render() {
    let surveys = fixture_surveys();
    let calculator = EmissionsCalculator::default();

    for survey in &surveys {
        let result = calculator.calculate_survey(survey);
        let report = EmissionReport::build(&survey.company, &result);

        let md = MarkdownFormatter::format(&report);
        assert!(md.contains("## Emissions by Category"));
        assert!(md.contains("## Action Plan"));

        let json = JsonFormatter::format(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["results"]["totalEmissions"].is_number());
        assert!(value["actionPlan"]["recommendations"].is_array());
    }
}

#[test]
fn test_custom_factor_table() {
    let json = r#"{ "realEstate": { "office": 50.0 } }"#;
    let factors = EmissionFactors::from_json(json).unwrap();

    let surveys = fixture_surveys();
    let result = EmissionsCalculator::new(factors).calculate_survey(&surveys[1]);

    // 200 m² × 50 kg × 1.0 (class D); everything else unchanged
    assert_relative_eq!(result.emissions_by_category.real_estate, 10.0, epsilon = 1e-9);
    assert_relative_eq!(result.emissions_by_category.waste, 2.8, epsilon = 1e-9);
}

#[test]
fn test_overflowing_answers_stay_finite() {
    let json = r#"{
        "company": {"id": 42, "name": "Overflow SA"},
        "emissions": {
            "transport": {"commuting": {"averageDistance": 1e308}},
            "purchases": {"services": 20000}
        }
    }"#;
    let surveys = SurveyInput::from_json(json).unwrap().into_surveys();
    assert_eq!(surveys[0].company.id, "42");

    let result = EmissionsCalculator::default().calculate_survey(&surveys[0]);

    assert!(result.total_emissions.is_finite());
    assert_relative_eq!(result.total_emissions, 3.0, epsilon = 1e-9);
    assert_eq!(result.emissions_by_category.transport, 0.0);
    assert_relative_eq!(result.emissions_by_scope.total(), 3.0, epsilon = 1e-9);
    // No head count: 3 t against an absolute 1 t
    assert_eq!(result.trend(), EmissionTrend::High);

    let report = EmissionReport::build(&surveys[0].company, &result);
    assert!(!MarkdownFormatter::format(&report).contains("NaN"));
}

// =========================================================================
// Section 2: Randomized invariants
// =========================================================================

fn maybe(rng: &mut StdRng, max: f64) -> Option<f64> {
    match rng.gen_range(0..10) {
        0 => None,
        1 => Some(-rng.gen_range(0.0..max)),
        _ => Some(rng.gen_range(0.0..max)),
    }
}

fn random_survey(rng: &mut StdRng) -> (EmissionData, Company) {
    let data = EmissionData {
        energy: EnergyData {
            electricity: maybe(rng, 1_000_000.0),
            gas: maybe(rng, 50_000.0),
            fuel: maybe(rng, 20_000.0),
            renewable_percentage: maybe(rng, 150.0),
        },
        transport: TransportData {
            business_trips: BusinessTrips {
                car: maybe(rng, 200_000.0),
                train: maybe(rng, 100_000.0),
                plane: maybe(rng, 500_000.0),
            },
            commuting: Commuting {
                total_employees: maybe(rng, 500.0),
                average_distance: maybe(rng, 60.0),
                car_percentage: maybe(rng, 120.0),
                public_transport_percentage: maybe(rng, 120.0),
            },
            freight: Freight {
                road: maybe(rng, 1_000_000.0),
                rail: maybe(rng, 500_000.0),
                sea: maybe(rng, 5_000_000.0),
                air: maybe(rng, 50_000.0),
            },
        },
        waste: WasteData {
            total_waste: maybe(rng, 500.0),
            recycling_rate: maybe(rng, 120.0),
            organic_waste: maybe(rng, 100.0),
            hazardous_waste: maybe(rng, 20.0),
        },
        purchases: PurchaseData {
            raw_materials: maybe(rng, 5_000_000.0),
            equipment: maybe(rng, 1_000_000.0),
            services: maybe(rng, 1_000_000.0),
            digital_services: maybe(rng, 200_000.0),
        },
        it: ItData {
            servers: maybe(rng, 100.0),
            computers: maybe(rng, 1000.0),
            mobile_devices: maybe(rng, 1000.0),
            cloud_services: maybe(rng, 50_000.0),
            data_storage: maybe(rng, 500.0),
        },
        real_estate: RealEstateData {
            office_space: maybe(rng, 20_000.0),
            warehouse_space: maybe(rng, 50_000.0),
            building_age: maybe(rng, 100.0),
            energy_efficiency_rating: match rng.gen_range(0..8) {
                0 => None,
                n => EnergyRating::from_letter(&((b'A' + n as u8 - 1) as char).to_string()),
            },
        },
    };

    let sector = IndustrySector::ALL[rng.gen_range(0..IndustrySector::ALL.len())];
    let size = CompanySize::ALL[rng.gen_range(0..CompanySize::ALL.len())];
    (data, Company::new("random", sector, size))
}

#[test]
fn test_random_surveys_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    let calculator = EmissionsCalculator::default();

    for _ in 0..500 {
        let (data, company) = random_survey(&mut rng);
        let result = calculator.calculate(&data, &company);

        // Non-negative everywhere
        assert!(result.total_emissions >= 0.0);
        for (_, value) in result.emissions_by_category.iter() {
            assert!(value >= 0.0 && value.is_finite());
        }
        let scopes = &result.emissions_by_scope;
        assert!(scopes.scope1 >= 0.0 && scopes.scope2 >= 0.0 && scopes.scope3 >= 0.0);

        // Totals are consistent
        assert_relative_eq!(
            result.total_emissions,
            result.emissions_by_category.total(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            scopes.total(),
            result.total_emissions,
            epsilon = 1e-9,
            max_relative = 1e-9
        );

        // Percentile is always one of the six buckets
        assert!([10, 25, 40, 60, 75, 90].contains(&result.benchmark_comparison.percentile));

        // Deterministic
        assert_eq!(result, calculator.calculate(&data, &company));

        // Recommendations are sorted and never exceed their category
        let recs =
            RecommendationGenerator::generate(&result.emissions_by_category, result.total_emissions);
        for pair in recs.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
        for rec in &recs {
            assert!(rec.potential_reduction <= result.emissions_by_category.get(rec.category));
        }
    }
}

#[test]
fn test_survey_round_trips_through_json() {
    let mut rng = StdRng::seed_from_u64(7);
    let (data, company) = random_survey(&mut rng);
    let survey = Survey { company, emissions: data };

    let json = serde_json::to_string(&survey).unwrap();
    let parsed = SurveyInput::from_json(&json).unwrap().into_surveys();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].company.sector, survey.company.sector);
    assert_eq!(parsed[0].company.size, survey.company.size);

    let calculator = EmissionsCalculator::default();
    assert_relative_eq!(
        calculator.calculate_survey(&parsed[0]).total_emissions,
        calculator.calculate_survey(&survey).total_emissions,
        max_relative = 1e-12
    );
}
