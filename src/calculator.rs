//! Emissions Calculator - Main coordinator for footprint estimation
//!
//! Runs the six category calculators, sums them, allocates scopes and
//! compares the total against the sector benchmark. Every call is a pure
//! function of its inputs and the factor table held by the calculator, so a
//! single calculator can be shared across threads. Batches of surveys are
//! evaluated in parallel with Rayon.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::benchmark::{compare_to_benchmark, emission_trend, BenchmarkComparison, EmissionTrend};
use crate::categories::{calculate_categories, CategoryBreakdown};
use crate::data::{Company, EmissionData, Survey};
use crate::factors::EmissionFactors;
use crate::recommendations::{Recommendation, RecommendationGenerator};
use crate::scope::{allocate_scopes, ScopeBreakdown};
use crate::utils::coercion::quantity;

/// Footprint estimate for one organization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResults {
    /// tCO2e, sum of all categories
    pub total_emissions: f64,
    pub emissions_by_category: CategoryBreakdown,
    pub emissions_by_scope: ScopeBreakdown,
    pub benchmark_comparison: BenchmarkComparison,
    /// Head count used for benchmarking (0 when unknown)
    pub employee_count: f64,
}

impl EmissionResults {
    /// Coarse level of the total against the company-wide benchmark
    /// (per-employee benchmark × head count, or 1 t when that product is 0)
    pub fn trend(&self) -> EmissionTrend {
        let company_benchmark = self.benchmark_comparison.industry * self.employee_count;
        let company_benchmark = if company_benchmark > 0.0 { company_benchmark } else { 1.0 };
        emission_trend(self.total_emissions, company_benchmark)
    }

    /// Prioritized reduction actions for this footprint
    pub fn recommendations(&self) -> Vec<Recommendation> {
        RecommendationGenerator::generate(&self.emissions_by_category, self.total_emissions)
    }
}

/// Emissions calculator bound to one factor table
#[derive(Debug, Clone, Default)]
pub struct EmissionsCalculator {
    factors: EmissionFactors,
}

impl EmissionsCalculator {
    pub fn new(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Calculate the footprint of one questionnaire
    pub fn calculate(&self, data: &EmissionData, company: &Company) -> EmissionResults {
        calculate_with_factors(data, company, &self.factors)
    }

    pub fn calculate_survey(&self, survey: &Survey) -> EmissionResults {
        self.calculate(&survey.emissions, &survey.company)
    }

    /// Calculate many surveys IN PARALLEL
    ///
    /// Output order matches input order.
    pub fn calculate_batch(&self, surveys: &[Survey]) -> Vec<EmissionResults> {
        let start = Instant::now();

        let results: Vec<EmissionResults> = surveys
            .par_iter()
            .map(|survey| self.calculate_survey(survey))
            .collect();

        tracing::info!(
            "Calculated {} surveys in {:.1} ms",
            results.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        results
    }
}

/// Calculate a footprint with the built-in factor table
pub fn calculate_emissions(data: &EmissionData, company: &Company) -> EmissionResults {
    calculate_with_factors(data, company, EmissionFactors::builtin())
}

fn calculate_with_factors(
    data: &EmissionData,
    company: &Company,
    factors: &EmissionFactors,
) -> EmissionResults {
    let emissions_by_category = calculate_categories(data, factors);
    let total_emissions = quantity(Some(emissions_by_category.total()));

    let emissions_by_scope = allocate_scopes(&emissions_by_category);

    let employee_count = data.employee_count();
    let benchmark_comparison =
        compare_to_benchmark(total_emissions, company, employee_count, factors);

    tracing::debug!(
        "Emissions for '{}': total={:.3} t (energy={:.3}, transport={:.3}, waste={:.3}, purchases={:.3}, it={:.3}, real_estate={:.3}), percentile={}",
        company.name,
        total_emissions,
        emissions_by_category.energy,
        emissions_by_category.transport,
        emissions_by_category.waste,
        emissions_by_category.purchases,
        emissions_by_category.it,
        emissions_by_category.real_estate,
        benchmark_comparison.percentile,
    );

    EmissionResults {
        total_emissions,
        emissions_by_category,
        emissions_by_scope,
        benchmark_comparison,
        employee_count: quantity(employee_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CompanySize, EnergyData, IndustrySector, WasteData};
    use approx::assert_relative_eq;

    fn small_office() -> (EmissionData, Company) {
        let mut data = EmissionData::default();
        data.energy = EnergyData {
            electricity: Some(100_000.0),
            gas: Some(2000.0),
            fuel: Some(1000.0),
            renewable_percentage: Some(50.0),
        };
        data.waste = WasteData {
            total_waste: Some(10.0),
            recycling_rate: Some(100.0),
            ..WasteData::default()
        };
        data.transport.commuting.total_employees = Some(4.0);

        let company = Company::new("Small Office", IndustrySector::Services, CompanySize::Small);
        (data, company)
    }

    #[test]
    fn test_calculate_sums_categories() {
        let (data, company) = small_office();
        let result = calculate_emissions(&data, &company);

        // energy 5.619 + waste 1.0
        assert_relative_eq!(result.total_emissions, 6.619, epsilon = 1e-9);
        assert_relative_eq!(result.emissions_by_category.energy, 5.619, epsilon = 1e-9);
        assert_relative_eq!(result.emissions_by_category.waste, 1.0, epsilon = 1e-9);
        assert_relative_eq!(result.emissions_by_scope.total(), result.total_emissions, epsilon = 1e-9);
        assert_eq!(result.employee_count, 4.0);
    }

    #[test]
    fn test_benchmark_uses_commuting_head_count() {
        let (data, company) = small_office();
        let result = calculate_emissions(&data, &company);

        // services × small = 3.84 t/employee; 6.619 / 4 = 1.65475 → ratio ≈ 0.43
        assert_relative_eq!(result.benchmark_comparison.industry, 3.84, epsilon = 1e-9);
        assert_relative_eq!(result.benchmark_comparison.emissions_per_employee, 1.65475, epsilon = 1e-9);
        assert_eq!(result.benchmark_comparison.percentile, 10);
    }

    #[test]
    fn test_empty_survey() {
        let result = calculate_emissions(&EmissionData::default(), &Company::default());

        assert_eq!(result.total_emissions, 0.0);
        assert_eq!(result.emissions_by_scope, ScopeBreakdown::default());
        assert_eq!(result.benchmark_comparison.percentile, 10);
        assert_eq!(result.benchmark_comparison.industry, 4.0);
        assert!(result.recommendations().is_empty());
        assert_eq!(result.trend(), EmissionTrend::Low);
    }

    #[test]
    fn test_trend_without_head_count_uses_one_tonne() {
        let mut data = EmissionData::default();
        data.purchases.services = Some(20_000.0); // 3 t

        let result = calculate_emissions(&data, &Company::default());
        assert_relative_eq!(result.total_emissions, 3.0, epsilon = 1e-9);
        assert_eq!(result.employee_count, 0.0);
        // 3 t against 1 t, not against the 4 t per-employee benchmark
        assert_eq!(result.trend(), EmissionTrend::High);

        data.purchases.services = Some(5_000.0); // 0.75 t
        let result = calculate_emissions(&data, &Company::default());
        assert_eq!(result.trend(), EmissionTrend::Medium);
    }

    #[test]
    fn test_huge_commuting_distance_keeps_results_finite() {
        let data: EmissionData =
            serde_json::from_str(r#"{"transport": {"commuting": {"averageDistance": 1e308}}}"#)
                .unwrap();
        let result = calculate_emissions(&data, &Company::default());

        assert_eq!(result.total_emissions, 0.0);
        assert_eq!(result.emissions_by_scope, ScopeBreakdown::default());
        assert_eq!(result.benchmark_comparison.percentile, 10);
        assert_eq!(crate::utils::format_emissions(result.total_emissions), "0 kg CO2e");
    }

    #[test]
    fn test_calculator_uses_its_own_factors() {
        let (data, company) = small_office();
        let mut factors = EmissionFactors::default();
        factors.waste.recycling = 0.0;

        let calculator = EmissionsCalculator::new(factors);
        let result = calculator.calculate(&data, &company);
        assert_eq!(result.emissions_by_category.waste, 0.0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let (data, company) = small_office();
        let surveys: Vec<Survey> = (0..20)
            .map(|i| {
                let mut emissions = data.clone();
                emissions.energy.fuel = Some(i as f64 * 100.0);
                Survey { company: company.clone(), emissions }
            })
            .collect();

        let calculator = EmissionsCalculator::default();
        let results = calculator.calculate_batch(&surveys);

        assert_eq!(results.len(), 20);
        for (survey, result) in surveys.iter().zip(&results) {
            assert_eq!(*result, calculator.calculate_survey(survey));
        }
    }

    #[test]
    fn test_trend_against_company_benchmark() {
        let (data, company) = small_office();
        let result = calculate_emissions(&data, &company);
        // 6.619 t against 3.84 × 4 = 15.36 t → ratio 0.43
        assert_eq!(result.trend(), EmissionTrend::Low);
    }
}
