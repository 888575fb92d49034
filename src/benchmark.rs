//! Benchmark Comparison
//!
//! Places a company's per-employee emissions against its sector benchmark,
//! adjusted for company size.
//!
//! Algorithm:
//! 1. per_employee = total / employees (0 when employees is 0 or absent)
//! 2. adjusted = industry_benchmark[sector] × size_factor[size]
//! 3. ratio = per_employee / adjusted (0 when adjusted is 0)
//! 4. ratio → percentile bucket (10/25/40/60/75/90)
//!
//! The 3-level trend classification (`emission_trend`) is a separate, coarser
//! reading of a ratio against a benchmark and uses its own thresholds.

use serde::{Deserialize, Serialize};

use crate::data::Company;
use crate::factors::EmissionFactors;
use crate::utils::coercion::{quantity, safe_ratio};

/// Benchmark outcome for one company
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    /// Industry benchmark adjusted for company size (tCO2e/employee/year)
    pub industry: f64,
    /// Size adjustment factor applied to the industry benchmark
    pub size: f64,
    /// Percentile bucket (10, 25, 40, 60, 75 or 90)
    pub percentile: u8,
    pub emissions_per_employee: f64,
    pub ratio: f64,
}

impl BenchmarkComparison {
    pub fn performance(&self) -> PerformanceLabel {
        PerformanceLabel::from_percentile(self.percentile)
    }
}

/// Compare total emissions against the size-adjusted sector benchmark
pub fn compare_to_benchmark(
    total_emissions: f64,
    company: &Company,
    employee_count: Option<f64>,
    factors: &EmissionFactors,
) -> BenchmarkComparison {
    let employees = quantity(employee_count);
    let emissions_per_employee = safe_ratio(total_emissions, employees);

    let industry_benchmark = factors.industry_benchmarks.get(company.sector);
    let size_factor = factors.size_benchmarks.get(company.size);
    let adjusted_benchmark = industry_benchmark * size_factor;

    let ratio = safe_ratio(emissions_per_employee, adjusted_benchmark);

    BenchmarkComparison {
        industry: adjusted_benchmark,
        size: size_factor,
        percentile: percentile_bucket(ratio),
        emissions_per_employee,
        ratio,
    }
}

/// Map a benchmark ratio to its percentile bucket
///
/// | ratio        | percentile |
/// |--------------|------------|
/// | < 0.5        | 10         |
/// | [0.5, 0.75)  | 25         |
/// | [0.75, 1.0)  | 40         |
/// | [1.0, 1.25)  | 60         |
/// | [1.25, 1.5)  | 75         |
/// | >= 1.5       | 90         |
pub fn percentile_bucket(ratio: f64) -> u8 {
    match ratio {
        r if r < 0.5 => 10,
        r if r < 0.75 => 25,
        r if r < 1.0 => 40,
        r if r < 1.25 => 60,
        r if r < 1.5 => 75,
        _ => 90,
    }
}

/// Coarse emission level relative to a benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionTrend {
    Low,
    Medium,
    High,
}

impl EmissionTrend {
    pub fn display_name(&self) -> &'static str {
        match self {
            EmissionTrend::Low => "Below benchmark",
            EmissionTrend::Medium => "Around benchmark",
            EmissionTrend::High => "Above benchmark",
        }
    }
}

/// Classify `current` against `benchmark`: < 0.75 low, < 1.25 medium, else high
///
/// A zero benchmark yields a ratio of 0 (low).
pub fn emission_trend(current: f64, benchmark: f64) -> EmissionTrend {
    let ratio = safe_ratio(current, benchmark);
    if ratio < 0.75 {
        EmissionTrend::Low
    } else if ratio < 1.25 {
        EmissionTrend::Medium
    } else {
        EmissionTrend::High
    }
}

/// Qualitative reading of a percentile bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLabel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceLabel {
    pub fn from_percentile(percentile: u8) -> Self {
        match percentile {
            p if p <= 25 => PerformanceLabel::Excellent,
            p if p <= 50 => PerformanceLabel::Good,
            p if p <= 75 => PerformanceLabel::Average,
            _ => PerformanceLabel::NeedsImprovement,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PerformanceLabel::Excellent => "Excellent performance",
            PerformanceLabel::Good => "Good performance",
            PerformanceLabel::Average => "Average performance",
            PerformanceLabel::NeedsImprovement => "Room for improvement",
        }
    }
}
