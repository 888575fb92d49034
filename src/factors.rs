//! Emission Factor Table
//!
//! Per-unit CO2e factors for every questionnaire category, plus the
//! per-employee industry benchmarks and company-size adjustment factors.
//!
//! Units (kgCO2e per unit unless noted):
//! - Energy: per kWh electricity, per m³ gas, per litre fuel (France 2023 grid mix)
//! - Transport: per km (passenger), per tonne-km (freight)
//! - Waste: per kg
//! - Purchases: per currency unit spent
//! - IT: per device per year, per currency unit of monthly cloud spend, per TB stored
//! - Real estate: per m² per year, scaled by the building's energy rating
//! - Industry benchmarks: tCO2e per employee per year
//!
//! The built-in table is a `static`. A replacement table can be loaded once at
//! startup from JSON; any section or field left out falls back to the
//! built-in value.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{CompanySize, EnergyRating, IndustrySector};
use crate::error::FactorError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyFactors {
    pub electricity: f64,
    pub gas: f64,
    pub fuel: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneFactors {
    pub domestic: f64,
    pub international: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreightFactors {
    pub road: f64,
    pub rail: f64,
    pub sea: f64,
    pub air: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportFactors {
    pub car: f64,
    pub train: f64,
    pub plane: PlaneFactors,
    pub public_transport: f64,
    pub freight: FreightFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteFactors {
    pub landfill: f64,
    pub recycling: f64,
    pub organic: f64,
    pub hazardous: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseFactors {
    pub raw_materials: f64,
    pub equipment: f64,
    pub services: f64,
    pub digital_services: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItFactors {
    pub server: f64,
    pub computer: f64,
    pub mobile_device: f64,
    pub cloud_services: f64,
    pub data_storage: f64,
}

/// Multiplier applied to building emissions per energy rating class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingMultipliers {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "B")]
    pub b: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "F")]
    pub f: f64,
    #[serde(rename = "G")]
    pub g: f64,
}

impl RatingMultipliers {
    pub fn get(&self, rating: EnergyRating) -> f64 {
        match rating {
            EnergyRating::A => self.a,
            EnergyRating::B => self.b,
            EnergyRating::C => self.c,
            EnergyRating::D => self.d,
            EnergyRating::E => self.e,
            EnergyRating::F => self.f,
            EnergyRating::G => self.g,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RealEstateFactors {
    pub office: f64,
    pub warehouse: f64,
    pub energy_rating_multiplier: RatingMultipliers,
}

/// Per-employee emissions benchmark (tCO2e/employee/year) by sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryBenchmarks {
    pub manufacturing: f64,
    pub services: f64,
    pub retail: f64,
    pub construction: f64,
    pub technology: f64,
    pub healthcare: f64,
    pub education: f64,
    pub finance: f64,
    pub agriculture: f64,
    pub transport: f64,
    pub energy: f64,
    pub other: f64,
}

impl IndustryBenchmarks {
    pub fn get(&self, sector: IndustrySector) -> f64 {
        match sector {
            IndustrySector::Manufacturing => self.manufacturing,
            IndustrySector::Services => self.services,
            IndustrySector::Retail => self.retail,
            IndustrySector::Construction => self.construction,
            IndustrySector::Technology => self.technology,
            IndustrySector::Healthcare => self.healthcare,
            IndustrySector::Education => self.education,
            IndustrySector::Finance => self.finance,
            IndustrySector::Agriculture => self.agriculture,
            IndustrySector::Transport => self.transport,
            IndustrySector::Energy => self.energy,
            IndustrySector::Other => self.other,
        }
    }
}

/// Benchmark adjustment per company size class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBenchmarks {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
    pub enterprise: f64,
}

impl SizeBenchmarks {
    pub fn get(&self, size: CompanySize) -> f64 {
        match size {
            CompanySize::Small => self.small,
            CompanySize::Medium => self.medium,
            CompanySize::Large => self.large,
            CompanySize::Enterprise => self.enterprise,
        }
    }
}

/// Complete factor table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmissionFactors {
    pub energy: EnergyFactors,
    pub transport: TransportFactors,
    pub waste: WasteFactors,
    pub purchases: PurchaseFactors,
    pub it: ItFactors,
    pub real_estate: RealEstateFactors,
    pub industry_benchmarks: IndustryBenchmarks,
    pub size_benchmarks: SizeBenchmarks,
}

// ============================================================================
// BUILT-IN TABLE
// ============================================================================

pub static BUILTIN_FACTORS: EmissionFactors = EmissionFactors {
    energy: EnergyFactors {
        electricity: 0.0571,
        gas: 0.227,
        fuel: 2.31,
    },
    transport: TransportFactors {
        car: 0.193,
        train: 0.037,
        plane: PlaneFactors {
            domestic: 0.230,
            international: 0.195,
        },
        public_transport: 0.103,
        freight: FreightFactors {
            road: 0.106,
            rail: 0.028,
            sea: 0.015,
            air: 1.540,
        },
    },
    waste: WasteFactors {
        landfill: 0.7,
        recycling: 0.1,
        organic: 0.2,
        hazardous: 1.5,
    },
    purchases: PurchaseFactors {
        raw_materials: 0.5,
        equipment: 0.3,
        services: 0.15,
        digital_services: 0.1,
    },
    it: ItFactors {
        server: 300.0,
        computer: 80.0,
        mobile_device: 25.0,
        cloud_services: 0.5,
        data_storage: 50.0,
    },
    real_estate: RealEstateFactors {
        office: 25.0,
        warehouse: 15.0,
        energy_rating_multiplier: RatingMultipliers {
            a: 0.5,
            b: 0.7,
            c: 0.9,
            d: 1.0,
            e: 1.2,
            f: 1.5,
            g: 2.0,
        },
    },
    industry_benchmarks: IndustryBenchmarks {
        manufacturing: 8.5,
        services: 3.2,
        retail: 4.1,
        construction: 6.8,
        technology: 2.9,
        healthcare: 5.3,
        education: 2.1,
        finance: 3.5,
        agriculture: 12.3,
        transport: 15.7,
        energy: 45.2,
        other: 4.0,
    },
    // Smaller companies tend to have higher per-employee emissions
    size_benchmarks: SizeBenchmarks {
        small: 1.2,
        medium: 1.0,
        large: 0.8,
        enterprise: 0.7,
    },
};

macro_rules! builtin_default {
    ($($ty:ty => $($field:ident).+;)*) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    BUILTIN_FACTORS.$($field).+
                }
            }
        )*
    };
}

builtin_default! {
    EnergyFactors => energy;
    PlaneFactors => transport.plane;
    FreightFactors => transport.freight;
    TransportFactors => transport;
    WasteFactors => waste;
    PurchaseFactors => purchases;
    ItFactors => it;
    RatingMultipliers => real_estate.energy_rating_multiplier;
    RealEstateFactors => real_estate;
    IndustryBenchmarks => industry_benchmarks;
    SizeBenchmarks => size_benchmarks;
}

impl Default for EmissionFactors {
    fn default() -> Self {
        BUILTIN_FACTORS
    }
}

impl EmissionFactors {
    /// The built-in table
    pub fn builtin() -> &'static EmissionFactors {
        &BUILTIN_FACTORS
    }

    /// Load a factor table from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read emission factor file: {:?}", path))?;

        let factors = Self::from_json(&contents)
            .with_context(|| format!("Invalid emission factor file: {:?}", path))?;

        tracing::info!("Loaded emission factor table from {:?}", path);
        Ok(factors)
    }

    /// Parse and validate a factor table from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let factors: EmissionFactors =
            serde_json::from_str(json).context("Failed to parse emission factor JSON")?;
        factors.validate()?;
        Ok(factors)
    }

    /// Every factor must be finite and non-negative for category totals to
    /// stay non-negative.
    pub fn validate(&self) -> std::result::Result<(), FactorError> {
        for (name, value) in self.entries() {
            if !value.is_finite() {
                return Err(FactorError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(FactorError::Negative { name, value });
            }
        }
        Ok(())
    }

    /// All factors with their dotted path names
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        let rating = &self.real_estate.energy_rating_multiplier;
        let bench = &self.industry_benchmarks;
        let size = &self.size_benchmarks;
        vec![
            ("energy.electricity", self.energy.electricity),
            ("energy.gas", self.energy.gas),
            ("energy.fuel", self.energy.fuel),
            ("transport.car", self.transport.car),
            ("transport.train", self.transport.train),
            ("transport.plane.domestic", self.transport.plane.domestic),
            ("transport.plane.international", self.transport.plane.international),
            ("transport.publicTransport", self.transport.public_transport),
            ("transport.freight.road", self.transport.freight.road),
            ("transport.freight.rail", self.transport.freight.rail),
            ("transport.freight.sea", self.transport.freight.sea),
            ("transport.freight.air", self.transport.freight.air),
            ("waste.landfill", self.waste.landfill),
            ("waste.recycling", self.waste.recycling),
            ("waste.organic", self.waste.organic),
            ("waste.hazardous", self.waste.hazardous),
            ("purchases.rawMaterials", self.purchases.raw_materials),
            ("purchases.equipment", self.purchases.equipment),
            ("purchases.services", self.purchases.services),
            ("purchases.digitalServices", self.purchases.digital_services),
            ("it.server", self.it.server),
            ("it.computer", self.it.computer),
            ("it.mobileDevice", self.it.mobile_device),
            ("it.cloudServices", self.it.cloud_services),
            ("it.dataStorage", self.it.data_storage),
            ("realEstate.office", self.real_estate.office),
            ("realEstate.warehouse", self.real_estate.warehouse),
            ("realEstate.energyRatingMultiplier.A", rating.a),
            ("realEstate.energyRatingMultiplier.B", rating.b),
            ("realEstate.energyRatingMultiplier.C", rating.c),
            ("realEstate.energyRatingMultiplier.D", rating.d),
            ("realEstate.energyRatingMultiplier.E", rating.e),
            ("realEstate.energyRatingMultiplier.F", rating.f),
            ("realEstate.energyRatingMultiplier.G", rating.g),
            ("industryBenchmarks.manufacturing", bench.manufacturing),
            ("industryBenchmarks.services", bench.services),
            ("industryBenchmarks.retail", bench.retail),
            ("industryBenchmarks.construction", bench.construction),
            ("industryBenchmarks.technology", bench.technology),
            ("industryBenchmarks.healthcare", bench.healthcare),
            ("industryBenchmarks.education", bench.education),
            ("industryBenchmarks.finance", bench.finance),
            ("industryBenchmarks.agriculture", bench.agriculture),
            ("industryBenchmarks.transport", bench.transport),
            ("industryBenchmarks.energy", bench.energy),
            ("industryBenchmarks.other", bench.other),
            ("sizeBenchmarks.small", size.small),
            ("sizeBenchmarks.medium", size.medium),
            ("sizeBenchmarks.large", size.large),
            ("sizeBenchmarks.enterprise", size.enterprise),
        ]
    }
}
