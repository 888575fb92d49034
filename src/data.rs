//! Questionnaire Data Model
//!
//! Company identity and the six category answer records collected by the
//! data-entry flow. Every numeric answer is an `Option<f64>` deserialized
//! leniently (see `utils::coercion`), so a partially filled or loosely typed
//! questionnaire always loads. Wire names are camelCase to match the
//! questionnaire producer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::coercion::{lenient_label, lenient_number, lenient_record, lenient_text};

// ============================================================================
// Company
// ============================================================================

/// Industry sector used to select the per-employee benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustrySector {
    Manufacturing,
    Services,
    Retail,
    Construction,
    Technology,
    Healthcare,
    Education,
    Finance,
    Agriculture,
    Transport,
    Energy,
    #[default]
    Other,
}

impl IndustrySector {
    pub const ALL: [IndustrySector; 12] = [
        IndustrySector::Manufacturing,
        IndustrySector::Services,
        IndustrySector::Retail,
        IndustrySector::Construction,
        IndustrySector::Technology,
        IndustrySector::Healthcare,
        IndustrySector::Education,
        IndustrySector::Finance,
        IndustrySector::Agriculture,
        IndustrySector::Transport,
        IndustrySector::Energy,
        IndustrySector::Other,
    ];

    /// Parse a sector name, falling back to `Other` when unrecognized
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "manufacturing" => IndustrySector::Manufacturing,
            "services" => IndustrySector::Services,
            "retail" => IndustrySector::Retail,
            "construction" => IndustrySector::Construction,
            "technology" => IndustrySector::Technology,
            "healthcare" => IndustrySector::Healthcare,
            "education" => IndustrySector::Education,
            "finance" => IndustrySector::Finance,
            "agriculture" => IndustrySector::Agriculture,
            "transport" => IndustrySector::Transport,
            "energy" => IndustrySector::Energy,
            "other" => IndustrySector::Other,
            unknown => {
                tracing::debug!("Unknown sector '{}', using 'other'", unknown);
                IndustrySector::Other
            }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IndustrySector::Manufacturing => "Manufacturing",
            IndustrySector::Services => "Services",
            IndustrySector::Retail => "Retail",
            IndustrySector::Construction => "Construction",
            IndustrySector::Technology => "Technology",
            IndustrySector::Healthcare => "Healthcare",
            IndustrySector::Education => "Education",
            IndustrySector::Finance => "Finance",
            IndustrySector::Agriculture => "Agriculture",
            IndustrySector::Transport => "Transport & logistics",
            IndustrySector::Energy => "Energy",
            IndustrySector::Other => "Other",
        }
    }
}

impl<'de> Deserialize<'de> for IndustrySector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => IndustrySector::from_name(&s),
            _ => IndustrySector::Other,
        })
    }
}

/// Company size class used to adjust the sector benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Small,
    #[default]
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Enterprise,
    ];

    /// Parse a size name, falling back to `Medium` when unrecognized
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => CompanySize::Small,
            "medium" => CompanySize::Medium,
            "large" => CompanySize::Large,
            "enterprise" => CompanySize::Enterprise,
            unknown => {
                tracing::debug!("Unknown company size '{}', using 'medium'", unknown);
                CompanySize::Medium
            }
        }
    }
}

impl<'de> Deserialize<'de> for CompanySize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => CompanySize::from_name(&s),
            _ => CompanySize::Medium,
        })
    }
}

/// Identity and benchmarking context for one organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde(deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    pub sector: IndustrySector,
    pub size: CompanySize,
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
}

impl Company {
    pub fn new(name: &str, sector: IndustrySector, size: CompanySize) -> Self {
        Self {
            name: name.to_string(),
            sector,
            size,
            ..Self::default()
        }
    }
}

// ============================================================================
// Category answer records
// ============================================================================

/// Energy consumption answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyData {
    /// kWh per year
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub electricity: Option<f64>,
    /// m³ per year
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub gas: Option<f64>,
    /// litres per year
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub fuel: Option<f64>,
    /// Share of electricity from renewable sources (0-100)
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub renewable_percentage: Option<f64>,
}

/// Business travel distances (km per year)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessTrips {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub car: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub train: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub plane: Option<f64>,
}

/// Employee commuting profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commuting {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_employees: Option<f64>,
    /// One-way distance in km
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub average_distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub car_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub public_transport_percentage: Option<f64>,
}

/// Freight volumes (tonne-km per year)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Freight {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub road: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub rail: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub sea: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub air: Option<f64>,
}

/// Transport answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportData {
    #[serde(default, deserialize_with = "lenient_record")]
    pub business_trips: BusinessTrips,
    #[serde(default, deserialize_with = "lenient_record")]
    pub commuting: Commuting,
    #[serde(default, deserialize_with = "lenient_record")]
    pub freight: Freight,
}

/// Waste answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteData {
    /// tonnes per year
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub total_waste: Option<f64>,
    /// Share of total waste recycled (0-100)
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub recycling_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub organic_waste: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub hazardous_waste: Option<f64>,
}

/// Annual purchasing spend (currency units)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseData {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub raw_materials: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub equipment: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub services: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub digital_services: Option<f64>,
}

/// IT equipment and services answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItData {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub servers: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub computers: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub mobile_devices: Option<f64>,
    /// Monthly cloud spend
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cloud_services: Option<f64>,
    /// TB stored
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub data_storage: Option<f64>,
}

/// Building energy performance class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnergyRating {
    A,
    B,
    C,
    #[default]
    D,
    E,
    F,
    G,
}

impl EnergyRating {
    /// Parse a rating letter (case-insensitive)
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "A" => Some(EnergyRating::A),
            "B" => Some(EnergyRating::B),
            "C" => Some(EnergyRating::C),
            "D" => Some(EnergyRating::D),
            "E" => Some(EnergyRating::E),
            "F" => Some(EnergyRating::F),
            "G" => Some(EnergyRating::G),
            _ => None,
        }
    }
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<EnergyRating>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = lenient_label(deserializer)?;
    Ok(label.and_then(|l| {
        let rating = EnergyRating::from_letter(&l);
        if rating.is_none() {
            tracing::warn!("Unrecognized energy efficiency rating '{}', using class D", l);
        }
        rating
    }))
}

/// Real estate answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateData {
    /// m²
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub office_space: Option<f64>,
    /// m²
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub warehouse_space: Option<f64>,
    /// Years. Collected but not used by the calculation.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub building_age: Option<f64>,
    #[serde(default, deserialize_with = "lenient_rating", skip_serializing_if = "Option::is_none")]
    pub energy_efficiency_rating: Option<EnergyRating>,
}

/// Complete questionnaire answer set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionData {
    #[serde(default, deserialize_with = "lenient_record")]
    pub energy: EnergyData,
    #[serde(default, deserialize_with = "lenient_record")]
    pub transport: TransportData,
    #[serde(default, deserialize_with = "lenient_record")]
    pub waste: WasteData,
    #[serde(default, deserialize_with = "lenient_record")]
    pub purchases: PurchaseData,
    #[serde(default, deserialize_with = "lenient_record")]
    pub it: ItData,
    #[serde(default, deserialize_with = "lenient_record")]
    pub real_estate: RealEstateData,
}

impl EmissionData {
    /// Head count used for per-employee benchmarking (commuting answer)
    pub fn employee_count(&self) -> Option<f64> {
        self.transport.commuting.total_employees
    }
}

// ============================================================================
// Survey input
// ============================================================================

/// One organization's completed questionnaire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default, deserialize_with = "lenient_record")]
    pub company: Company,
    #[serde(default, deserialize_with = "lenient_record")]
    pub emissions: EmissionData,
}

/// Survey file contents: a single survey or a list of them
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SurveyInput {
    Batch(Vec<Survey>),
    Single(Survey),
}

impl SurveyInput {
    /// Load surveys from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read survey file: {:?}", path))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse survey file: {:?}", path))
    }

    /// Parse surveys from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Survey JSON is neither an object nor an array of objects")
    }

    pub fn into_surveys(self) -> Vec<Survey> {
        match self {
            SurveyInput::Batch(surveys) => surveys,
            SurveyInput::Single(survey) => vec![survey],
        }
    }
}
