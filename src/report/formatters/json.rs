//! Footprint reports as JSON, using the same camelCase field names as the
//! questionnaire input (`totalEmissions`, `emissionsByCategory`, `actionPlan`).

use crate::report::EmissionReport;

pub struct JsonFormatter;

impl JsonFormatter {
    /// Indented report, one field per line
    pub fn format(report: &EmissionReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Single-line report, for log lines and line-delimited output
    pub fn format_compact(report: &EmissionReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }

    /// A survey file's reports: one object for a single survey, otherwise
    /// an array in survey order
    pub fn format_all(reports: &[EmissionReport]) -> Result<String, serde_json::Error> {
        match reports {
            [single] => Self::format(single),
            many => serde_json::to_string_pretty(many),
        }
    }
}
