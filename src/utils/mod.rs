//! Utility modules for emission calculation
//!
//! Contains shared functionality used across multiple calculators:
//! - Coercion: Default-to-zero resolution of questionnaire answers
//! - Format: Human-readable emissions, cost and payback strings

pub mod coercion;
pub mod format;

// Re-export commonly used helpers
pub use coercion::{
    fraction, lenient_label, lenient_number, lenient_record, lenient_text, percentage, quantity,
    safe_ratio,
};
pub use format::{format_cost, format_emissions, format_payback};
