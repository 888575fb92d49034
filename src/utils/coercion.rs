//! Input Coercion
//!
//! Questionnaire answers arrive partially filled and loosely typed. Every
//! numeric answer goes through the helpers in this module before it reaches
//! a calculator, so the calculators themselves never see `None`, `NaN`,
//! infinities or negative quantities.
//!
//! Two layers:
//! - Deserialization: `lenient_number` turns numbers and numeric strings into
//!   `Some(f64)` and anything else into `None`.
//! - Calculation: `quantity` and `percentage` resolve an `Option<f64>` to a
//!   usable, non-negative value.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Resolve an optional quantity to a finite, non-negative value.
///
/// Absent, non-finite and negative values all resolve to 0.
pub fn quantity(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Resolve an optional percentage to the range [0, 100].
pub fn percentage(value: Option<f64>) -> f64 {
    quantity(value).min(100.0)
}

/// Resolve an optional percentage to a fraction in [0, 1].
pub fn fraction(value: Option<f64>) -> f64 {
    percentage(value) / 100.0
}

/// Divide, returning 0 when the denominator is not strictly positive.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() {
        numerator / denominator
    } else {
        0.0
    }
}

/// Deserialize a loosely typed numeric answer.
///
/// Accepts JSON numbers and strings that parse as numbers. Booleans, objects,
/// arrays, `null` and unparsable strings become `None`.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| value_to_number(&v)))
}

/// Deserialize a nested answer record, falling back to its default when the
/// value is missing or is not a JSON object.
pub fn lenient_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).unwrap_or_default(),
        Some(other) => {
            tracing::debug!("Ignoring malformed answer record: {}", other);
            T::default()
        }
        None => T::default(),
    })
}

/// Deserialize a free-text label, returning `None` for anything but a string.
pub fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Deserialize an identity field as text.
///
/// Strings pass through, numbers keep their JSON form (`42` → `"42"`),
/// anything else becomes an empty string.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            tracing::debug!("Ignoring non-text identity field: {}", other);
            String::new()
        }
        None => String::new(),
    })
}

fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let parsed = s.trim().parse::<f64>().ok();
            if parsed.is_none() {
                tracing::debug!("Coercing non-numeric answer {:?} to zero", s);
            }
            parsed
        }
        Value::Null => None,
        other => {
            tracing::debug!("Coercing non-numeric answer {} to zero", other);
            None
        }
    }
}
