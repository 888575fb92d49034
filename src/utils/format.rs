//! Display formatting for emission quantities and action-plan figures.

/// Format an emissions value given in tCO2e.
///
/// - Below 1 t: whole kilograms ("500 kg CO2e")
/// - Otherwise: tonnes rounded to one decimal ("12.3 t CO2e", "12 t CO2e")
pub fn format_emissions(tonnes: f64) -> String {
    if tonnes < 1.0 {
        format!("{} kg CO2e", (tonnes * 1000.0).round() as i64)
    } else {
        format!("{} t CO2e", round_to(tonnes, 1))
    }
}

/// Round to a fixed number of decimals, rendering the shortest form.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Format a currency amount: "Free" for zero, grouped thousands otherwise.
pub fn format_cost(amount: f64) -> String {
    if amount <= 0.0 {
        return "Free".to_string();
    }
    format!("{} €", group_thousands(amount.round() as u64))
}

/// Format a payback period: "Immediate" for zero months.
pub fn format_payback(months: u32) -> String {
    match months {
        0 => "Immediate".to_string(),
        1 => "1 month".to_string(),
        m => format!("{} months", m),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
