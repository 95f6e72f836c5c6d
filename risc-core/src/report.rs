//! Text report produced by the "Calculate" action.
//!
//! ```text
//! Selected Chemical: Benzene
//! Degradation Rate: 0.00096 per day
//!
//! Parameters:
//! Hydraulic Gradient (m/m): 0.1
//! ...
//! ```
//!
//! A `Contaminants:` block follows when the contaminant list is not empty.

use crate::{error::RiscError, form::FormState, registry::DegradationTable};
use risc_schemas::contaminant::ContaminantEntry;

/// Builds the report for `chemical` from the given forms, in the order given.
///
/// # Errors
///
/// Returns `RiscError::Lookup` if `chemical` is not in `table`.
pub fn generate_report(
    table: &DegradationTable,
    chemical: &str,
    forms: &[&FormState],
    contaminants: &[ContaminantEntry],
) -> Result<String, RiscError> {
    let rate = table
        .rate(chemical)
        .ok_or_else(|| RiscError::Lookup(chemical.to_string()))?;

    let mut report = String::new();
    report.push_str(&format!("Selected Chemical: {}\n", chemical));
    report.push_str(&format!("Degradation Rate: {} per day\n", format_value(rate)));
    report.push('\n');
    report.push_str("Parameters:\n");
    for form in forms {
        for (name, value) in form.iter() {
            report.push_str(&format!("{}: {}\n", name, format_value(value)));
        }
    }

    if !contaminants.is_empty() {
        report.push('\n');
        report.push_str("Contaminants:\n");
        for entry in contaminants {
            let value = format_value(entry.concentration);
            report.push_str(&format!("{}: {}\n", entry.chemical, value));
        }
    }
    Ok(report)
}

/// Integral values keep one decimal (`30.0`); others use the shortest form that
/// reads back to the same number (`0.00096`). A decimal exponent below -4 or from 16
/// up switches to exponent notation with a signed two-digit exponent (`5e-05`, `1e+16`).
pub fn format_value(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return fixed(value);
    }
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) if !(-4..16).contains(&exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            _ => fixed(value),
        },
        None => fixed(value),
    }
}

fn fixed(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
