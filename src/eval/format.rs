//! Display formatting for numeric results.

/// Format a result for the display.
///
/// Uses the plain decimal representation unless it exceeds `max_digits`
/// characters, in which case the value is rendered in exponential notation
/// with `exponent_digits` fractional mantissa digits (e.g. `1.234568e+12`).
pub fn format_result(value: f64, max_digits: usize, exponent_digits: usize) -> String {
    let plain = value.to_string();
    if plain.len() > max_digits {
        exponential(value, exponent_digits)
    } else {
        plain
    }
}

/// Exponential notation with an always-signed exponent.
fn exponential(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    // Rust renders "1.234568e12"; positive exponents need the explicit sign.
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}
