//! Numeric helpers: significant-digit formatting and safe casts.

use num_traits::cast::cast;

/// Convert usize to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Format `value` with the given number of significant digits.
///
/// Probabilities are reported with significant digits rather than decimal
/// places, so `0.46` and `0.0041` both carry two digits of information.
/// Values outside `[1e-5, 10^digits)` fall back to scientific notation;
/// zero renders as `0.0`.
#[must_use]
pub fn format_sig(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }
    let digits = digits.max(1);
    let exponent = value.abs().log10().floor();
    if !(-5.0..f64::from(digits)).contains(&exponent) {
        let precision = (digits - 1) as usize;
        return format!("{value:.precision$e}");
    }
    let decimals = (f64::from(digits) - 1.0 - exponent).max(0.0);
    let decimals = cast::<f64, usize>(decimals).unwrap_or(0);
    strip_trailing_zeros(format!("{value:.decimals$}"))
}

/// Drop trailing zeros after the decimal point, keeping at least one digit
/// there, so `0.30` renders as `0.3` but `1.0` stays `1.0`.
fn strip_trailing_zeros(mut formatted: String) -> String {
    if let Some(dot) = formatted.find('.') {
        let keep = formatted
            .trim_end_matches('0')
            .len()
            .max(dot + 2)
            .min(formatted.len());
        formatted.truncate(keep);
    }
    formatted
}
