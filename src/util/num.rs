/// Significant digits used by [`format_general`], as with C's `%g`.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Formats a number like C's `%g` with the default precision.
///
/// The value is rounded to [`SIGNIFICANT_DIGITS`] significant digits. It is
/// printed in scientific notation when its decimal exponent is below `-4` or
/// at least the precision, and in fixed notation otherwise. Trailing zeros
/// and a dangling decimal point are removed in both cases.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// Non-finite values are spelled `Inf`, `-Inf` and `NaN`, as Ruby's `%g`
/// prints them.
///
/// ## Returns
/// The formatted number.
///
/// ## Example
/// ```
/// use calc::util::num::format_general;
///
/// assert_eq!(format_general(14.0), "14");
/// assert_eq!(format_general(0.1 + 0.2), "0.3");
/// assert_eq!(format_general(1.0 / 3.0), "0.333333");
/// assert_eq!(format_general(1e6), "1e+06");
/// assert_eq!(format_general(0.00001234), "1.234e-05");
/// assert_eq!(format_general(f64::INFINITY), "Inf");
/// assert_eq!(format_general(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the precision first settles the exponent, e.g. 999999.5 -> 1e+06.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let precision = i32::try_from(SIGNIFICANT_DIGITS).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_trailing_zeros(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(precision - 1 - exponent).unwrap_or(0);
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point if bare.
///
/// ## Example
/// ```
/// use calc::util::num::strip_trailing_zeros;
///
/// assert_eq!(strip_trailing_zeros("2.500"), "2.5");
/// assert_eq!(strip_trailing_zeros("3.000"), "3");
/// assert_eq!(strip_trailing_zeros("100"), "100");
/// ```
#[must_use]
pub fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
