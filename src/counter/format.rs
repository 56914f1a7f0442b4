//! Number formatting for count-up output.
//!
//! Values are rounded to a fixed number of decimal places, optionally grouped
//! by thousands, and wrapped with a prefix and suffix:
//!
//! ```text
//! 1234.5   -> ₹1234.50     (prefix "₹", 2 decimals)
//! 1234567  -> 1,234,567    (separator ",")
//! -0.001   -> ₹0.00        (no sign once the rounded value is zero)
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// FormatOptions
// ============================================================================

/// Above this magnitude every `f64` is an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// How a numeric value is turned into display text.
///
/// The default is plain output: no decimals, `.` as the decimal mark, no
/// grouping, no prefix or suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Number of digits after the decimal mark.
    pub decimals: u8,
    /// Decimal mark placed between integer and fraction.
    pub decimal: String,
    /// Thousands separator. Empty disables grouping.
    pub separator: String,
    /// Text placed before the number (after the sign).
    pub prefix: String,
    /// Text placed after the number.
    pub suffix: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 0,
            decimal: ".".to_string(),
            separator: String::new(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl FormatOptions {
    /// Set the number of decimal places.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the decimal mark.
    #[must_use]
    pub fn with_decimal(mut self, decimal: impl Into<String>) -> Self {
        self.decimal = decimal.into();
        self
    }

    /// Set the thousands separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Round `value` half away from zero to the configured decimal places.
    ///
    /// Values too large to carry a fraction at that precision are returned
    /// unchanged.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(i32::from(self.decimals));
        let scaled = value * factor;
        if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
            return value;
        }
        scaled.round() / factor
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Format `value` according to `options`.
///
/// The value is rounded with [`FormatOptions::round`] first, so ties go away
/// from zero exactly like animated frames do.
///
/// Non-finite values are rendered as `NaN` / `inf` behind the prefix; the
/// animation primitive rejects them before they get here.
#[must_use]
pub fn format_number(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        let text = if value.is_nan() {
            "NaN"
        } else if value > 0.0 {
            "inf"
        } else {
            "-inf"
        };
        return format!("{}{text}", options.prefix);
    }

    let value = options.round(value);
    let fixed = format!("{:.*}", usize::from(options.decimals), value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(
        fixed.len() + options.prefix.len() + options.suffix.len() + options.decimal.len() + 1,
    );
    if negative {
        out.push('-');
    }
    out.push_str(&options.prefix);
    out.push_str(&group_thousands(integer, &options.separator));
    if let Some(fraction) = fraction {
        out.push_str(&options.decimal);
        out.push_str(fraction);
    }
    out.push_str(&options.suffix);
    out
}

/// Insert `separator` between every group of three integer digits.
fn group_thousands(integer: &str, separator: &str) -> String {
    if separator.is_empty() || integer.len() <= 3 {
        return integer.to_string();
    }

    let lead = integer.len() % 3;
    let mut out = String::with_capacity(integer.len() + separator.len() * (integer.len() / 3));
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::*;

    fn rupees() -> FormatOptions {
        FormatOptions::default().with_decimals(2).with_prefix("₹")
    }

    #[rstest]
    #[case::fractional(1234.5, "₹1234.50")]
    #[case::zero(0.0, "₹0.00")]
    #[case::rounds_up(0.005_1, "₹0.01")]
    #[case::large(9_876_543.219, "₹9876543.22")]
    #[case::negative(-42.0, "-₹42.00")]
    #[case::negative_rounds_to_zero(-0.001, "₹0.00")]
    fn test_format_rupees(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value, &rupees()), expected);
    }

    #[rstest]
    #[case::short("123", "123")]
    #[case::four("1234", "1,234")]
    #[case::six("123456", "123,456")]
    #[case::seven("1234567", "1,234,567")]
    fn test_group_thousands(#[case] integer: &str, #[case] expected: &str) {
        assert_eq!(group_thousands(integer, ","), expected);
    }

    #[test]
    fn test_format_with_all_options() {
        let options = FormatOptions::default()
            .with_decimals(3)
            .with_decimal(",")
            .with_separator(".")
            .with_prefix("€ ")
            .with_suffix(" EUR");
        assert_snapshot!(format_number(1_234_567.891_2, &options), @"€ 1.234.567,891 EUR");
    }

    #[test]
    fn test_format_without_decimals_omits_decimal_mark() {
        let options = FormatOptions::default().with_decimal(",");
        assert_eq!(format_number(99.4, &options), "99");
    }

    #[test]
    fn test_format_non_finite_does_not_panic() {
        assert_eq!(format_number(f64::NAN, &rupees()), "₹NaN");
        assert_eq!(format_number(f64::INFINITY, &rupees()), "₹inf");
        assert_eq!(format_number(f64::NEG_INFINITY, &rupees()), "₹-inf");
    }

    #[rstest]
    #[case::two_decimals(0.125, 2, "0.13")]
    #[case::no_decimals(2.5, 0, "3")]
    #[case::negative_tie(-0.5, 0, "-1")]
    fn test_ties_round_away_from_zero(
        #[case] value: f64,
        #[case] decimals: u8,
        #[case] expected: &str,
    ) {
        let options = FormatOptions::default().with_decimals(decimals);
        assert_eq!(format_number(value, &options), expected);
    }

    #[test]
    fn test_round_leaves_huge_values_finite() {
        let options = rupees();
        assert_eq!(options.round(1e307), 1e307);
        assert_eq!(FormatOptions::default().with_decimals(255).round(1e60), 1e60);

        let text = format_number(1e307, &options);
        assert!(text.starts_with("₹1") && text.ends_with(".00"), "{text}");
    }

    #[test]
    fn test_round() {
        let options = rupees();
        assert_eq!(options.round(1.234), 1.23);
        assert_eq!(options.round(1.235_1), 1.24);
        assert_eq!(FormatOptions::default().round(2.6), 3.0);
    }
}
