// Display formatters shared by the pricing engine and the calculator UI.
// All functions are pure; NaN and infinities render as NON_FINITE_PLACEHOLDER.

use std::fmt;

/// Digit group separator used by the `ru-RU` locale (NO-BREAK SPACE).
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Rendered in place of a number that is NaN or infinite.
pub const NON_FINITE_PLACEHOLDER: &str = "-";

/// Formats a price as a whole number with Russian digit grouping.
///
/// Rounds to the nearest integer with ties toward positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`), then inserts [`GROUP_SEPARATOR`] every three
/// digits from the right.
///
/// ```
/// use shared::utils::format_price;
/// assert_eq!(format_price(1234567.8), "1\u{a0}234\u{a0}568");
/// assert_eq!(format_price(0.0), "0");
/// ```
pub fn format_price(n: f64) -> String {
    if !n.is_finite() {
        return NON_FINITE_PLACEHOLDER.to_string();
    }
    // Adding +0.0 folds a negative zero into a positive one.
    let rounded = round_half_up(n) + 0.0;
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()), GROUP_SEPARATOR);
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a ratio as a percentage with one fractional digit.
///
/// The `+` prefix is decided by the sign of the unrounded input, so a tiny
/// positive ratio still renders as `"+0.0%"`.
///
/// ```
/// use shared::utils::format_percent;
/// assert_eq!(format_percent(0.153), "+15.3%");
/// assert_eq!(format_percent(-0.02), "-2.0%");
/// assert_eq!(format_percent(0.0), "0.0%");
/// ```
pub fn format_percent(n: f64) -> String {
    if !n.is_finite() {
        return NON_FINITE_PLACEHOLDER.to_string();
    }
    let pct = to_fixed_one(n * 100.0);
    if n > 0.0 {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}

/// CSS class label for a signed coefficient: `"positive"`, `"negative"` or `""`.
pub fn coeff_class(n: f64) -> &'static str {
    CoeffClass::from_value(n).as_str()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoeffClass {
    Positive,
    Negative,
    Neutral,
}

impl CoeffClass {
    pub fn from_value(n: f64) -> Self {
        if n > 0.0 {
            CoeffClass::Positive
        } else if n < 0.0 {
            CoeffClass::Negative
        } else {
            CoeffClass::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoeffClass::Positive => "positive",
            CoeffClass::Negative => "negative",
            CoeffClass::Neutral => "",
        }
    }
}

impl fmt::Display for CoeffClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// One fractional digit, rounded on the exact binary value. Exact ties go away
// from zero; every other value is already handled exactly by `{:.1}`.
fn to_fixed_one(x: f64) -> String {
    let x = x + 0.0;
    if is_exact_tenths_tie(x) {
        let tenths = (x.abs() * 10.0).ceil();
        let sign = if x < 0.0 { "-" } else { "" };
        return format!("{}{:.1}", sign, tenths / 10.0);
    }
    format!("{:.1}", x)
}

// A value sits exactly halfway between two tenths only when it is an odd
// multiple of 0.25.
fn is_exact_tenths_tie(x: f64) -> bool {
    let quarters = x.abs() * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 == 1.0
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ru(s: &str) -> String {
        s.replace(' ', "\u{a0}")
    }

    #[test]
    fn test_format_price_groups_and_rounds() {
        assert_eq!(format_price(1234567.8), ru("1 234 568"));
        assert_eq!(format_price(999.4), "999");
        assert_eq!(format_price(1000.0), ru("1 000"));
        assert_eq!(format_price(12_345_678_901.0), ru("12 345 678 901"));
    }

    #[test]
    fn test_format_price_zero() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(-0.0), "0");
        assert_eq!(format_price(-0.4), "0");
    }

    #[test]
    fn test_format_price_ties_toward_positive_infinity() {
        assert_eq!(format_price(2.5), "3");
        assert_eq!(format_price(-2.5), "-2");
        assert_eq!(format_price(-1234.5), ru("-1 234"));
        assert_eq!(format_price(0.49999999999999994), "0");
    }

    #[test]
    fn test_format_price_has_no_fraction() {
        for n in [0.1, 15.75, 327_000.0, 9_876_543.21, -42.42] {
            let s = format_price(n);
            assert!(
                s.chars().all(|c| c.is_ascii_digit() || c == GROUP_SEPARATOR || c == '-'),
                "unexpected character in {:?}",
                s
            );
            assert!(!s.contains('.'));
        }
    }

    #[test]
    fn test_format_percent_examples() {
        assert_eq!(format_percent(0.153), "+15.3%");
        assert_eq!(format_percent(-0.02), "-2.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(0.215), "+21.5%");
        assert_eq!(format_percent(-0.045), "-4.5%");
    }

    #[test]
    fn test_format_percent_sign_uses_unrounded_value() {
        assert_eq!(format_percent(0.0001), "+0.0%");
        assert_eq!(format_percent(-0.0001), "-0.0%");
        assert_eq!(format_percent(-0.0), "0.0%");
    }

    #[test]
    fn test_format_percent_shape() {
        for n in [0.0, 0.5, -0.333, 1.0, 0.0049, -1.0, 12.3456] {
            let s = format_percent(n);
            assert!(s.ends_with('%'));
            let body = s.trim_end_matches('%');
            let (_, fraction) = body.split_once('.').expect("one decimal separator");
            assert_eq!(fraction.len(), 1, "{:?}", s);
        }
    }

    #[test]
    fn test_to_fixed_one_ties_away_from_zero() {
        assert_eq!(to_fixed_one(0.25), "0.3");
        assert_eq!(to_fixed_one(-0.25), "-0.3");
        assert_eq!(to_fixed_one(1.75), "1.8");
        // 0.15 is stored slightly below the tie.
        assert_eq!(to_fixed_one(0.15), "0.1");
        assert_eq!(to_fixed_one(0.5), "0.5");
    }

    #[test]
    fn test_coeff_class() {
        assert_eq!(coeff_class(5.0), "positive");
        assert_eq!(coeff_class(-5.0), "negative");
        assert_eq!(coeff_class(0.0), "");
        assert_eq!(coeff_class(-0.0), "");
        assert_eq!(CoeffClass::from_value(0.005), CoeffClass::Positive);
        assert_eq!(CoeffClass::Negative.to_string(), "negative");
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(format_price(f64::NAN), NON_FINITE_PLACEHOLDER);
        assert_eq!(format_price(f64::INFINITY), NON_FINITE_PLACEHOLDER);
        assert_eq!(format_percent(f64::NEG_INFINITY), NON_FINITE_PLACEHOLDER);
        assert_eq!(coeff_class(f64::NAN), "");
        assert_eq!(coeff_class(f64::INFINITY), "positive");
    }

    #[test]
    fn test_formatters_are_deterministic() {
        for n in [1234567.8, -0.02, 0.0001, 42.0] {
            assert_eq!(format_price(n), format_price(n));
            assert_eq!(format_percent(n), format_percent(n));
            assert_eq!(coeff_class(n), coeff_class(n));
        }
    }
}
