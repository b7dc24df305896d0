//! Currency presentation helpers.
//!
//! Valuation figures render as whole currency units, loan figures with two
//! fractional digits. A non-finite amount always renders as the em-dash
//! placeholder, never as `NaN` or an empty string.

/// Placeholder shown when a figure is undefined or unavailable.
pub const UNAVAILABLE: &str = "\u{2014}";

/// Currency code appended to every rendered amount.
pub const CURRENCY_CODE: &str = "OMR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionDigits {
    Whole,
    Cents,
}

/// Render an amount with thousands grouping and the configured precision.
pub fn currency(value: f64, digits: FractionDigits) -> String {
    if !value.is_finite() {
        return UNAVAILABLE.to_string();
    }

    let rendered = match digits {
        FractionDigits::Whole => format!("{:.0}", value),
        FractionDigits::Cents => format!("{:.2}", value),
    };

    let (body, fraction) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (rendered, None),
    };

    let (sign, magnitude) = match body.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", body.as_str()),
    };

    let grouped = group_thousands(magnitude);
    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac} {CURRENCY_CODE}"),
        None => format!("{sign}{grouped} {CURRENCY_CODE}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a ratio (e.g. 0.4) as a whole percentage, or the placeholder.
pub fn whole_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return UNAVAILABLE.to_string();
    }
    format!("{}%", (ratio * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_group_thousands() {
        assert_eq!(currency(1_234_567.0, FractionDigits::Whole), "1,234,567 OMR");
        assert_eq!(currency(950.0, FractionDigits::Whole), "950 OMR");
        assert_eq!(currency(0.0, FractionDigits::Whole), "0 OMR");
    }

    #[test]
    fn cents_render_two_digits() {
        assert_eq!(currency(659.9557, FractionDigits::Cents), "659.96 OMR");
        assert_eq!(currency(100_000.0, FractionDigits::Cents), "100,000.00 OMR");
    }

    #[test]
    fn whole_amounts_round_to_nearest_unit() {
        assert_eq!(currency(999.5, FractionDigits::Whole), "1,000 OMR");
    }

    #[test]
    fn non_finite_renders_placeholder() {
        assert_eq!(currency(f64::NAN, FractionDigits::Cents), UNAVAILABLE);
        assert_eq!(currency(f64::INFINITY, FractionDigits::Whole), UNAVAILABLE);
        assert_eq!(whole_percent(f64::NAN), UNAVAILABLE);
    }

    #[test]
    fn negative_amounts_keep_sign_before_grouping() {
        assert_eq!(currency(-12_345.0, FractionDigits::Whole), "-12,345 OMR");
    }

    #[test]
    fn ratios_render_as_whole_percent() {
        assert_eq!(whole_percent(0.4), "40%");
        assert_eq!(whole_percent(0.335), "34%");
    }
}
