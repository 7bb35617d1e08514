use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use valform_types::{Domain, Envelope, Error, FormattedNumber, NumberFormatOptions};

use crate::store::{self, ConfigStore};

/// Magnitude tiers in escalation order: scale factor and display suffix.
const TIERS: &[(f64, &str)] = &[
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "G"),
    (1e12, "T"),
    (1e15, "P"),
];

/// Formats numeric values under a pair of digit budgets.
///
/// The overall limit caps how many integer-part digits may appear before
/// the value escalates to a coarser magnitude tier; the decimal limit caps
/// the fractional digits, further squeezed by whatever headroom the
/// integer part leaves. Plain values are comma-grouped with trailing
/// fractional zeros trimmed; abbreviated values skip grouping and keep the
/// fraction zero-padded to the full budget.
#[derive(Debug, Clone, Default)]
pub struct NumberFormatter {
    options: NumberFormatOptions,
}

impl NumberFormatter {
    pub fn new(options: NumberFormatOptions) -> Self {
        Self { options }
    }

    /// Build a formatter from the current `numberFormatter` configuration.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self::new(store.options(Domain::NumberFormatter))
    }

    /// Format any serializable input. Everything except a JSON number
    /// (including numeric strings, NaN and infinities) is rejected.
    pub fn format<T: Serialize>(&self, value: T) -> Envelope<FormattedNumber> {
        let Some(value) = numeric_input(&value) else {
            debug!("rejected non-numeric input");
            return Error::NotNumeric.into();
        };
        let number = self.render(value);
        Envelope::ok("Number successfully formatted", FormattedNumber { number })
    }

    fn render(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let magnitude = value.abs();

        let (Some(overall), Some(decimal)) = (
            self.options.overall_digit_limit,
            self.options.decimal_digit_limit,
        ) else {
            // No budgets: unabbreviated and unrounded.
            return format!("{sign}{}", render_unbounded(magnitude));
        };

        let (scale, suffix) = select_tier(magnitude, overall);
        let scaled = magnitude / scale;
        let places = decimal.min(overall.saturating_sub(int_digits(scaled)));
        let rounded = round_half_up(scaled, places);

        let body = if suffix.is_empty() {
            render_grouped(rounded, places)
        } else {
            format!("{rounded:.prec$}{suffix}", prec = places as usize)
        };
        format!("{sign}{body}")
    }
}

/// Format `value` using the process-wide `numberFormatter` configuration,
/// re-read on every call.
pub fn format_number<T: Serialize>(value: T) -> Envelope<FormattedNumber> {
    NumberFormatter::from_store(store::global()).format(value)
}

fn numeric_input<T: Serialize>(value: &T) -> Option<f64> {
    match serde_json::to_value(value) {
        Ok(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
}

/// First tier whose scaled integer part fits the digit budget; the
/// coarsest tier absorbs anything still wider.
fn select_tier(magnitude: f64, overall: u32) -> (f64, &'static str) {
    let mut selected = TIERS[TIERS.len() - 1];
    for &tier in TIERS {
        if int_digits(magnitude / tier.0) <= overall {
            selected = tier;
            break;
        }
    }
    selected
}

/// Base-10 digit count of the integer part; values below 1 count as a
/// single leading zero.
fn int_digits(value: f64) -> u32 {
    let mut t = value.trunc();
    if t < 1.0 {
        return 1;
    }
    let mut digits = 1;
    while t >= 10.0 {
        t /= 10.0;
        digits += 1;
    }
    digits
}

/// Round to `places` fractional digits, halves away from zero.
fn round_half_up(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Plain-tier rendering: comma-grouped integer part, fractional digits
/// only when rounding left any, trailing zeros trimmed.
fn render_grouped(rounded: f64, places: u32) -> String {
    let fixed = format!("{rounded:.prec$}", prec = places as usize);
    let (int_part, fraction) = match fixed.split_once('.') {
        Some((int_part, fraction)) => (int_part, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let grouped = group_thousands(int_part);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// Unbudgeted rendering: shortest decimal form, integer part grouped.
fn render_unbounded(magnitude: f64) -> String {
    let plain = magnitude.to_string();
    let (int_part, fraction) = match plain.split_once('.') {
        Some((int_part, fraction)) => (int_part, fraction),
        None => (plain.as_str(), ""),
    };
    let grouped = group_thousands(int_part);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// Insert comma separators every three digits (12345 → "12,345").
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
