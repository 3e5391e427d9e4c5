//! Number rendering for the calculator display.
//!
//! Two representations exist for every value:
//! - the raw display text (`"1234.5"`), which the engine parses back into
//!   the result register;
//! - the formatted text (`"1,234.5"`), which is what the user sees.

use serde::{Deserialize, Serialize};

/// Values at or above this magnitude are never rendered through `i64`.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Separator settings used when formatting numbers for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Inserted between groups of three integer digits.
    pub grouping_separator: String,
    /// Placed between the integer and fraction digits.
    pub decimal_separator: String,
    /// Disable to print integer digits without separators.
    pub grouping: bool,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self {
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            grouping: true,
        }
    }
}

/// Decimal-style number formatter.
///
/// Fraction digits are rounded to `max_fraction_digits` and trailing zeros
/// are dropped; they are never padded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub locale: NumberLocale,
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            max_fraction_digits: 3,
        }
    }
}

impl NumberFormat {
    pub fn new(locale: NumberLocale, max_fraction_digits: usize) -> Self {
        Self {
            locale,
            max_fraction_digits,
        }
    }

    /// Parse raw display text and format it for the user.
    ///
    /// Returns `None` when the text is not a number (e.g. a lone `"."`).
    pub fn format_display_text(&self, text: &str) -> Option<String> {
        let value: f64 = text.parse().ok()?;
        Some(self.format(value))
    }

    /// Format a number with grouping separators.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
        }

        let rounded = format!("{:.*}", self.max_fraction_digits, value.abs());
        let trimmed = if rounded.contains('.') {
            rounded.trim_end_matches('0').trim_end_matches('.')
        } else {
            rounded.as_str()
        };

        let (int_part, frac_part) = match trimmed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (trimmed, None),
        };

        let mut result = String::new();
        if value < 0.0 {
            result.push('-');
        }
        if self.locale.grouping {
            result.push_str(&group_digits(int_part, &self.locale.grouping_separator));
        } else {
            result.push_str(int_part);
        }
        if let Some(frac_part) = frac_part {
            result.push_str(&self.locale.decimal_separator);
            result.push_str(frac_part);
        }
        result
    }
}

/// Render a value as raw display text.
///
/// Whole numbers are printed without a decimal point; anything else uses
/// the shortest decimal representation that parses back to the same value.
pub fn render_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Insert `separator` between groups of three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push_str(&separator.chars().rev().collect::<String>());
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
