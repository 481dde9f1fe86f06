//! Rendering options for the fractional base-unit segment of a formatted value.
//!
//! Only the trailing remainder (e.g. the `0.5B` in `1KiB0.5B`) is a float; whole-unit
//! counts are always plain integers and ignore these options.

use serde::{Deserialize, Serialize};

/// Notation for the fractional remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// `ddd.dddd`, never an exponent.
    #[default]
    Fixed,
    /// `d.dddde±d`.
    Scientific,
    /// Scientific for very small or large exponents, fixed otherwise. Trailing zeros dropped.
    General,
}

impl NumberStyle {
    /// Parse a style name as used in configuration (`fixed`, `scientific`, `general`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "fixed" | "f" => Some(NumberStyle::Fixed),
            "scientific" | "exponent" | "e" => Some(NumberStyle::Scientific),
            "general" | "g" => Some(NumberStyle::General),
            _ => None,
        }
    }
}

/// Format configuration passed to [`Unit::format_with`](crate::Unit::format_with).
///
/// `precision: None` means the shortest representation that reads back to the same `f64`.
/// For [`NumberStyle::General`] the precision counts significant digits; otherwise it counts
/// digits after the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub style: NumberStyle,
    pub precision: Option<usize>,
}

/// Exponent threshold used by [`NumberStyle::General`] when no precision is set.
const GENERAL_SHORTEST_THRESHOLD: i32 = 6;

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed-point with exactly `digits` decimals.
    pub fn fixed(digits: usize) -> Self {
        Self {
            style: NumberStyle::Fixed,
            precision: Some(digits),
        }
    }

    pub fn scientific() -> Self {
        Self::new().style(NumberStyle::Scientific)
    }

    pub fn general() -> Self {
        Self::new().style(NumberStyle::General)
    }

    pub fn style(mut self, style: NumberStyle) -> Self {
        self.style = style;
        self
    }

    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Reset to the shortest round-trip representation.
    pub fn shortest(mut self) -> Self {
        self.precision = None;
        self
    }

    /// Render `value` according to these options.
    pub fn render(&self, value: f64) -> String {
        match (self.style, self.precision) {
            (NumberStyle::Fixed, None) => format!("{value}"),
            (NumberStyle::Fixed, Some(p)) => format!("{value:.p$}"),
            (NumberStyle::Scientific, None) => format!("{value:e}"),
            (NumberStyle::Scientific, Some(p)) => format!("{value:.p$e}"),
            (NumberStyle::General, precision) => render_general(value, precision),
        }
    }
}

fn render_general(value: f64, precision: Option<usize>) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    // A precision of zero significant digits is treated as one.
    let significant = precision.map(|p| p.max(1));
    let scientific = match significant {
        Some(s) => format!("{:.*e}", s - 1, value),
        None => format!("{value:e}"),
    };
    let exponent = decimal_exponent(&scientific);
    let threshold = significant.map_or(GENERAL_SHORTEST_THRESHOLD, |s| s as i32);

    if exponent < -4 || exponent >= threshold {
        return strip_mantissa_zeros(&scientific);
    }
    match significant {
        None => format!("{value}"),
        Some(s) => {
            let decimals = (s as i32 - 1 - exponent).max(0) as usize;
            strip_fraction_zeros(format!("{value:.decimals$}"))
        }
    }
}

/// Exponent of a string produced by `{:e}`.
fn decimal_exponent(scientific: &str) -> i32 {
    scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

fn strip_mantissa_zeros(scientific: &str) -> String {
    match scientific.split_once('e') {
        Some((mantissa, exp)) => {
            format!("{}e{}", strip_fraction_zeros(mantissa.to_string()), exp)
        }
        None => scientific.to_string(),
    }
}

fn strip_fraction_zeros(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
