//! Metric and binary prefixes (e.g. kilo, milli, kibi) applied to integer magnitudes.
//!
//! Domain constants are exact integers, so a prefix scales a magnitude by an exact power of
//! ten or two instead of an `f64` factor.

use crate::magnitude::Magnitude;
use crate::unit::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prefix {
    /// Metric (decimal): 10^n.
    Metric(i32),
    /// Binary: 2^n.
    Binary(i32),
}

impl Prefix {
    pub const NANO: Prefix = Prefix::Metric(-9);
    pub const MICRO: Prefix = Prefix::Metric(-6);
    pub const MILLI: Prefix = Prefix::Metric(-3);
    pub const CENTI: Prefix = Prefix::Metric(-2);
    pub const DECI: Prefix = Prefix::Metric(-1);
    pub const NONE: Prefix = Prefix::Metric(0);
    pub const DECA: Prefix = Prefix::Metric(1);
    pub const HECTO: Prefix = Prefix::Metric(2);
    pub const KILO: Prefix = Prefix::Metric(3);
    pub const MEGA: Prefix = Prefix::Metric(6);
    pub const GIGA: Prefix = Prefix::Metric(9);
    pub const TERA: Prefix = Prefix::Metric(12);
    pub const PETA: Prefix = Prefix::Metric(15);
    pub const KIBI: Prefix = Prefix::Binary(10);
    pub const MEBI: Prefix = Prefix::Binary(20);
    pub const GIBI: Prefix = Prefix::Binary(30);
    pub const TEBI: Prefix = Prefix::Binary(40);
    pub const PEBI: Prefix = Prefix::Binary(50);

    /// Scale the magnitude of an unprefixed unit.
    ///
    /// Negative metric exponents divide, so `unit` must be a multiple of the divisor
    /// (nano-based domains define their unprefixed unit as `10^9`).
    pub const fn scale(self, unit: i64) -> i64 {
        match self {
            Prefix::Metric(exp) => {
                let mut factor: i64 = 1;
                let mut n = exp.unsigned_abs();
                while n > 0 {
                    factor *= 10;
                    n -= 1;
                }
                if exp >= 0 {
                    unit * factor
                } else {
                    unit / factor
                }
            }
            Prefix::Binary(exp) => unit << exp,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Prefix::Metric(0) | Prefix::Binary(0))
    }

    /// Short symbol for display (e.g. k, m, μ, Ki). Returns empty string for none.
    pub fn short_symbol(&self) -> &'static str {
        match self {
            Prefix::Metric(0) | Prefix::Binary(0) => "",
            Prefix::Metric(15) => "P",
            Prefix::Metric(12) => "T",
            Prefix::Metric(9) => "G",
            Prefix::Metric(6) => "M",
            Prefix::Metric(3) => "k",
            Prefix::Metric(2) => "h",
            Prefix::Metric(1) => "da",
            Prefix::Metric(-1) => "d",
            Prefix::Metric(-2) => "c",
            Prefix::Metric(-3) => "m",
            Prefix::Metric(-6) => "μ",
            Prefix::Metric(-9) => "n",
            Prefix::Binary(10) => "Ki",
            Prefix::Binary(20) => "Mi",
            Prefix::Binary(30) => "Gi",
            Prefix::Binary(40) => "Ti",
            Prefix::Binary(50) => "Pi",
            _ => "",
        }
    }

    /// ASCII spelling accepted on input when the display symbol is not ASCII (`μ` → `u`).
    pub fn ascii_symbol(&self) -> Option<&'static str> {
        match self {
            Prefix::Metric(-6) => Some("u"),
            _ => None,
        }
    }
}

/// Build one table entry per prefix for a unit whose unprefixed magnitude is `unit`.
///
/// Labels are `<prefix><symbol>`, plus the ASCII spelling where one exists
/// (`μg` also reads as `ug`).
pub fn prefixed<T, F>(symbol: &str, unit: i64, prefixes: &[Prefix], wrap: F) -> Vec<Symbol<T>>
where
    T: Magnitude,
    F: Fn(i64) -> T,
{
    prefixes
        .iter()
        .map(|p| {
            let entry = Symbol::new(wrap(p.scale(unit)), format!("{}{symbol}", p.short_symbol()));
            match p.ascii_symbol() {
                Some(ascii) => entry.alias(format!("{ascii}{symbol}")),
                None => entry,
            }
        })
        .collect()
}

/// nano, micro, milli, centi, deci, (none), deca, hecto, kilo.
pub const SI_SERIES: [Prefix; 9] = [
    Prefix::NANO,
    Prefix::MICRO,
    Prefix::MILLI,
    Prefix::CENTI,
    Prefix::DECI,
    Prefix::NONE,
    Prefix::DECA,
    Prefix::HECTO,
    Prefix::KILO,
];

/// (none), kilo, mega, giga, tera, peta.
pub const DECIMAL_SERIES: [Prefix; 6] = [
    Prefix::NONE,
    Prefix::KILO,
    Prefix::MEGA,
    Prefix::GIGA,
    Prefix::TERA,
    Prefix::PETA,
];

/// (none), kibi, mebi, gibi, tebi, pebi.
pub const BINARY_SERIES: [Prefix; 6] = [
    Prefix::NONE,
    Prefix::KIBI,
    Prefix::MEBI,
    Prefix::GIBI,
    Prefix::TEBI,
    Prefix::PEBI,
];
