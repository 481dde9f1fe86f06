//! Mass, counted in nanograms.
//!
//! Besides SI there are three avoirdupois-style tables: imperial (long hundredweight and ton),
//! US/Canada (short hundredweight and ton) and troy for precious metals. Only SI and imperial
//! are merged for parsing, since `cwt` and `ton` mean different things in the other two.

use once_cell::sync::Lazy;

use crate::prefix::{self, Prefix, SI_SERIES};
use crate::quantity::{define_quantity, Quantity};
use crate::unit::{Symbol, Unit};

define_quantity! {
    /// Mass in nanograms.
    pub struct Mass;
}

impl Mass {
    pub const NANOGRAM: Mass = Mass(1);
    pub const MICROGRAM: Mass = Mass(Prefix::MICRO.scale(Self::GRAM.0));
    pub const MILLIGRAM: Mass = Mass(Prefix::MILLI.scale(Self::GRAM.0));
    pub const CENTIGRAM: Mass = Mass(Prefix::CENTI.scale(Self::GRAM.0));
    pub const DECIGRAM: Mass = Mass(Prefix::DECI.scale(Self::GRAM.0));
    pub const GRAM: Mass = Mass(1_000_000_000);
    pub const DECAGRAM: Mass = Mass(Prefix::DECA.scale(Self::GRAM.0));
    pub const HECTOGRAM: Mass = Mass(Prefix::HECTO.scale(Self::GRAM.0));
    pub const KILOGRAM: Mass = Mass(Prefix::KILO.scale(Self::GRAM.0));

    pub const GRAIN: Mass = Mass(64_798_910);
    /// Truncated: a sixteenth of an ounce is not a whole number of nanograms.
    pub const DRAM: Mass = Mass(Self::OUNCE.0 / 16);
    pub const OUNCE: Mass = Mass(Self::POUND.0 / 16);
    pub const POUND: Mass = Mass(7000 * Self::GRAIN.0);
    pub const STONE: Mass = Mass(14 * Self::POUND.0);
    pub const QUARTER: Mass = Mass(2 * Self::STONE.0);
    pub const HUNDREDWEIGHT: Mass = Mass(4 * Self::QUARTER.0);
    pub const TON: Mass = Mass(20 * Self::HUNDREDWEIGHT.0);

    pub const US_CANADA_HUNDREDWEIGHT: Mass = Mass(100 * Self::POUND.0);
    pub const US_CANADA_TON: Mass = Mass(20 * Self::US_CANADA_HUNDREDWEIGHT.0);

    pub const TROY_PENNYWEIGHT: Mass = Mass(24 * Self::GRAIN.0);
    pub const TROY_OUNCE: Mass = Mass(20 * Self::TROY_PENNYWEIGHT.0);
    pub const TROY_POUND: Mass = Mass(12 * Self::TROY_OUNCE.0);
}

/// ng, μg, mg, cg, dg, g, dag, hg, kg. Used by `Display`.
pub static SI: Lazy<Unit<Mass>> =
    Lazy::new(|| Unit::new(prefix::prefixed("g", Mass::GRAM.0, &SI_SERIES, Mass)));

pub static IMPERIAL: Lazy<Unit<Mass>> = Lazy::new(|| {
    Unit::new([
        Symbol::new(Mass::GRAIN, "gr"),
        Symbol::new(Mass::DRAM, "dr"),
        Symbol::new(Mass::OUNCE, "oz"),
        Symbol::new(Mass::POUND, "lb"),
        Symbol::new(Mass::STONE, "st"),
        Symbol::new(Mass::QUARTER, "qr"),
        Symbol::new(Mass::HUNDREDWEIGHT, "cwt"),
        Symbol::new(Mass::TON, "ton"),
    ])
});

pub static TROY: Lazy<Unit<Mass>> = Lazy::new(|| {
    Unit::new([
        Symbol::new(Mass::GRAIN, "gr"),
        Symbol::new(Mass::TROY_PENNYWEIGHT, "dwt"),
        Symbol::new(Mass::TROY_OUNCE, "ozt"),
        Symbol::new(Mass::TROY_POUND, "lbt"),
    ])
});

/// Short hundredweight (100 lb) and short ton (2000 lb).
pub static US_CANADA: Lazy<Unit<Mass>> = Lazy::new(|| {
    Unit::new([
        Symbol::new(Mass::GRAIN, "gr"),
        Symbol::new(Mass::DRAM, "dr"),
        Symbol::new(Mass::OUNCE, "oz"),
        Symbol::new(Mass::POUND, "lb"),
        Symbol::new(Mass::US_CANADA_HUNDREDWEIGHT, "cwt"),
        Symbol::new(Mass::US_CANADA_TON, "ton"),
    ])
});

pub static ALL: Lazy<Unit<Mass>> = Lazy::new(|| Unit::merge([&*SI, &*IMPERIAL]));

impl Quantity for Mass {
    fn default_unit() -> &'static Unit<Self> {
        &SI
    }

    fn all_units() -> &'static Unit<Self> {
        &ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn metric_steps() {
        assert_eq!(Mass::KILOGRAM.ratio(Mass::HECTOGRAM), 10.0);
        assert_eq!(Mass::HECTOGRAM.ratio(Mass::DECAGRAM), 10.0);
        assert_eq!(Mass::DECAGRAM.ratio(Mass::GRAM), 10.0);
        assert_eq!(Mass::GRAM.ratio(Mass::DECIGRAM), 10.0);
        assert_eq!(Mass::DECIGRAM.ratio(Mass::CENTIGRAM), 10.0);
        assert_eq!(Mass::CENTIGRAM.ratio(Mass::MILLIGRAM), 10.0);
        assert_eq!(Mass::MILLIGRAM.ratio(Mass::MICROGRAM), 1000.0);
        assert_eq!(Mass::MICROGRAM.ratio(Mass::NANOGRAM), 1000.0);
    }

    #[test]
    fn avoirdupois_steps() {
        assert_eq!(Mass::POUND.ratio(Mass::OUNCE), 16.0);
        assert_eq!(Mass::POUND.ratio(Mass::GRAIN), 7000.0);
        assert_eq!(Mass::STONE.ratio(Mass::POUND), 14.0);
        assert_eq!(Mass::QUARTER.ratio(Mass::STONE), 2.0);
        assert_eq!(Mass::HUNDREDWEIGHT.ratio(Mass::QUARTER), 4.0);
        assert_eq!(Mass::TON.ratio(Mass::HUNDREDWEIGHT), 20.0);
        assert_eq!(Mass::POUND, Mass(453_592_370_000));
        assert_eq!(Mass::DRAM, Mass(1_771_845_195));
    }

    #[test]
    fn short_and_troy_steps() {
        assert_eq!(Mass::US_CANADA_TON.ratio(Mass::POUND), 2000.0);
        assert_eq!(Mass::TROY_OUNCE.ratio(Mass::GRAIN), 480.0);
        assert_eq!(Mass::TROY_POUND.ratio(Mass::TROY_OUNCE), 12.0);
    }

    #[test]
    fn display_uses_si() {
        assert_eq!(Mass::KILOGRAM.to_string(), "1kg");
        assert_eq!(Mass::HECTOGRAM.to_string(), "1hg");
        assert_eq!(Mass::DECAGRAM.to_string(), "1dag");
        assert_eq!(Mass::GRAM.to_string(), "1g");
        assert_eq!(Mass::DECIGRAM.to_string(), "1dg");
        assert_eq!(Mass::CENTIGRAM.to_string(), "1cg");
        assert_eq!(Mass::MILLIGRAM.to_string(), "1mg");
        assert_eq!(Mass::MICROGRAM.to_string(), "1μg");
        assert_eq!(Mass::NANOGRAM.to_string(), "1ng");
    }

    #[test]
    fn imperial_format() {
        assert_eq!(IMPERIAL.format(Mass::ZERO), "");
        assert_eq!(IMPERIAL.format(Mass::TON), "1ton");
        assert_eq!(IMPERIAL.format(Mass::HUNDREDWEIGHT), "1cwt");
        assert_eq!(IMPERIAL.format(Mass::QUARTER), "1qr");
        assert_eq!(IMPERIAL.format(Mass::STONE), "1st");
        assert_eq!(IMPERIAL.format(Mass::POUND), "1lb");
        assert_eq!(IMPERIAL.format(Mass::OUNCE), "1oz");
        assert_eq!(IMPERIAL.format(Mass::GRAIN), "1gr");
        assert_eq!(IMPERIAL.format(Mass::STONE + Mass::POUND * 3), "1st3lb");
    }

    #[test]
    fn regional_tables_disagree_on_ton() {
        assert_eq!(US_CANADA.format(Mass::US_CANADA_TON), "1ton");
        assert_eq!(US_CANADA.format(Mass::TON), "1ton2cwt40lb");
        assert_eq!(TROY.format(Mass::TROY_POUND + Mass::TROY_OUNCE), "1lbt1ozt");
        assert_eq!(TROY.parse("2ozt").unwrap(), Mass::TROY_OUNCE * 2);
    }

    #[test]
    fn parse_merges_si_and_imperial() {
        assert_eq!("1lb1kg".parse::<Mass>().unwrap(), Mass::POUND + Mass::KILOGRAM);
        assert_eq!("5ug".parse::<Mass>().unwrap(), Mass::MICROGRAM * 5);
        assert!(matches!("1ozt".parse::<Mass>(), Err(ParseError::UnrecognizedSymbol { .. })));
    }

    #[test]
    fn round_trip_constants() {
        for c in [
            Mass::NANOGRAM,
            Mass::MICROGRAM,
            Mass::MILLIGRAM,
            Mass::CENTIGRAM,
            Mass::DECIGRAM,
            Mass::GRAM,
            Mass::DECAGRAM,
            Mass::HECTOGRAM,
            Mass::KILOGRAM,
            Mass::GRAIN,
            Mass::DRAM,
            Mass::OUNCE,
            Mass::POUND,
            Mass::STONE,
            Mass::QUARTER,
            Mass::HUNDREDWEIGHT,
            Mass::TON,
            Mass::US_CANADA_HUNDREDWEIGHT,
            Mass::US_CANADA_TON,
            Mass::TROY_PENNYWEIGHT,
            Mass::TROY_OUNCE,
            Mass::TROY_POUND,
        ] {
            assert_eq!(SI.parse(&SI.format(c)).unwrap(), c, "{c:?}");
            assert_eq!(c.to_string().parse::<Mass>().unwrap(), c, "{c:?}");
        }
    }

    #[test]
    fn extremes_round_trip() {
        for c in [Mass(i64::MAX), Mass(i64::MIN)] {
            assert_eq!(SI.parse(&SI.format(c)).unwrap(), c);
        }
        assert_eq!(Mass(i64::MAX).to_string(), "9223372kg3dag6g8dg5cg4mg775μg807ng");
    }

    #[test]
    fn set() {
        let mut m = Mass::GRAM * 100;
        for (input, expected) in [
            ("", Some(Mass::ZERO)),
            ("10kg", Some(Mass::KILOGRAM * 10)),
            ("1kg1hg1dag", Some(Mass::KILOGRAM + Mass::HECTOGRAM + Mass::DECAGRAM)),
            ("100DNE", None),
            ("BAD", None),
        ] {
            match expected {
                Some(v) => {
                    m.set(input).unwrap();
                    assert_eq!(m, v, "{input}");
                }
                None => assert!(m.set(input).is_err(), "{input}"),
            }
        }
    }

    #[test]
    fn error_kinds() {
        assert!(matches!("100DNE".parse::<Mass>(), Err(ParseError::UnrecognizedSymbol { .. })));
        assert!(matches!("BAD".parse::<Mass>(), Err(ParseError::PatternMismatch { .. })));
    }
}
