//! Length, counted in nanometres.

use once_cell::sync::Lazy;

use crate::prefix::{self, Prefix, SI_SERIES};
use crate::quantity::{define_quantity, Quantity};
use crate::unit::{Symbol, Unit};

define_quantity! {
    /// Distance or extent in nanometres.
    pub struct Length;
}

impl Length {
    pub const NANOMETER: Length = Length(1);
    pub const MICROMETER: Length = Length(Prefix::MICRO.scale(Self::METER.0));
    pub const MILLIMETER: Length = Length(Prefix::MILLI.scale(Self::METER.0));
    pub const CENTIMETER: Length = Length(Prefix::CENTI.scale(Self::METER.0));
    pub const DECIMETER: Length = Length(Prefix::DECI.scale(Self::METER.0));
    pub const METER: Length = Length(1_000_000_000);
    pub const DECAMETER: Length = Length(Prefix::DECA.scale(Self::METER.0));
    pub const HECTOMETER: Length = Length(Prefix::HECTO.scale(Self::METER.0));
    pub const KILOMETER: Length = Length(Prefix::KILO.scale(Self::METER.0));

    /// International inch, 25.4 mm.
    pub const THOU: Length = Length(25_400);
    pub const INCH: Length = Length(1000 * Self::THOU.0);
    pub const FOOT: Length = Length(12 * Self::INCH.0);
    pub const YARD: Length = Length(3 * Self::FOOT.0);
    pub const MILE: Length = Length(1760 * Self::YARD.0);
    pub const LEAGUE: Length = Length(3 * Self::MILE.0);
}

/// nm, μm, mm, cm, dm, m, dam, hm, km. Used by `Display`.
pub static SI: Lazy<Unit<Length>> =
    Lazy::new(|| Unit::new(prefix::prefixed("m", Length::METER.0, &SI_SERIES, Length)));

/// in (`"`), ft (`'`), yd, mi, lea.
pub static IMPERIAL: Lazy<Unit<Length>> = Lazy::new(|| {
    Unit::new([
        Symbol::new(Length::INCH, "in").alias("\""),
        Symbol::new(Length::FOOT, "ft").alias("'"),
        Symbol::new(Length::YARD, "yd"),
        Symbol::new(Length::MILE, "mi"),
        Symbol::new(Length::LEAGUE, "lea"),
    ])
});

pub static ALL: Lazy<Unit<Length>> = Lazy::new(|| Unit::merge([&*SI, &*IMPERIAL]));

impl Quantity for Length {
    fn default_unit() -> &'static Unit<Self> {
        &SI
    }

    fn all_units() -> &'static Unit<Self> {
        &ALL
    }
}
