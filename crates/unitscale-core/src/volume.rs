//! Volume, counted in nanolitres.

use once_cell::sync::Lazy;

use crate::prefix::{self, Prefix, SI_SERIES};
use crate::quantity::{define_quantity, Quantity};
use crate::unit::{Symbol, Unit};

define_quantity! {
    /// Volume in nanolitres.
    pub struct Volume;
}

impl Volume {
    pub const NANOLITER: Volume = Volume(1);
    pub const MICROLITER: Volume = Volume(Prefix::MICRO.scale(Self::LITER.0));
    pub const MILLILITER: Volume = Volume(Prefix::MILLI.scale(Self::LITER.0));
    pub const CENTILITER: Volume = Volume(Prefix::CENTI.scale(Self::LITER.0));
    pub const DECILITER: Volume = Volume(Prefix::DECI.scale(Self::LITER.0));
    pub const LITER: Volume = Volume(1_000_000_000);
    pub const DECALITER: Volume = Volume(Prefix::DECA.scale(Self::LITER.0));
    pub const HECTOLITER: Volume = Volume(Prefix::HECTO.scale(Self::LITER.0));
    pub const KILOLITER: Volume = Volume(Prefix::KILO.scale(Self::LITER.0));

    /// US customary fluid ounce.
    pub const FLUID_OUNCE: Volume = Volume(29_573_529);
    pub const GILL: Volume = Volume(5 * Self::FLUID_OUNCE.0);
    pub const PINT: Volume = Volume(4 * Self::GILL.0);
    pub const QUART: Volume = Volume(2 * Self::PINT.0);
    pub const GALLON: Volume = Volume(4 * Self::QUART.0);
}

/// nL, μL, mL, cL, dL, L, daL, hL, kL. Used by `Display`.
pub static SI: Lazy<Unit<Volume>> =
    Lazy::new(|| Unit::new(prefix::prefixed("L", Volume::LITER.0, &SI_SERIES, Volume)));

pub static IMPERIAL: Lazy<Unit<Volume>> = Lazy::new(|| {
    Unit::new([
        Symbol::new(Volume::FLUID_OUNCE, "fl oz"),
        Symbol::new(Volume::GILL, "gi"),
        Symbol::new(Volume::PINT, "pt"),
        Symbol::new(Volume::QUART, "qt"),
        Symbol::new(Volume::GALLON, "gal"),
    ])
});

pub static ALL: Lazy<Unit<Volume>> = Lazy::new(|| Unit::merge([&*SI, &*IMPERIAL]));

impl Quantity for Volume {
    fn default_unit() -> &'static Unit<Self> {
        &SI
    }

    fn all_units() -> &'static Unit<Self> {
        &ALL
    }
}
