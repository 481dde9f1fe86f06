//! Network bandwidth, counted in bits per second.
//!
//! The tables carry bit labels only. The per-second suffix is added whenever a bandwidth is
//! rendered through [`Quantity`] (`Display`, [`convert`](crate::convert)) and stripped again
//! by `FromStr`, so `10Gib/s`, `10Gibps` and `10Gib` all read the same.

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::options::FormatOptions;
use crate::prefix::{self, Prefix, BINARY_SERIES, DECIMAL_SERIES};
use crate::quantity::{define_quantity, Quantity};
use crate::unit::Unit;

define_quantity! {
    /// Throughput in bits per second.
    pub struct Bandwidth;
}

impl Bandwidth {
    pub const BIT: Bandwidth = Bandwidth(1);

    pub const KIBIBIT: Bandwidth = Bandwidth(Prefix::KIBI.scale(1));
    pub const MEBIBIT: Bandwidth = Bandwidth(Prefix::MEBI.scale(1));
    pub const GIBIBIT: Bandwidth = Bandwidth(Prefix::GIBI.scale(1));
    pub const TEBIBIT: Bandwidth = Bandwidth(Prefix::TEBI.scale(1));
    pub const PEBIBIT: Bandwidth = Bandwidth(Prefix::PEBI.scale(1));

    pub const KILOBIT: Bandwidth = Bandwidth(Prefix::KILO.scale(1));
    pub const MEGABIT: Bandwidth = Bandwidth(Prefix::MEGA.scale(1));
    pub const GIGABIT: Bandwidth = Bandwidth(Prefix::GIGA.scale(1));
    pub const TERABIT: Bandwidth = Bandwidth(Prefix::TERA.scale(1));
    pub const PETABIT: Bandwidth = Bandwidth(Prefix::PETA.scale(1));
}

const PER_SECOND: &str = "/s";

/// b, kb, Mb, Gb, Tb, Pb.
pub static DECIMAL: Lazy<Unit<Bandwidth>> =
    Lazy::new(|| Unit::new(prefix::prefixed("b", 1, &DECIMAL_SERIES, Bandwidth)));

/// b, Kib, Mib, Gib, Tib, Pib. Used by `Display`.
pub static BINARY_IEC: Lazy<Unit<Bandwidth>> =
    Lazy::new(|| Unit::new(prefix::prefixed("b", 1, &BINARY_SERIES, Bandwidth)));

pub static ALL: Lazy<Unit<Bandwidth>> =
    Lazy::new(|| Unit::merge([&*DECIMAL, &*BINARY_IEC]));

impl Quantity for Bandwidth {
    fn default_unit() -> &'static Unit<Self> {
        &BINARY_IEC
    }

    fn all_units() -> &'static Unit<Self> {
        &ALL
    }

    fn render_with(self, unit: &Unit<Self>, options: &FormatOptions) -> String {
        let mut out = unit.format_with(self, options);
        if out.is_empty() {
            out.push('0');
        }
        out.push_str(PER_SECOND);
        out
    }

    fn read(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let bits = trimmed
            .strip_suffix(PER_SECOND)
            .or_else(|| trimmed.strip_suffix("ps"))
            .unwrap_or(trimmed);
        Self::all_units().parse(bits)
    }
}
