//! Digital information sizes, counted in bytes.

use once_cell::sync::Lazy;

use crate::prefix::{self, Prefix, BINARY_SERIES, DECIMAL_SERIES};
use crate::quantity::{define_quantity, Quantity};
use crate::unit::{Symbol, Unit};

define_quantity! {
    /// Amount of digital information in bytes.
    pub struct Size;
}

impl Size {
    pub const BYTE: Size = Size(1);

    pub const KIBIBYTE: Size = Size(Prefix::KIBI.scale(1));
    pub const MEBIBYTE: Size = Size(Prefix::MEBI.scale(1));
    pub const GIBIBYTE: Size = Size(Prefix::GIBI.scale(1));
    pub const TEBIBYTE: Size = Size(Prefix::TEBI.scale(1));
    pub const PEBIBYTE: Size = Size(Prefix::PEBI.scale(1));

    pub const KILOBYTE: Size = Size(Prefix::KILO.scale(1));
    pub const MEGABYTE: Size = Size(Prefix::MEGA.scale(1));
    pub const GIGABYTE: Size = Size(Prefix::GIGA.scale(1));
    pub const TERABYTE: Size = Size(Prefix::TERA.scale(1));
    pub const PETABYTE: Size = Size(Prefix::PETA.scale(1));
}

/// SI prefixes: B, kB, MB, GB, TB, PB. Used by `Display`.
pub static DECIMAL: Lazy<Unit<Size>> =
    Lazy::new(|| Unit::new(prefix::prefixed("B", 1, &DECIMAL_SERIES, Size)));

/// IEC binary prefixes: B, KiB, MiB, GiB, TiB, PiB.
pub static BINARY_IEC: Lazy<Unit<Size>> =
    Lazy::new(|| Unit::new(prefix::prefixed("B", 1, &BINARY_SERIES, Size)));

/// JEDEC memory notation: powers of 1024 written KB, MB, GB, TB.
pub static BINARY_MEMORY: Lazy<Unit<Size>> = Lazy::new(|| {
    Unit::new([
        Symbol::new(Size::BYTE, "B"),
        Symbol::new(Size::KIBIBYTE, "KB"),
        Symbol::new(Size::MEBIBYTE, "MB"),
        Symbol::new(Size::GIBIBYTE, "GB"),
        Symbol::new(Size::TEBIBYTE, "TB"),
    ])
});

/// Decimal and IEC together; what `FromStr` accepts.
pub static ALL: Lazy<Unit<Size>> = Lazy::new(|| Unit::merge([&*DECIMAL, &*BINARY_IEC]));

impl Quantity for Size {
    fn default_unit() -> &'static Unit<Self> {
        &DECIMAL
    }

    fn all_units() -> &'static Unit<Self> {
        &ALL
    }
}
