//! Quantity: a domain newtype over `i64` tied to its unit tables.
//!
//! Each domain (size, length, mass, volume, bandwidth) gets its own type so magnitudes from
//! different domains never mix. [`define_quantity!`] generates the newtype, arithmetic and
//! serde; the domain then implements [`Quantity`] to pick its display and parse tables.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::Deserializer;

use crate::error::{ParseError, Result};
use crate::magnitude::Magnitude;
use crate::options::FormatOptions;
use crate::unit::Unit;

/// A domain magnitude with a default rendering table and a merged parsing table.
pub trait Quantity: Magnitude + fmt::Display + FromStr<Err = ParseError> {
    /// Table used by `Display`.
    fn default_unit() -> &'static Unit<Self>;

    /// Superset table used by `FromStr` (e.g. SI and imperial together).
    fn all_units() -> &'static Unit<Self>;

    /// Render with one of the domain's tables. Domains with a fixed suffix override this so
    /// every table carries it.
    fn render_with(self, unit: &Unit<Self>, options: &FormatOptions) -> String {
        unit.format_with(self, options)
    }

    fn render(self) -> String {
        self.render_with(Self::default_unit(), &FormatOptions::default())
    }

    fn read(input: &str) -> Result<Self> {
        Self::all_units().parse(input)
    }
}

/// Declare a domain quantity newtype.
///
/// The domain must implement [`Quantity`] for the generated type.
macro_rules! define_quantity {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name(pub i64);

        impl $name {
            pub const ZERO: $name = $name(0);

            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Raw magnitude in the domain's smallest unit.
            pub const fn get(self) -> i64 {
                self.0
            }

            /// How many `other` fit in `self` (e.g. `KILOGRAM.ratio(GRAM) == 1000.0`).
            pub fn ratio(self, other: Self) -> f64 {
                self.0 as f64 / other.0 as f64
            }

            /// Parse `value` in place. On error `self` is left unchanged.
            pub fn set(&mut self, value: &str) -> $crate::error::Result<()> {
                *self = <Self as $crate::quantity::Quantity>::read(value)?;
                Ok(())
            }

            pub const fn abs(self) -> Self {
                Self(self.0.abs())
            }

            pub fn checked_add(self, rhs: Self) -> Option<Self> {
                self.0.checked_add(rhs.0).map(Self)
            }

            pub fn checked_mul(self, rhs: i64) -> Option<Self> {
                self.0.checked_mul(rhs).map(Self)
            }
        }

        impl $crate::magnitude::Magnitude for $name {
            const ZERO: Self = $name(0);

            fn to_i128(self) -> i128 {
                self.0 as i128
            }

            fn from_i128(value: i128) -> Option<Self> {
                i64::try_from(value).ok().map(Self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&<Self as $crate::quantity::Quantity>::render(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ParseError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::quantity::Quantity>::read(s)
            }
        }

        impl ::std::ops::Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl ::std::ops::Mul<i64> for $name {
            type Output = $name;

            fn mul(self, rhs: i64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl ::std::ops::Mul<$name> for i64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                $name(self * rhs.0)
            }
        }

        impl ::std::ops::Div<i64> for $name {
            type Output = $name;

            fn div(self, rhs: i64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl ::std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl ::std::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: $name) {
                self.0 -= rhs.0;
            }
        }

        impl ::std::iter::Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                $name(iter.map(|q| q.0).sum())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                $crate::quantity::deserialize(deserializer)
            }
        }
    };
}

pub(crate) use define_quantity;

/// Accept either the human-readable notation (`"1.5GiB"`) or a raw integer magnitude.
pub(crate) fn deserialize<'de, D, Q>(deserializer: D) -> std::result::Result<Q, D::Error>
where
    D: Deserializer<'de>,
    Q: Quantity,
{
    deserializer.deserialize_any(QuantityVisitor(PhantomData))
}

struct QuantityVisitor<Q>(PhantomData<Q>);

impl<'de, Q: Quantity> Visitor<'de> for QuantityVisitor<Q> {
    type Value = Q;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quantity string such as \"1.5GiB\" or an integer magnitude")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Q, E> {
        Q::from_str(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Q, E> {
        Q::from_i128(v as i128).ok_or_else(|| E::custom(ParseError::out_of_range(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Q, E> {
        Q::from_i128(v as i128).ok_or_else(|| E::custom(ParseError::out_of_range(v.to_string())))
    }
}
