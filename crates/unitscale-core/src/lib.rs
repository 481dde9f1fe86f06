//! unitscale: integer quantities with mixed-unit formatting and parsing.
//!
//! A [`Unit`] is a table of symbols over one magnitude type. It formats a value greedily into
//! descending whole units (`1kg1hg1dag`) and parses that notation back. Each domain module
//! defines a quantity newtype, its constants and one or more tables:
//!
//! ```
//! use unitscale_core::{data, length::Length, Quantity};
//!
//! let size: data::Size = "1.5GiB".parse().unwrap();
//! assert_eq!(data::BINARY_IEC.format(size), "1GiB512MiB");
//! assert_eq!(Length::KILOMETER.to_string(), "1km");
//! assert_eq!(Length::read("5'11\"").unwrap(), Length::FOOT * 5 + Length::INCH * 11);
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod length;
pub mod lexer;
pub mod magnitude;
pub mod mass;
pub mod network;
pub mod options;
pub mod prefix;
pub mod quantity;
pub mod unit;
pub mod volume;

pub use catalog::Domain;
pub use data::Size;
pub use error::{CatalogError, ParseError, Result};
pub use length::Length;
pub use lexer::Literal;
pub use magnitude::Magnitude;
pub use mass::Mass;
pub use network::Bandwidth;
pub use options::{FormatOptions, NumberStyle};
pub use prefix::Prefix;
pub use quantity::Quantity;
pub use unit::{Symbol, Unit};
pub use volume::Volume;

/// Parse `input` with `Q`'s merged table and render it with `table`.
///
/// The value is read with every label the domain knows, so this converts between
/// conventions: `convert::<Mass>("1lb", &mass::TROY, &FormatOptions::default())`.
pub fn convert<Q: Quantity>(input: &str, table: &Unit<Q>, options: &FormatOptions) -> Result<String> {
    let value = Q::read(input)?;
    Ok(value.render_with(table, options))
}
