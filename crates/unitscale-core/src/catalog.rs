//! Catalog: domains and their tables by name, for front ends that only have strings.
//! Resolves e.g. `("mass", "imperial")` to the right `Unit` and converts between tables.

use std::fmt;

use crate::error::CatalogError;
use crate::options::FormatOptions;
use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::{data, length, mass, network, volume};

/// One family of quantities with its own magnitude type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Size,
    Length,
    Mass,
    Volume,
    Bandwidth,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Size,
        Domain::Length,
        Domain::Mass,
        Domain::Volume,
        Domain::Bandwidth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Size => "size",
            Domain::Length => "length",
            Domain::Mass => "mass",
            Domain::Volume => "volume",
            Domain::Bandwidth => "bandwidth",
        }
    }

    /// Case-insensitive; also accepts the module names `data` and `network`.
    pub fn from_name(name: &str) -> Result<Self, CatalogError> {
        match name.to_lowercase().as_str() {
            "size" | "data" => Ok(Domain::Size),
            "length" => Ok(Domain::Length),
            "mass" => Ok(Domain::Mass),
            "volume" => Ok(Domain::Volume),
            "bandwidth" | "network" => Ok(Domain::Bandwidth),
            _ => Err(CatalogError::UnknownDomain {
                name: name.to_string(),
            }),
        }
    }

    /// Table names accepted by [Domain::convert]; the first is the default.
    pub fn table_names(self) -> &'static [&'static str] {
        match self {
            Domain::Size => &["decimal", "binary-iec", "binary-memory"],
            Domain::Length | Domain::Volume => &["si", "imperial"],
            Domain::Mass => &["si", "imperial", "troy", "us-canada"],
            Domain::Bandwidth => &["binary-iec", "decimal"],
        }
    }

    /// Parse `input` with the domain's merged table and return the raw magnitude.
    pub fn magnitude(self, input: &str) -> Result<i64, CatalogError> {
        let raw = match self {
            Domain::Size => input.parse::<data::Size>()?.get(),
            Domain::Length => input.parse::<length::Length>()?.get(),
            Domain::Mass => input.parse::<mass::Mass>()?.get(),
            Domain::Volume => input.parse::<volume::Volume>()?.get(),
            Domain::Bandwidth => input.parse::<network::Bandwidth>()?.get(),
        };
        Ok(raw)
    }

    /// Parse `input` with the domain's merged table and render it with `table`
    /// (default table when `None`).
    pub fn convert(
        self,
        input: &str,
        table: Option<&str>,
        options: &FormatOptions,
    ) -> Result<String, CatalogError> {
        match self {
            Domain::Size => convert_in(self, input, table, options, size_table),
            Domain::Length => convert_in(self, input, table, options, length_table),
            Domain::Mass => convert_in(self, input, table, options, mass_table),
            Domain::Volume => convert_in(self, input, table, options, volume_table),
            Domain::Bandwidth => convert_in(self, input, table, options, bandwidth_table),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn convert_in<Q: Quantity>(
    domain: Domain,
    input: &str,
    table: Option<&str>,
    options: &FormatOptions,
    resolve: fn(&str) -> Option<&'static Unit<Q>>,
) -> Result<String, CatalogError> {
    let unit = match table {
        None => Q::default_unit(),
        Some(name) => resolve(&name.to_lowercase()).ok_or_else(|| CatalogError::UnknownTable {
            domain: domain.name(),
            name: name.to_string(),
        })?,
    };
    tracing::debug!(%domain, table = table.unwrap_or("default"), input, "convert");
    Ok(crate::convert(input, unit, options)?)
}

fn size_table(name: &str) -> Option<&'static Unit<data::Size>> {
    match name {
        "decimal" => Some(&*data::DECIMAL),
        "binary-iec" | "iec" => Some(&*data::BINARY_IEC),
        "binary-memory" | "memory" | "jedec" => Some(&*data::BINARY_MEMORY),
        _ => None,
    }
}

fn length_table(name: &str) -> Option<&'static Unit<length::Length>> {
    match name {
        "si" => Some(&*length::SI),
        "imperial" => Some(&*length::IMPERIAL),
        _ => None,
    }
}

fn mass_table(name: &str) -> Option<&'static Unit<mass::Mass>> {
    match name {
        "si" => Some(&*mass::SI),
        "imperial" => Some(&*mass::IMPERIAL),
        "troy" => Some(&*mass::TROY),
        "us-canada" | "us" => Some(&*mass::US_CANADA),
        _ => None,
    }
}

fn volume_table(name: &str) -> Option<&'static Unit<volume::Volume>> {
    match name {
        "si" => Some(&*volume::SI),
        "imperial" => Some(&*volume::IMPERIAL),
        _ => None,
    }
}

fn bandwidth_table(name: &str) -> Option<&'static Unit<network::Bandwidth>> {
    match name {
        "binary-iec" | "iec" => Some(&*network::BINARY_IEC),
        "decimal" => Some(&*network::DECIMAL),
        _ => None,
    }
}
