//! Errors returned when a string cannot be read back into a magnitude, or a domain or
//! table name is not known.

use std::num::ParseFloatError;

use thiserror::Error;

/// Result alias for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse error for unit strings such as `"1.5GiB"` or `"1kg1hg"`.
///
/// Every variant is recoverable. Retrying the same input always yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not a sequence of `<number><symbol>` tokens.
    #[error("value does not match pattern: `{input}`")]
    PatternMismatch { input: String },

    /// A token's symbol is not a label of the table.
    #[error("unrecognized symbol: `{symbol}`")]
    UnrecognizedSymbol { symbol: String },

    /// The numeric part of a token is not a valid number (e.g. `1..5`).
    #[error("invalid number `{literal}`: {source}")]
    InvalidNumber {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    /// The value does not fit the quantity's integer type.
    #[error("value out of range: `{input}`")]
    OutOfRange { input: String },
}

impl ParseError {
    pub(crate) fn pattern(input: impl Into<String>) -> Self {
        ParseError::PatternMismatch {
            input: input.into(),
        }
    }

    pub(crate) fn out_of_range(input: impl Into<String>) -> Self {
        ParseError::OutOfRange {
            input: input.into(),
        }
    }
}

/// Error from name-based lookups in [`catalog`](crate::catalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown domain `{name}`")]
    UnknownDomain { name: String },

    #[error("unknown table `{name}` for {domain}")]
    UnknownTable { domain: &'static str, name: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_symbol_names_the_label() {
        let e = ParseError::UnrecognizedSymbol {
            symbol: "DNE".to_string(),
        };
        assert_eq!(e.to_string(), "unrecognized symbol: `DNE`");
    }

    #[test]
    fn invalid_number_keeps_source() {
        let source = "1..5".parse::<f64>().unwrap_err();
        let e = ParseError::InvalidNumber {
            literal: "1..5".to_string(),
            source,
        };
        assert!(e.to_string().starts_with("invalid number `1..5`"));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn catalog_error_wraps_parse_error_transparently() {
        let e: CatalogError = ParseError::pattern("BAD").into();
        assert_eq!(e.to_string(), "value does not match pattern: `BAD`");
    }
}
