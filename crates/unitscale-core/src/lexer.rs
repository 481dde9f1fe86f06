//! Token grammar for unit strings: one or more `<number><symbol>` pairs, e.g. `1kg1hg1dag`.
//!
//! A symbol is 1 to 6 characters drawn from letters, spaces, `"` and `'`, so `fl oz`,
//! `μm` and the inch/foot marks are all valid. Symbols are returned untrimmed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, Result};

/// Which numeric literals a table accepts before each symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Literal {
    /// Digits with an optional decimal part (`1`, `1.5`, `.5`).
    #[default]
    Decimal,
    /// Digits only.
    Integer,
}

static DECIMAL_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:[0-9.]+[\p{L} "']{1,6})+$"#).expect("valid decimal expression regex")
});
static DECIMAL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<literal>[0-9.]+)(?P<symbol>[\p{L} "']{1,6})"#)
        .expect("valid decimal token regex")
});
static INTEGER_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:[0-9]+[\p{L} "']{1,6})+$"#).expect("valid integer expression regex")
});
static INTEGER_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<literal>[0-9]+)(?P<symbol>[\p{L} "']{1,6})"#)
        .expect("valid integer token regex")
});

impl Literal {
    fn expr(self) -> &'static Regex {
        match self {
            Literal::Decimal => &*DECIMAL_EXPR,
            Literal::Integer => &*INTEGER_EXPR,
        }
    }

    fn token(self) -> &'static Regex {
        match self {
            Literal::Decimal => &*DECIMAL_TOKEN,
            Literal::Integer => &*INTEGER_TOKEN,
        }
    }
}

/// One `<number><symbol>` pair borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'input> {
    pub literal: &'input str,
    pub symbol: &'input str,
}

/// Split `input` into tokens. The whole input must match the grammar.
pub fn tokenize(input: &str, literal: Literal) -> Result<Vec<Token<'_>>> {
    if !literal.expr().is_match(input) {
        return Err(ParseError::pattern(input));
    }
    Ok(literal
        .token()
        .captures_iter(input)
        .filter_map(|caps| {
            Some(Token {
                literal: caps.name("literal")?.as_str(),
                symbol: caps.name("symbol")?.as_str(),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &str, literal: Literal) -> Vec<(&str, &str)> {
        tokenize(input, literal)
            .unwrap()
            .into_iter()
            .map(|t| (t.literal, t.symbol))
            .collect()
    }

    #[test]
    fn single_token() {
        assert_eq!(pairs("1.5GiB", Literal::Decimal), [("1.5", "GiB")]);
    }

    #[test]
    fn composite_tokens() {
        assert_eq!(
            pairs("1kg1hg1dag", Literal::Decimal),
            [("1", "kg"), ("1", "hg"), ("1", "dag")]
        );
    }

    #[test]
    fn symbols_with_spaces_marks_and_greek() {
        assert_eq!(pairs("2fl oz", Literal::Decimal), [("2", "fl oz")]);
        assert_eq!(pairs("5'11\"", Literal::Decimal), [("5", "'"), ("11", "\"")]);
        assert_eq!(pairs("3μm", Literal::Decimal), [("3", "μm")]);
        assert_eq!(pairs("1 kg 5 g", Literal::Decimal), [("1", " kg "), ("5", " g")]);
    }

    #[test]
    fn rejects_non_numeric_prefix() {
        assert!(matches!(
            tokenize("BAD", Literal::Decimal),
            Err(ParseError::PatternMismatch { .. })
        ));
    }

    #[test]
    fn rejects_trailing_number_and_long_symbols() {
        assert!(tokenize("1kg5", Literal::Decimal).is_err());
        assert!(tokenize("1abcdefg", Literal::Decimal).is_err());
        assert!(tokenize("10", Literal::Decimal).is_err());
    }

    #[test]
    fn integer_literal_rejects_decimal_point() {
        assert_eq!(pairs("12MB", Literal::Integer), [("12", "MB")]);
        assert!(tokenize("1.5MB", Literal::Integer).is_err());
    }

    #[test]
    fn malformed_decimal_passes_grammar() {
        // "1..5" is shaped like a number; rejecting it is the number parser's job.
        assert_eq!(pairs("1..5kg", Literal::Decimal), [("1..5", "kg")]);
    }
}
