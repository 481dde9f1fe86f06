//! Units: an ordered table of symbols over one magnitude type.
//! Formats a magnitude greedily into mixed units (`1kg1hg1dag`) and parses that notation back.

use std::collections::HashMap;

use crate::error::{ParseError, Result};
use crate::lexer::{self, Literal};
use crate::magnitude::Magnitude;
use crate::options::FormatOptions;

/// A single table entry: magnitude and its labels. The first label is used when formatting.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Symbol<T> {
    magnitude: T,
    labels: Vec<String>,
}

impl<T: Magnitude> Symbol<T> {
    pub fn new(magnitude: T, label: impl Into<String>) -> Self {
        Self {
            magnitude,
            labels: vec![label.into()],
        }
    }

    /// Add an alternative label accepted on input.
    pub fn alias(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn magnitude(&self) -> T {
        self.magnitude
    }

    /// Preferred label.
    pub fn label(&self) -> &str {
        &self.labels[0]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// A unit of measure: symbols sorted ascending by magnitude.
///
/// The smallest entry is the base symbol; it renders the fractional remainder.
/// Immutable after construction and safe to share across threads.
///
/// # Collisions
/// - Parsing: a label present on several entries resolves to the smallest magnitude;
///   among equal magnitudes the entry declared first wins.
/// - Formatting: among entries of equal magnitude the entry declared last is emitted.
#[derive(Clone, Debug)]
pub struct Unit<T> {
    symbols: Vec<Symbol<T>>,
    index: HashMap<String, T>,
    literal: Literal,
}

impl<T: Magnitude> Unit<T> {
    /// Build a table from entries in any order.
    ///
    /// Entries with a non-positive magnitude or a blank label are dropped: neither could be
    /// read back after formatting.
    pub fn new(symbols: impl IntoIterator<Item = Symbol<T>>) -> Self {
        let mut symbols: Vec<Symbol<T>> = symbols
            .into_iter()
            .filter(|s| {
                if s.magnitude <= T::ZERO {
                    tracing::warn!(label = s.label(), "dropping symbol with non-positive magnitude");
                    return false;
                }
                if s.labels.iter().any(|l| l.trim().is_empty()) {
                    tracing::warn!(magnitude = ?s.magnitude, "dropping symbol with blank label");
                    return false;
                }
                true
            })
            .collect();
        // Vec::sort_by_key is stable; equal magnitudes keep declaration order.
        symbols.sort_by_key(|s| s.magnitude);
        let index = build_index(&symbols);
        tracing::debug!(symbols = symbols.len(), labels = index.len(), "unit table built");
        Self {
            symbols,
            index,
            literal: Literal::default(),
        }
    }

    /// Concatenate several tables into one parse table (e.g. SI and imperial).
    ///
    /// The result accepts decimal literals if any input table does.
    pub fn merge<'a>(tables: impl IntoIterator<Item = &'a Unit<T>>) -> Self {
        let mut literal = Literal::Integer;
        let mut any = false;
        let mut symbols = Vec::new();
        for table in tables {
            any = true;
            if table.literal == Literal::Decimal {
                literal = Literal::Decimal;
            }
            symbols.extend(table.symbols.iter().cloned());
        }
        let merged = Self::new(symbols);
        if any {
            merged.with_literal(literal)
        } else {
            merged
        }
    }

    /// Restrict or relax the numeric literals accepted by [Unit::parse].
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = literal;
        self
    }

    pub fn literal(&self) -> Literal {
        self.literal
    }

    pub fn symbols(&self) -> &[Symbol<T>] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Smallest entry; fallback scale for remainders.
    pub fn base(&self) -> Option<&Symbol<T>> {
        self.symbols.first()
    }

    pub fn largest(&self) -> Option<&Symbol<T>> {
        self.symbols.last()
    }

    /// Magnitude for a label, as used by [Unit::parse].
    pub fn lookup(&self, label: &str) -> Option<T> {
        self.index.get(label).copied()
    }

    /// Format with default options (fixed-point, shortest remainder).
    pub fn format(&self, value: T) -> String {
        self.format_with(value, &FormatOptions::default())
    }

    /// Render `value` as descending whole-unit counts followed by a fractional base remainder.
    ///
    /// Zero (or an empty table) renders as the empty string. Negative values render as `-`
    /// followed by the rendering of their absolute value.
    pub fn format_with(&self, value: T, options: &FormatOptions) -> String {
        let Some(base) = self.base() else {
            return String::new();
        };
        let mut remaining = value.to_i128();
        if remaining == 0 {
            return String::new();
        }

        let mut out = String::new();
        if remaining < 0 {
            out.push('-');
            remaining = -remaining;
        }

        for symbol in self.symbols[1..].iter().rev() {
            if remaining == 0 {
                break;
            }
            let size = symbol.magnitude.to_i128();
            if remaining >= size {
                out.push_str(&(remaining / size).to_string());
                out.push_str(symbol.label());
                remaining %= size;
            }
        }

        if remaining > 0 {
            let fraction = remaining as f64 / base.magnitude.to_i128() as f64;
            out.push_str(&options.render(fraction));
            out.push_str(base.label());
        }
        out
    }

    /// Parse one or more `<number><symbol>` tokens, summing their magnitudes.
    ///
    /// Surrounding whitespace is ignored and a leading `+` or `-` applies to the whole sum.
    /// `""` and `"0"` are zero. Each token contributes `number * magnitude`, truncated.
    pub fn parse(&self, input: &str) -> Result<T> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(T::ZERO);
        }
        let (negative, body) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if body == "0" {
            return Ok(T::ZERO);
        }

        let mut sum: i128 = 0;
        for token in lexer::tokenize(body, self.literal)? {
            let label = token.symbol.trim();
            let size = self
                .lookup(label)
                .ok_or_else(|| ParseError::UnrecognizedSymbol {
                    symbol: label.to_string(),
                })?;
            let count: f64 = token
                .literal
                .parse()
                .map_err(|source| ParseError::InvalidNumber {
                    literal: token.literal.to_string(),
                    source,
                })?;
            // `as` saturates; anything that large fails the range check below.
            let contribution = (count * size.to_i128() as f64).trunc() as i128;
            tracing::trace!(literal = token.literal, symbol = label, contribution, "token");
            sum = sum
                .checked_add(contribution)
                .ok_or_else(|| ParseError::out_of_range(input))?;
        }

        let signed = if negative { -sum } else { sum };
        T::from_i128(signed).ok_or_else(|| ParseError::out_of_range(input))
    }
}

impl<T: Magnitude> FromIterator<Symbol<T>> for Unit<T> {
    fn from_iter<I: IntoIterator<Item = Symbol<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Label → magnitude, written from the largest entry down so smaller magnitudes win.
fn build_index<T: Magnitude>(symbols: &[Symbol<T>]) -> HashMap<String, T> {
    let mut index = HashMap::new();
    for symbol in symbols.iter().rev() {
        for label in &symbol.labels {
            if let Some(previous) = index.insert(label.clone(), symbol.magnitude) {
                tracing::debug!(
                    label = label.as_str(),
                    shadowed = ?previous,
                    kept = ?symbol.magnitude,
                    "label collision"
                );
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NumberStyle;

    const B: i64 = 1;
    const KIB: i64 = 1 << 10;
    const MIB: i64 = 1 << 20;

    fn binary() -> Unit<i64> {
        // Deliberately out of order.
        Unit::new([
            Symbol::new(MIB, "MiB"),
            Symbol::new(B, "B"),
            Symbol::new(KIB, "KiB"),
        ])
    }

    #[test]
    fn construction_sorts_ascending() {
        let unit = binary();
        let sizes: Vec<i64> = unit.symbols().iter().map(|s| s.magnitude()).collect();
        assert_eq!(sizes, [B, KIB, MIB]);
        assert_eq!(unit.base().unwrap().label(), "B");
        assert_eq!(unit.largest().unwrap().label(), "MiB");
    }

    #[test]
    fn non_positive_magnitudes_are_dropped() {
        let unit = Unit::new([Symbol::new(0i64, "zero"), Symbol::new(-5, "neg"), Symbol::new(1, "B")]);
        assert_eq!(unit.len(), 1);
        assert_eq!(unit.lookup("zero"), None);
    }

    #[test]
    fn blank_labels_are_dropped() {
        let unit = Unit::new([
            Symbol::new(1i64, "B"),
            Symbol::new(1000, ""),
            Symbol::new(1024, "KiB").alias(" "),
        ]);
        assert_eq!(unit.len(), 1);
        assert_eq!(unit.format(1000), "1000B");
        assert_eq!(unit.parse(&unit.format(1000)).unwrap(), 1000);
    }

    #[test]
    fn format_zero_and_empty() {
        assert_eq!(binary().format(0), "");
        assert_eq!(Unit::<i64>::new([]).format(42), "");
        assert!(Unit::<i64>::new([]).is_empty());
    }

    #[test]
    fn format_descends_without_repeats() {
        let unit = binary();
        assert_eq!(unit.format(MIB), "1MiB");
        assert_eq!(unit.format(MIB + 3 * KIB + 7), "1MiB3KiB7B");
        assert_eq!(unit.format(2 * MIB + 5), "2MiB5B");
    }

    #[test]
    fn format_fractional_remainder_against_base() {
        let unit = Unit::new([Symbol::new(2i64, "h"), Symbol::new(8, "w")]);
        // 8 + 3 = 1w + 1.5h
        assert_eq!(unit.format(11), "1w1.5h");
        assert_eq!(unit.format(1), "0.5h");
    }

    #[test]
    fn format_with_options_applies_only_to_remainder() {
        let unit = Unit::new([Symbol::new(4i64, "q"), Symbol::new(400, "c")]);
        let opts = FormatOptions::fixed(2);
        assert_eq!(unit.format_with(401, &opts), "1c0.25q");
        assert_eq!(unit.format_with(800, &opts), "2c");
        let sci = FormatOptions::new().style(NumberStyle::Scientific);
        assert_eq!(unit.format_with(1, &sci), "2.5e-1q");
    }

    #[test]
    fn format_negative_prefixes_sign() {
        let unit = binary();
        assert_eq!(unit.format(-(KIB + 1)), "-1KiB1B");
        assert_eq!(unit.parse("-1KiB1B").unwrap(), -(KIB + 1));
    }

    #[test]
    fn format_minimum_value_does_not_overflow() {
        let unit = Unit::new([Symbol::new(1i8, "u"), Symbol::new(100, "h")]);
        assert_eq!(unit.format(i8::MIN), "-1h28u");
        assert_eq!(unit.parse("-1h28u").unwrap(), i8::MIN);
    }

    #[test]
    fn parse_zero_and_empty() {
        let unit = binary();
        assert_eq!(unit.parse("").unwrap(), 0);
        assert_eq!(unit.parse("   ").unwrap(), 0);
        assert_eq!(unit.parse("0").unwrap(), 0);
        assert_eq!(unit.parse("-0").unwrap(), 0);
    }

    #[test]
    fn parse_composite_and_fractional() {
        let unit = binary();
        assert_eq!(unit.parse("1MiB3KiB7B").unwrap(), MIB + 3 * KIB + 7);
        assert_eq!(unit.parse("1.5KiB").unwrap(), KIB + KIB / 2);
        assert_eq!(unit.parse(" 2 KiB ").unwrap(), 2 * KIB);
        assert_eq!(unit.parse("+1B").unwrap(), 1);
    }

    #[test]
    fn parse_truncates_fractional_base() {
        assert_eq!(binary().parse("1.9B").unwrap(), 1);
    }

    #[test]
    fn parse_errors() {
        let unit = binary();
        assert!(matches!(
            unit.parse("100DNE"),
            Err(ParseError::UnrecognizedSymbol { symbol }) if symbol == "DNE"
        ));
        assert!(matches!(unit.parse("BAD"), Err(ParseError::PatternMismatch { .. })));
        assert!(matches!(unit.parse("-"), Err(ParseError::PatternMismatch { .. })));
        assert!(matches!(unit.parse("1..5KiB"), Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn parse_out_of_range() {
        let unit = Unit::new([Symbol::new(1i8, "u"), Symbol::new(100, "h")]);
        assert!(matches!(unit.parse("2h"), Err(ParseError::OutOfRange { .. })));
        assert_eq!(unit.parse("1h27u").unwrap(), 127);
    }

    #[test]
    fn round_trip_every_entry() {
        let unit = binary();
        for symbol in unit.symbols() {
            let text = unit.format(symbol.magnitude());
            assert_eq!(unit.parse(&text).unwrap(), symbol.magnitude(), "{text}");
        }
    }

    #[test]
    fn aliases_parse_but_do_not_format() {
        let unit = Unit::new([Symbol::new(1i64, "μm").alias("um")]);
        assert_eq!(unit.parse("3um").unwrap(), 3);
        assert_eq!(unit.parse("3μm").unwrap(), 3);
        assert_eq!(unit.format(3), "3μm");
    }

    #[test]
    fn duplicate_label_resolves_to_smallest_magnitude() {
        let unit = Unit::new([
            Symbol::new(1024i64, "KB"),
            Symbol::new(1, "B"),
            Symbol::new(1000, "KB"),
        ]);
        assert_eq!(unit.lookup("KB"), Some(1000));
    }

    #[test]
    fn duplicate_magnitude_contract() {
        let unit = Unit::new([
            Symbol::new(1i64, "B"),
            Symbol::new(8, "first"),
            Symbol::new(8, "second").alias("first"),
        ]);
        // Formatting emits the entry declared last.
        assert_eq!(unit.format(8), "1second");
        // Parsing a shared label keeps the entry declared first; both are magnitude 8 here.
        assert_eq!(unit.lookup("first"), Some(8));
        assert_eq!(unit.lookup("second"), Some(8));
    }

    #[test]
    fn merge_sorts_and_accepts_both() {
        let decimal = Unit::new([Symbol::new(1i64, "B"), Symbol::new(1000, "kB")]);
        let iec = Unit::new([Symbol::new(1i64, "B"), Symbol::new(1024, "KiB")]);
        let all = Unit::merge([&decimal, &iec]);
        let sizes: Vec<i64> = all.symbols().iter().map(|s| s.magnitude()).collect();
        assert_eq!(sizes, [1, 1, 1000, 1024]);
        assert_eq!(all.parse("1kB1KiB").unwrap(), 2024);
        assert_eq!(all.literal(), Literal::Decimal);
    }

    #[test]
    fn integer_literal_table() {
        let unit = binary().with_literal(Literal::Integer);
        assert_eq!(unit.parse("3KiB").unwrap(), 3 * KIB);
        assert!(matches!(unit.parse("1.5KiB"), Err(ParseError::PatternMismatch { .. })));
    }

    #[test]
    fn distinct_tables_share_scale() {
        let decimal = Unit::new([Symbol::new(1i64, "B"), Symbol::new(1000, "kB")]);
        let iec = Unit::new([Symbol::new(1i64, "B"), Symbol::new(1024, "KiB")]);
        let value = 2048;
        let (d, b) = (decimal.format(value), iec.format(value));
        assert_eq!(d, "2kB48B");
        assert_eq!(b, "2KiB");
        assert_eq!(decimal.parse(&d).unwrap(), value);
        assert_eq!(iec.parse(&b).unwrap(), value);
    }

    #[test]
    fn collected_from_iterator() {
        let unit: Unit<i32> = [(1, "s"), (60, "m"), (3600, "h")]
            .into_iter()
            .map(|(m, l)| Symbol::new(m, l))
            .collect();
        assert_eq!(unit.format(3725), "1h2m5s");
        assert_eq!(unit.parse("1h30m").unwrap(), 5400);
    }
}
