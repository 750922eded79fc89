//! Best-effort normalization of locale-messy spreadsheet cells into numbers.
//!
//! Seller exports mix currency symbols, thousands separators, and CJK unit
//! suffixes in the same column ("$1,234", "3.5w", "12k", "¥99", "N/A").
//! Anything unparseable degrades to 0.0 so one bad cell never blocks the
//! rest of the sheet.

use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled regex for numeric extraction (compile once, use many times)
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(\.\d+)?)").expect("Invalid number regex pattern")
});

/// Currency symbols and separators stripped before numeric extraction.
const STRIP_CHARS: &[char] = &['$', '¥', '£', '€', ',', '，'];

/// Outcome of parsing one cell.
///
/// `matched` distinguishes a genuine zero ("0") from a cell that contained
/// no number at all ("N/A") — both normalize to 0.0, but callers that want
/// to surface defaulted rows can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed {
    pub value: f64,
    pub matched: bool,
}

impl Parsed {
    fn unmatched() -> Self {
        Parsed { value: 0.0, matched: false }
    }
}

/// Parse a raw cell into a quantity, honoring currency symbols, thousands
/// separators, and unit suffixes (万/w = ×10 000, k = ×1 000).
///
/// Suffixes are checked in priority order since a cell carries at most one
/// magnitude: 万/w wins over k when both appear.
pub fn parse_quantity(raw: &str) -> Parsed {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Parsed::unmatched();
    }

    let mut s: String = trimmed
        .chars()
        .filter(|c| !STRIP_CHARS.contains(c))
        .collect();

    let lower = s.to_lowercase();
    let multiplier = if lower.contains('万') || lower.contains('w') {
        s.retain(|c| c != '万' && c != 'w' && c != 'W');
        10_000.0
    } else if lower.contains('k') {
        s.retain(|c| c != 'k' && c != 'K');
        1_000.0
    } else {
        1.0
    };

    match NUMBER_RE.find(&s) {
        Some(m) => match m.as_str().parse::<f64>() {
            Ok(n) if n.is_finite() => Parsed { value: n * multiplier, matched: true },
            _ => Parsed::unmatched(),
        },
        None => Parsed::unmatched(),
    }
}

/// Normalize an optional cell to a finite, non-negative float.
///
/// Missing cells and parse failures both yield 0.0 — callers rely on this
/// never producing NaN and never erroring.
pub fn normalize(raw: Option<&str>) -> f64 {
    match raw {
        Some(s) => parse_quantity(s).value,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separator() {
        assert_eq!(normalize(Some("1,234")), 1234.0);
        assert_eq!(normalize(Some("1，234")), 1234.0);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(normalize(Some("¥99")), 99.0);
        assert_eq!(normalize(Some("$10")), 10.0);
        assert_eq!(normalize(Some("£5.50")), 5.5);
        assert_eq!(normalize(Some("€7")), 7.0);
        // Symbol stripping is a no-op on the numeric result
        assert_eq!(normalize(Some("$42.5")), normalize(Some("42.5")));
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(normalize(Some("3.5w")), 35000.0);
        assert_eq!(normalize(Some("2万")), 20000.0);
        assert_eq!(normalize(Some("12k")), 12000.0);
        assert_eq!(normalize(Some("12K")), 12000.0);
    }

    #[test]
    fn test_symbol_and_suffix_together() {
        assert_eq!(normalize(Some("$1.2k")), 1200.0);
        assert_eq!(normalize(Some("¥3w")), 30000.0);
    }

    #[test]
    fn test_suffix_priority() {
        // 万/w outranks k when both appear
        assert_eq!(normalize(Some("1wk")), 10000.0);
    }

    #[test]
    fn test_unparseable_degrades_to_zero() {
        assert_eq!(normalize(Some("N/A")), 0.0);
        assert_eq!(normalize(Some("")), 0.0);
        assert_eq!(normalize(Some("   ")), 0.0);
        assert_eq!(normalize(None), 0.0);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(normalize(Some("42")), 42.0);
        assert_eq!(normalize(Some("0")), 0.0);
        assert_eq!(normalize(Some("  19.99  ")), 19.99);
    }

    #[test]
    fn test_matched_flag_distinguishes_true_zero() {
        let zero = parse_quantity("0");
        assert_eq!(zero.value, 0.0);
        assert!(zero.matched);

        let unparsed = parse_quantity("sold out");
        assert_eq!(unparsed.value, 0.0);
        assert!(!unparsed.matched);
    }

    #[test]
    fn test_idempotent_renormalization() {
        for input in ["$1.2k", "3.5w", "1,234", "¥99", "N/A", "42"] {
            let once = normalize(Some(input));
            let twice = normalize(Some(&once.to_string()));
            assert_eq!(once, twice, "re-normalizing {:?} changed the value", input);
        }
    }

    #[test]
    fn test_result_is_finite() {
        for input in ["", "inf", "NaN", "9e999", "$,,k"] {
            let v = normalize(Some(input));
            assert!(v.is_finite() && v >= 0.0, "{:?} produced {}", input, v);
        }
    }
}
