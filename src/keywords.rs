//! Title keyword extraction: tokenize, drop filler words, count frequencies.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Default stop words for e-commerce listing titles.
///
/// Seller titles are stuffed with filler ("3Pcs Set New Hot ...") that says
/// nothing about the product. Configurable via `stop_words` in the config
/// file; this list is only the fallback.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "for", "and", "with", "the", "in", "of", "a", "to", "pcs", "set", "new", "hot",
];

/// An injectable stop-word set. Matching is exact on lowercased tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopWords(HashSet<String>);

impl Default for StopWords {
    fn default() -> Self {
        DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StopWords(iter.into_iter().map(|s| s.to_lowercase()).collect())
    }
}

impl StopWords {
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(|s| s.to_string()).collect()
    }
}

/// Extract keyword tokens from a listing title.
///
/// Lowercases, splits on alphanumeric runs, then drops stop words, tokens
/// shorter than `min_len` characters, and purely numeric tokens (years,
/// pack counts). An empty or whitespace title yields an empty list.
pub fn extract(text: &str, stop_words: &StopWords, min_len: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| {
            t.chars().count() >= min_len
                && !stop_words.contains(t)
                && !t.chars().all(|c| c.is_ascii_digit())
        })
        .collect()
}

/// Split into lowercase alphanumeric runs (word-boundary tokenization).
/// Runs are further split at digit↔letter transitions so pack counts like
/// "3Pcs" yield the unit word ("pcs"), not an opaque compound token.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    for run in lower.split(|c: char| !c.is_alphanumeric()) {
        if run.is_empty() {
            continue;
        }
        let mut current = String::new();
        let mut last_is_digit: Option<bool> = None;
        for c in run.chars() {
            let is_digit = c.is_ascii_digit();
            if last_is_digit.is_some() && last_is_digit != Some(is_digit) {
                tokens.push(std::mem::take(&mut current));
            }
            current.push(c);
            last_is_digit = Some(is_digit);
        }
        if !current.is_empty() {
            tokens.push(current);
        }
    }
    tokens
}

/// Count token frequencies and return the top `k` as (token, count) pairs.
///
/// Descending by count; ties keep first-appearance order, so the result is
/// deterministic for a given token stream.
pub fn top_k(tokens: &[String], k: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for token in tokens {
        let entry = counts.entry(token.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(token.as_str());
        }
        *entry += 1;
    }

    // Stable sort over first-appearance order preserves tie order
    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|t| (t.to_string(), counts[t]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_drops_fillers_and_numbers() {
        let stops: StopWords = ["for", "set", "pcs"].into_iter().collect();
        let tokens = extract("Cute 3Pcs Set for Women 2025", &stops, 3);
        assert_eq!(tokens, vec!["cute", "women"]);
    }

    #[test]
    fn test_extract_default_stop_words() {
        let stops = StopWords::default();
        let tokens = extract("New Hot Phone Case with Strap", &stops, 3);
        assert_eq!(tokens, vec!["phone", "case", "strap"]);
    }

    #[test]
    fn test_extract_empty_title() {
        let stops = StopWords::default();
        assert!(extract("", &stops, 3).is_empty());
        assert!(extract("   ", &stops, 3).is_empty());
    }

    #[test]
    fn test_extract_min_len() {
        let stops: StopWords = std::iter::empty::<&str>().collect();
        let tokens = extract("go up top", &stops, 3);
        assert_eq!(tokens, vec!["top"]);
    }

    #[test]
    fn test_tokenize_unicode_boundaries() {
        // CJK chars are alphanumeric; punctuation and emoji split
        let tokens = tokenize("夏季 dress‖2pk!");
        assert_eq!(tokens, vec!["夏季", "dress", "2", "pk"]);
    }

    #[test]
    fn test_extract_splits_pack_counts() {
        let stops: StopWords = ["pcs"].into_iter().collect();
        // "3pcs" must surface "pcs" so the stop list can catch it
        let tokens = extract("Towel 3Pcs Bundle", &stops, 3);
        assert_eq!(tokens, vec!["towel", "bundle"]);
    }

    #[test]
    fn test_top_k_counts_and_ties() {
        let tokens: Vec<String> = ["red", "blue", "red", "red", "blue"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            top_k(&tokens, 2),
            vec![("red".to_string(), 3), ("blue".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_k_tie_breaks_by_first_appearance() {
        let tokens: Vec<String> = ["b", "a", "b", "a", "c"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let ranked = top_k(&tokens, 3);
        assert_eq!(ranked[0].0, "b"); // 2 occurrences, seen before "a"
        assert_eq!(ranked[1].0, "a");
        assert_eq!(ranked[2].0, "c");
    }

    #[test]
    fn test_top_k_shorter_than_k() {
        let tokens: Vec<String> = vec!["only".to_string()];
        assert_eq!(top_k(&tokens, 10).len(), 1);
        assert!(top_k(&[], 5).is_empty());
    }
}
