//! Ranking and filtering over normalized product records.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dataset::ProductRecord;

/// Metric to rank by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Revenue,
    Sales,
}

/// Numeric range filters applied as an AND over the dataset.
///
/// All bounds are inclusive. Construct through [`FilterCriteria::new`] so
/// degenerate ranges are repaired up front.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price_min: f64,
    pub price_max: f64,
    pub sales_min: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            price_min: 0.0,
            price_max: f64::MAX,
            sales_min: 0.0,
        }
    }
}

impl FilterCriteria {
    /// Build criteria, repairing degenerate price ranges.
    ///
    /// Reversed bounds are swapped rather than rejected, and a single-value
    /// range (min == max, as produced by a collapsed slider) is widened by
    /// one unit so the inclusive test can still match.
    pub fn new(price_min: f64, price_max: f64, sales_min: f64) -> Self {
        let (mut lo, mut hi) = if price_min > price_max {
            (price_max, price_min)
        } else {
            (price_min, price_max)
        };
        if lo == hi {
            hi = lo + 1.0;
        }
        FilterCriteria {
            price_min: lo,
            price_max: hi,
            sales_min: sales_min.max(0.0),
        }
    }

    /// Test one record against all bounds (AND logic).
    pub fn matches(&self, record: &ProductRecord) -> bool {
        record.price >= self.price_min
            && record.price <= self.price_max
            && record.sales >= self.sales_min
    }
}

/// Keep records passing every bound. Returns a new vector; the input is
/// untouched. An empty result is a valid outcome, not an error.
pub fn filter(records: &[ProductRecord], criteria: &FilterCriteria) -> Vec<ProductRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// Top `n` records by the chosen metric, descending.
///
/// The sort is stable, so records with equal keys keep their input order.
/// Asking for more than the input holds returns the whole sorted input.
pub fn top_n(records: &[ProductRecord], key: SortKey, n: usize) -> Vec<ProductRecord> {
    let mut sorted: Vec<ProductRecord> = records.to_vec();
    // total_cmp keeps the comparator total even though the normalizer
    // already rules NaN out
    match key {
        SortKey::Revenue => sorted.sort_by(|a, b| b.revenue().total_cmp(&a.revenue())),
        SortKey::Sales => sorted.sort_by(|a, b| b.sales.total_cmp(&a.sales)),
    }
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, price: f64, sales: f64) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            raw_price: None,
            raw_sales: None,
            price,
            sales,
            price_parsed: true,
            sales_parsed: true,
            image_url: None,
        }
    }

    #[test]
    fn test_filter_and_logic() {
        let records = vec![
            record("cheap", 5.0, 100.0),
            record("mid", 20.0, 50.0),
            record("pricey", 90.0, 5.0),
        ];
        let criteria = FilterCriteria::new(10.0, 50.0, 10.0);
        let kept = filter(&records, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "mid");
        // Input untouched
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_filter_bounds_inclusive() {
        let records = vec![record("edge", 10.0, 3.0)];
        let criteria = FilterCriteria::new(10.0, 20.0, 3.0);
        assert_eq!(filter(&records, &criteria).len(), 1);
    }

    #[test]
    fn test_filter_empty_input_and_result() {
        let criteria = FilterCriteria::new(0.0, 10.0, 0.0);
        assert!(filter(&[], &criteria).is_empty());

        let records = vec![record("out", 99.0, 1.0)];
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_degenerate_range_widens() {
        let criteria = FilterCriteria::new(15.0, 15.0, 0.0);
        assert!(criteria.price_max > criteria.price_min);
        // The single requested value still matches
        let records = vec![record("exact", 15.0, 1.0)];
        assert_eq!(filter(&records, &criteria).len(), 1);
    }

    #[test]
    fn test_reversed_range_swaps() {
        let criteria = FilterCriteria::new(50.0, 10.0, 0.0);
        assert_eq!(criteria.price_min, 10.0);
        assert_eq!(criteria.price_max, 50.0);
        // Still a real range: out-of-band records are excluded
        let records = vec![record("in", 30.0, 1.0), record("out", 99.0, 1.0)];
        assert_eq!(filter(&records, &criteria).len(), 1);
    }

    #[test]
    fn test_top_n_orders_descending() {
        let records = vec![
            record("a", 1.0, 10.0),
            record("b", 1.0, 30.0),
            record("c", 1.0, 20.0),
        ];
        let top = top_n(&records, SortKey::Revenue, 3);
        let revenues: Vec<f64> = top.iter().map(|r| r.revenue()).collect();
        assert_eq!(revenues, vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_top_n_stable_on_ties() {
        let records = vec![
            record("first", 2.0, 5.0),
            record("second", 5.0, 2.0), // same revenue
            record("loser", 1.0, 1.0),
        ];
        let top = top_n(&records, SortKey::Revenue, 2);
        assert_eq!(top[0].title, "first");
        assert_eq!(top[1].title, "second");
    }

    #[test]
    fn test_top_n_larger_than_input() {
        let records = vec![record("only", 1.0, 1.0)];
        let top = top_n(&records, SortKey::Sales, 10);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_top_n_by_sales() {
        let records = vec![
            record("few", 100.0, 2.0),
            record("many", 1.0, 500.0),
        ];
        let top = top_n(&records, SortKey::Sales, 1);
        assert_eq!(top[0].title, "many");
    }
}
