//! Derived metrics: per-product revenue, opportunity score, dataset summary.

use serde::Serialize;

use crate::dataset::ProductRecord;

/// Revenue (GMV contribution) for one product.
///
/// Inputs come from the normalizer, so both are finite and ≥ 0 and the
/// product is too.
pub fn revenue(price: f64, sales: f64) -> f64 {
    price * sales
}

/// Opportunity score in [0, 100]: revenue relative to the dataset maximum.
///
/// When `max_revenue` is 0 (every product parsed to zero) all scores are 0
/// rather than dividing by zero.
pub fn opportunity_score(revenue: f64, max_revenue: f64) -> f64 {
    if max_revenue > 0.0 {
        (revenue / max_revenue) * 100.0
    } else {
        0.0
    }
}

/// Convert a CNY amount to USD for display.
///
/// `cny_per_usd` comes from config, not a feed; a zero or negative rate
/// degrades to 0.0 rather than dividing by zero, like every other bad
/// input in this pipeline.
pub fn cny_to_usd(amount: f64, cny_per_usd: f64) -> f64 {
    if cny_per_usd > 0.0 {
        amount / cny_per_usd
    } else {
        0.0
    }
}

/// Headline figures for a ranked dataset (the dashboard metric row).
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    /// Total GMV: sum of per-product revenues
    pub gmv: f64,
    /// GMV after the platform fee is deducted
    pub net_gmv: f64,
    /// Sum of normalized sales counts
    pub total_sales: f64,
    /// Number of products in the ranked set
    pub product_count: usize,
    /// Mean normalized price (0 when the set is empty)
    pub avg_price: f64,
}

impl DatasetSummary {
    /// Compute headline figures over a set of records.
    ///
    /// `fee_rate` is the platform's cut (e.g. 0.05 for 5%), applied only to
    /// the net line — gross GMV stays untouched.
    pub fn compute(records: &[ProductRecord], fee_rate: f64) -> Self {
        let gmv: f64 = records.iter().map(|r| r.revenue()).sum();
        let total_sales: f64 = records.iter().map(|r| r.sales).sum();
        let avg_price = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.price).sum::<f64>() / records.len() as f64
        };

        DatasetSummary {
            gmv,
            net_gmv: gmv * (1.0 - fee_rate),
            total_sales,
            product_count: records.len(),
            avg_price,
        }
    }
}
