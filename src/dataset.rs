//! Product records and the ranked dataset built from one sheet.

use serde::Serialize;

use crate::columns::ColumnMap;
use crate::ingest::SheetData;
use crate::metrics::{self, DatasetSummary};
use crate::normalize::parse_quantity;

/// One spreadsheet row, narrowed to the fields the pipeline needs.
///
/// `price` and `sales` are always finite and ≥ 0 after normalization;
/// revenue and score are computed on demand, never stored, so they can't
/// go stale against the fields they derive from.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub title: String,
    /// Original price cell, kept verbatim for display
    pub raw_price: Option<String>,
    /// Original sales cell, kept verbatim for display
    pub raw_sales: Option<String>,
    pub price: f64,
    pub sales: f64,
    /// False when the price cell held no recognizable number (defaulted to 0)
    pub price_parsed: bool,
    /// False when the sales cell held no recognizable number (defaulted to 0)
    pub sales_parsed: bool,
    pub image_url: Option<String>,
}

impl ProductRecord {
    /// Derived revenue: price × sales. Recomputed on every call.
    pub fn revenue(&self) -> f64 {
        metrics::revenue(self.price, self.sales)
    }

    /// Opportunity score in [0, 100] relative to the dataset maximum.
    pub fn score(&self, max_revenue: f64) -> f64 {
        metrics::opportunity_score(self.revenue(), max_revenue)
    }
}

/// The normalized table for one uploaded sheet.
///
/// Built fresh from a sheet + column mapping and discarded on every rebuild;
/// holds no mutable state across runs.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDataset {
    pub records: Vec<ProductRecord>,
    /// Rows excluded because their price cell didn't normalize above zero
    pub dropped_rows: usize,
}

impl RankedDataset {
    /// Normalize every row of a sheet through the supplied column mapping.
    ///
    /// Rows whose normalized price is 0 (unpriced or unparseable) are
    /// excluded from the ranked set, matching the seller-dashboard behavior
    /// of hiding unlisted items; the count is kept for reporting. Rows with
    /// an empty title are excluded the same way.
    pub fn build(sheet: &SheetData, columns: &ColumnMap) -> Self {
        let mut records = Vec::with_capacity(sheet.rows.len());
        let mut dropped = 0;

        for row in &sheet.rows {
            let title = sheet.cell(row, columns.title).unwrap_or_default();
            let raw_price = sheet.cell(row, columns.price);
            let raw_sales = sheet.cell(row, columns.sales);
            let image_url = columns
                .image
                .and_then(|idx| sheet.cell(row, idx))
                .filter(|s| !s.is_empty());

            let price = raw_price
                .as_deref()
                .map(parse_quantity)
                .unwrap_or_else(|| parse_quantity(""));
            let sales = raw_sales
                .as_deref()
                .map(parse_quantity)
                .unwrap_or_else(|| parse_quantity(""));

            if title.is_empty() || price.value <= 0.0 {
                dropped += 1;
                continue;
            }

            records.push(ProductRecord {
                title,
                raw_price,
                raw_sales,
                price: price.value,
                sales: sales.value,
                price_parsed: price.matched,
                sales_parsed: sales.matched,
                image_url,
            });
        }

        RankedDataset { records, dropped_rows: dropped }
    }

    /// Largest revenue in the set, 0 when empty.
    pub fn max_revenue(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.revenue())
            .fold(0.0, f64::max)
    }

    /// Headline metrics over the ranked set.
    pub fn summary(&self, fee_rate: f64) -> DatasetSummary {
        DatasetSummary::compute(&self.records, fee_rate)
    }

    /// Look up a record by exact title (the "selected product" query).
    pub fn find_by_title(&self, title: &str) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.title == title)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
