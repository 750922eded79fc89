//! The analyze command: full normalize → rank → summarize pipeline.

use colored::Colorize;
use serde::Serialize;

use tkscout::columns::ColumnMap;
use tkscout::config::Config;
use tkscout::dataset::{ProductRecord, RankedDataset};
use tkscout::error::Result;
use tkscout::ingest::SheetData;
use tkscout::metrics::{cny_to_usd, DatasetSummary};
use tkscout::rank::{self, FilterCriteria, SortKey};

use super::truncate_title;

/// One ranked row flattened for output (derived metrics included).
#[derive(Serialize)]
struct RankedRow<'a> {
    rank: usize,
    title: &'a str,
    price: f64,
    sales: f64,
    revenue: f64,
    score: f64,
    price_parsed: bool,
    sales_parsed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    summary: &'a DatasetSummary,
    /// Gross GMV converted at the configured CNY/USD rate, for ¥ exports
    gmv_usd: f64,
    dropped_rows: usize,
    filtered_out: usize,
    records: Vec<RankedRow<'a>>,
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_analyze(
    file: &str,
    title_col: Option<String>,
    price_col: Option<String>,
    sales_col: Option<String>,
    image_col: Option<String>,
    top: Option<usize>,
    sort: SortKey,
    price_min: Option<f64>,
    price_max: Option<f64>,
    sales_min: Option<f64>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let sheet = SheetData::from_path(file)?;
    let columns = ColumnMap::guess_with_overrides(
        &sheet.headers,
        title_col.as_deref(),
        price_col.as_deref(),
        sales_col.as_deref(),
        image_col.as_deref(),
    )?;

    let dataset = RankedDataset::build(&sheet, &columns);

    let criteria = FilterCriteria::new(
        price_min.unwrap_or(0.0),
        price_max.unwrap_or(f64::MAX),
        sales_min.unwrap_or(0.0),
    );
    let filtered = rank::filter(&dataset.records, &criteria);
    let filtered_out = dataset.len() - filtered.len();

    let n = top.unwrap_or(config.top_n);
    let ranked = rank::top_n(&filtered, sort, n);

    let summary = DatasetSummary::compute(&filtered, config.platform_fee_rate);
    let max_revenue = filtered
        .iter()
        .map(|r| r.revenue())
        .fold(0.0, f64::max);

    if json {
        let rows: Vec<RankedRow> = ranked
            .iter()
            .enumerate()
            .map(|(i, r)| ranked_row(i, r, max_revenue))
            .collect();
        let report = AnalyzeReport {
            summary: &summary,
            gmv_usd: cny_to_usd(summary.gmv, config.usd_cny_rate),
            dropped_rows: dataset.dropped_rows,
            filtered_out,
            records: rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&summary, config.usd_cny_rate);
    if dataset.dropped_rows > 0 {
        println!(
            "  {} row(s) skipped (no usable price or empty title)",
            dataset.dropped_rows
        );
    }
    if filtered_out > 0 {
        println!("  {} row(s) excluded by filters", filtered_out);
    }
    println!();

    if ranked.is_empty() {
        println!("No products matched.");
        return Ok(());
    }

    let label = match sort {
        SortKey::Revenue => "revenue",
        SortKey::Sales => "sales",
    };
    println!("{}", format!("Top {} by {}:", ranked.len(), label).bold());
    for (i, record) in ranked.iter().enumerate() {
        print_record(i, record, max_revenue);
    }

    Ok(())
}

fn ranked_row(index: usize, record: &ProductRecord, max_revenue: f64) -> RankedRow<'_> {
    RankedRow {
        rank: index + 1,
        title: &record.title,
        price: record.price,
        sales: record.sales,
        revenue: record.revenue(),
        score: record.score(max_revenue),
        price_parsed: record.price_parsed,
        sales_parsed: record.sales_parsed,
        image_url: record.image_url.as_deref(),
    }
}

fn print_summary(summary: &DatasetSummary, usd_cny_rate: f64) {
    println!("{}", "Market overview".bold());
    println!("  GMV:        ${:.0}", summary.gmv);
    println!(
        "  GMV (¥→$):  ${:.0} if the price column is CNY, at {} CNY/USD",
        cny_to_usd(summary.gmv, usd_cny_rate),
        usd_cny_rate,
    );
    println!("  Net GMV:    ${:.0} (after platform fee)", summary.net_gmv);
    println!("  Units sold: {:.0}", summary.total_sales);
    println!("  Products:   {}", summary.product_count);
    println!("  Avg price:  ${:.2}", summary.avg_price);
}

fn print_record(index: usize, record: &ProductRecord, max_revenue: f64) {
    let rank = format!("#{}", index + 1);
    let title = truncate_title(&record.title, 60);
    let flag = if record.sales_parsed { "" } else { " (sales cell unparsed)" };
    println!(
        "  {} {} — ${:.0} revenue, score {:.0}",
        rank.cyan().bold(),
        title,
        record.revenue(),
        record.score(max_revenue),
    );
    println!(
        "     price ${:.2} × {:.0} sold{}",
        record.price,
        record.sales,
        flag.dimmed(),
    );
}
