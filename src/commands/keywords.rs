//! The keywords command: title tokenization and frequency ranking.

use colored::Colorize;
use serde::Serialize;

use tkscout::columns::ColumnMap;
use tkscout::config::Config;
use tkscout::error::{Result, TkscoutError};
use tkscout::ingest::SheetData;
use tkscout::keywords::{self, StopWords};

/// Resolve the title to analyze: literal flag or file row.
pub(crate) fn resolve_title(
    file: Option<String>,
    row: Option<usize>,
    title: Option<String>,
) -> Result<String> {
    if let Some(t) = title {
        return Ok(t);
    }
    let file = file.ok_or_else(|| {
        TkscoutError::ConfigError("Pass --title, or a file with --row".into())
    })?;
    let row_idx = row.unwrap_or(0);
    let sheet = SheetData::from_path(&file)?;
    let columns = ColumnMap::guess(&sheet.headers);
    let row = sheet.row(row_idx)?;
    Ok(sheet.cell(row, columns.title).unwrap_or_default())
}

#[derive(Serialize)]
struct KeywordReport {
    title: String,
    keywords: Vec<KeywordEntry>,
}

#[derive(Serialize)]
struct KeywordEntry {
    token: String,
    count: usize,
}

pub fn cmd_keywords(
    file: Option<String>,
    row: Option<usize>,
    title: Option<String>,
    top_k: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let title = resolve_title(file, row, title)?;

    let stop_words: StopWords = config.stop_words.iter().map(|s| s.as_str()).collect();
    let tokens = keywords::extract(&title, &stop_words, config.min_token_len);
    let k = top_k.unwrap_or(config.keyword_top_k);
    let ranked = keywords::top_k(&tokens, k);

    if json {
        let report = KeywordReport {
            title,
            keywords: ranked
                .into_iter()
                .map(|(token, count)| KeywordEntry { token, count })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", title.bold());
    if ranked.is_empty() {
        println!("Title too short — no keywords extracted.");
        return Ok(());
    }

    // Bar chart only on a real terminal; plain counts when piped
    let fancy = atty::is(atty::Stream::Stdout);
    let max_count = ranked.first().map(|(_, c)| *c).unwrap_or(1);
    for (token, count) in &ranked {
        if fancy {
            let bar = "█".repeat((count * 20) / max_count.max(1));
            println!("  {:<20} {} {}", token.green(), bar.dimmed(), count);
        } else {
            println!("  {} {}", token, count);
        }
    }

    Ok(())
}
