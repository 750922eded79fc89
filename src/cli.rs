use clap::{Parser, Subcommand, ValueEnum};

use crate::rank::SortKey;

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "tkscout")]
#[command(author, version, about = "Analyze TikTok Shop product exports", long_about = None)]
#[command(after_help = r#"Examples:
  tkscout analyze export.csv                       Rank products by revenue
  tkscout analyze export.csv --top 10 --sort sales Top 10 by units sold
  tkscout analyze export.csv --price-min 5 --price-max 50
  tkscout keywords export.csv --row 0              Keywords for the first row
  tkscout draft --title "Cute Summer Dress 2Pcs"   Draft listing copy via AI

Quick Start:
  1. Export your product sheet as CSV
  2. tkscout columns export.csv       # check the column mapping
  3. tkscout analyze export.csv
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize, rank, and summarize a product export
    #[command(after_help = r#"Examples:
  tkscout analyze export.csv
  tkscout analyze export.csv --top 10
  tkscout analyze export.csv --sort sales --sales-min 100
  tkscout analyze export.csv --price-col "Unit Price"   Override column guess
  tkscout analyze export.csv --json | jq '.records[0]'
"#)]
    Analyze {
        /// CSV export to analyze
        file: String,

        /// Title column name (guessed from headers if omitted)
        #[arg(long)]
        title_col: Option<String>,

        /// Price column name (guessed from headers if omitted)
        #[arg(long)]
        price_col: Option<String>,

        /// Sales column name (guessed from headers if omitted)
        #[arg(long)]
        sales_col: Option<String>,

        /// Image URL column name (optional passthrough)
        #[arg(long)]
        image_col: Option<String>,

        /// How many top products to show (default from config)
        #[arg(long)]
        top: Option<usize>,

        /// Metric to rank by
        #[arg(long, value_enum, default_value = "revenue")]
        sort: SortKey,

        /// Keep only products priced at or above this
        #[arg(long)]
        price_min: Option<f64>,

        /// Keep only products priced at or below this
        #[arg(long)]
        price_max: Option<f64>,

        /// Keep only products with at least this many sales
        #[arg(long)]
        sales_min: Option<f64>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Extract the high-frequency keywords from one product title
    #[command(after_help = r#"Examples:
  tkscout keywords export.csv --row 0
  tkscout keywords --title "Cute 3Pcs Set for Women 2025"
  tkscout keywords export.csv --row 2 --top-k 5 --json
"#)]
    Keywords {
        /// CSV export to read the title from (omit when using --title)
        file: Option<String>,

        /// Zero-based data row to analyze
        #[arg(long, conflicts_with = "title", requires = "file")]
        row: Option<usize>,

        /// Analyze a literal title instead of a file row
        #[arg(long)]
        title: Option<String>,

        /// How many keywords to show (default from config)
        #[arg(long)]
        top_k: Option<usize>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Draft listing copy for a product via the Claude CLI
    #[command(after_help = r#"Examples:
  tkscout draft --title "Cute Summer Dress"
  tkscout draft --file export.csv --row 0
  tkscout draft --file export.csv --row 0 --json
"#)]
    Draft {
        /// Draft for a literal title
        #[arg(long, conflicts_with_all = ["file", "row"])]
        title: Option<String>,

        /// CSV export to read the title from
        #[arg(long, requires = "row")]
        file: Option<String>,

        /// Zero-based data row to draft for
        #[arg(long)]
        row: Option<usize>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show a file's headers and the guessed column mapping
    Columns {
        /// CSV export to inspect
        file: String,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
