//! tkscout - TikTok Shop product-export analyzer CLI

use clap::Parser;

use tkscout::cli::{Cli, Commands, ConfigCommands};
use tkscout::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            title_col,
            price_col,
            sales_col,
            image_col,
            top,
            sort,
            price_min,
            price_max,
            sales_min,
            json,
        } => commands::cmd_analyze(
            &file, title_col, price_col, sales_col, image_col,
            top, sort, price_min, price_max, sales_min, json,
        ),

        Commands::Keywords { file, row, title, top_k, json } => {
            commands::cmd_keywords(file, row, title, top_k, json)
        }

        Commands::Draft { title, file, row, json } => {
            commands::cmd_draft(title, file, row, json)
        }

        Commands::Columns { file } => commands::cmd_columns(&file),

        Commands::Config(ConfigCommands::Show) => commands::cmd_config_show(),
        Commands::Config(ConfigCommands::Path) => commands::cmd_config_path(),

        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
