//! Miscellaneous commands: columns, config, completions

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

use tkscout::cli::{Cli, CompletionShell};
use tkscout::columns::ColumnMap;
use tkscout::config::Config;
use tkscout::error::{Result, TkscoutError};
use tkscout::ingest::SheetData;

/// All roles a guessed mapping assigns to one column index. Narrow sheets
/// can map several roles onto the same column, so this is a list, not a
/// single label.
pub(crate) fn roles_for(map: &ColumnMap, idx: usize) -> Vec<&'static str> {
    let mut roles = Vec::new();
    if idx == map.title {
        roles.push("title");
    }
    if idx == map.price {
        roles.push("price");
    }
    if idx == map.sales {
        roles.push("sales");
    }
    if map.image == Some(idx) {
        roles.push("image");
    }
    roles
}

/// Show a file's headers and the guessed role of each
pub fn cmd_columns(file: &str) -> Result<()> {
    let sheet = SheetData::from_path(file)?;
    let map = ColumnMap::guess(&sheet.headers);

    println!("{} ({} data rows)", file.bold(), sheet.rows.len());
    for (idx, header) in sheet.headers.iter().enumerate() {
        let roles = roles_for(&map, idx);
        if roles.is_empty() {
            println!("  [{}] {}", idx, header);
        } else {
            println!(
                "  [{}] {} {}",
                idx,
                header,
                format!("← {}", roles.join(", ")).green()
            );
        }
    }
    println!("\nOverride with --title-col / --price-col / --sales-col / --image-col");
    Ok(())
}

/// Print the effective configuration as TOML
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    let content = toml::to_string_pretty(&config)
        .map_err(|e| TkscoutError::ConfigError(e.to_string()))?;
    print!("{}", content);
    Ok(())
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Generate shell completions to stdout
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tkscout", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_for_distinct_columns() {
        let map = ColumnMap { title: 0, price: 1, sales: 2, image: Some(3) };
        assert_eq!(roles_for(&map, 0), vec!["title"]);
        assert_eq!(roles_for(&map, 1), vec!["price"]);
        assert_eq!(roles_for(&map, 3), vec!["image"]);
        assert!(roles_for(&map, 4).is_empty());
    }

    #[test]
    fn test_roles_for_collapsed_mapping() {
        // A one-column sheet maps every role onto column 0
        let headers = vec!["only".to_string()];
        let map = ColumnMap::guess(&headers);
        assert_eq!(roles_for(&map, 0), vec!["title", "price", "sales"]);
    }
}
