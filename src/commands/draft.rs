//! The draft command: send a title + keywords to the copywriting backend.

use colored::Colorize;

use tkscout::config::Config;
use tkscout::copywriter::{self, ClaudeCli};
use tkscout::error::Result;
use tkscout::keywords::{self, StopWords};

use super::keywords::resolve_title;

pub fn cmd_draft(
    title: Option<String>,
    file: Option<String>,
    row: Option<usize>,
    json: bool,
) -> Result<()> {
    copywriter::check_claude_cli()?;

    let config = Config::load()?;
    let title = resolve_title(file, row, title)?;

    let stop_words: StopWords = config.stop_words.iter().map(|s| s.as_str()).collect();
    let tokens = keywords::extract(&title, &stop_words, config.min_token_len);
    let ranked = keywords::top_k(&tokens, config.keyword_top_k);

    let draft = copywriter::draft_copy(&ClaudeCli, &title, &ranked)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
        return Ok(());
    }

    println!("{}", draft.title.bold());
    println!("\n{}\n", draft.description);
    for point in &draft.selling_points {
        println!("  • {}", point);
    }

    Ok(())
}
