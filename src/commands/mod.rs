//! Command implementations for tkscout CLI

mod analyze;
mod draft;
mod keywords;
mod misc;

pub use analyze::*;
pub use draft::*;
pub use keywords::*;
pub use misc::*;

/// Truncate a title to max_len characters (not bytes), adding "..." if cut.
/// Export titles are keyword-stuffed and routinely 100+ chars.
pub(crate) fn truncate_title(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", chars[..max_len.saturating_sub(3)].iter().collect::<String>())
    }
}
