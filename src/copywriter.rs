//! Copywriting collaborator: drafts listing copy from a title and its
//! extracted keywords.
//!
//! The pipeline never depends on this module — it only ever hands a title
//! and keyword list *in*. Implementations live behind the [`Copywriter`]
//! trait so the CLI-backed one can be swapped for a mock in tests.

use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TkscoutError};

/// Narrow interface to a text-generation backend.
pub trait Copywriter {
    /// Generate text for a prompt. Fails with an upstream error on
    /// CLI/network/quota problems.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// A drafted listing, parsed from the model's JSON response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyDraft {
    /// Punchy listing title suggestion
    pub title: String,
    /// Short product description (2-3 sentences)
    pub description: String,
    /// Bullet-point selling angles
    #[serde(default)]
    pub selling_points: Vec<String>,
}

const LISTING_PROMPT: &str = r#"You are drafting marketing copy for a TikTok Shop listing.

## Product title (from the seller's export)
{{title}}

## High-frequency keywords extracted from the title
{{keywords}}

Write listing copy that leads with the strongest keywords.
Respond ONLY with JSON, no other text:
{
  "title": "improved listing title, under 80 characters",
  "description": "2-3 sentence product description",
  "selling_points": ["angle 1", "angle 2", "angle 3"]
}"#;

/// Render the listing brief from a title and its keyword frequencies.
pub fn build_listing_prompt(title: &str, keywords: &[(String, usize)]) -> String {
    let keyword_lines = if keywords.is_empty() {
        "(none extracted)".to_string()
    } else {
        keywords
            .iter()
            .map(|(token, count)| format!("- {} (x{})", token, count))
            .collect::<Vec<_>>()
            .join("\n")
    };

    LISTING_PROMPT
        .replace("{{title}}", title)
        .replace("{{keywords}}", &keyword_lines)
}

/// Draft listing copy through any [`Copywriter`] backend.
pub fn draft_copy(
    writer: &dyn Copywriter,
    title: &str,
    keywords: &[(String, usize)],
) -> Result<CopyDraft> {
    let prompt = build_listing_prompt(title, keywords);
    let raw = writer.generate(&prompt)?;
    let json_text = strip_code_fencing(&raw);
    serde_json::from_str(&json_text)
        .map_err(|e| TkscoutError::ClaudeFailed(format!("Failed to parse draft response: {}", e)))
}

/// Copywriter backed by the local `claude` CLI.
pub struct ClaudeCli;

impl Copywriter for ClaudeCli {
    fn generate(&self, prompt: &str) -> Result<String> {
        let system_prompt = "You are an e-commerce copywriter. Respond only with valid JSON matching the schema provided. Do not include any text before or after the JSON.";

        let output = Command::new("claude")
            .args([
                "-p",
                "--output-format", "json",
                "--max-turns", "1",
                "--system-prompt", system_prompt,
                prompt,
            ])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TkscoutError::ClaudeFailed(stderr.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let response: serde_json::Value = serde_json::from_str(&stdout)?;

        // Claude CLI's JSON output wraps the actual response in a result field
        response["result"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| TkscoutError::ClaudeFailed("No result in response".into()))
    }
}

/// Check that the Claude CLI is available before attempting a draft
pub fn check_claude_cli() -> Result<()> {
    let output = Command::new("claude").arg("--version").output();
    match output {
        Ok(out) if out.status.success() => Ok(()),
        _ => Err(TkscoutError::ClaudeNotInstalled(
            "`claude` was not found on PATH".into(),
        )),
    }
}

/// Strip markdown code fencing from a string (e.g., ```json ... ```)
fn strip_code_fencing(s: &str) -> String {
    let trimmed = s.trim();

    if let Some(json_start) = trimmed.find("```json") {
        let after_fence = &trimmed[json_start + 7..];
        if let Some(end_fence) = after_fence.find("```") {
            return after_fence[..end_fence].trim().to_string();
        }
        return after_fence.trim().to_string();
    }

    if let Some(stripped) = trimmed.strip_prefix("```") {
        let body = stripped.strip_suffix("```").unwrap_or(stripped);
        return body.trim().to_string();
    }

    trimmed.to_string()
}
