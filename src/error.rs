use thiserror::Error;

#[derive(Error, Debug)]
pub enum TkscoutError {
    #[error("CSV read error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Row {0} is out of range (sheet has {1} rows)")]
    RowOutOfRange(usize, usize),

    #[error("Sheet has no data rows")]
    EmptySheet,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Claude CLI not installed: {0}")]
    ClaudeNotInstalled(String),

    #[error("Claude CLI failed: {0}")]
    ClaudeFailed(String),
}

impl TkscoutError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            TkscoutError::ColumnNotFound(_) => Some(
                "Run `tkscout columns <file>` to see the headers and guessed mapping,\nthen pass --title-col / --price-col / --sales-col explicitly"
            ),
            TkscoutError::RowOutOfRange(..) => Some(
                "Row numbers are zero-based data rows (the header row doesn't count)"
            ),
            TkscoutError::EmptySheet => Some(
                "The file parsed but contained no data rows below the header"
            ),
            TkscoutError::ClaudeNotInstalled(_) => Some(
                "Install Claude CLI: curl -fsSL https://claude.ai/install.sh | bash"
            ),
            TkscoutError::CsvError(_) => Some(
                "Export the sheet as CSV (UTF-8); XLSX is not read directly"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TkscoutError>;
