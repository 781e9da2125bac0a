//! Common CLI types shared across commands

use clap::ValueEnum;

/// How listings and single objects are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns (default)
    Table,
    /// Comma-separated values
    Csv,
    /// Raw API objects as JSON
    Json,
    /// Raw API objects as YAML
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Schema download formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaFormat {
    /// Schema content as JSON with sorted keys
    Json,
    /// Spreadsheet-compatible grid, one row per schema node
    Csv,
}
