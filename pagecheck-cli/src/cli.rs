use std::path::PathBuf;

use clap::Parser;

/// Check JSON response bodies against the `paginated response` examples.
#[derive(Debug, Parser)]
#[command(name = "pagecheck", version)]
pub struct CliArgs {
    /// JSON documents to check. Use `-` or omit to read from stdin.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,
    /// JSON pointer to the paginated object inside each document
    /// (e.g. /data for an `{"data": {...}}` envelope)
    #[arg(long, env = "PAGECHECK_POINTER", value_parser = parser::parse_json_pointer)]
    pub pointer: Option<String>,
    /// Report format
    #[arg(long, env = "PAGECHECK_FORMAT", default_value_t = OutputFormat::Text, value_parser = parser::parse_output_format)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

mod parser {
    use std::str::FromStr;

    use strum::VariantNames;

    use super::OutputFormat;

    pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
        let values = OutputFormat::VARIANTS.join(", ");
        OutputFormat::from_str(s).map_err(|_| format!("Invalid format {s}. Possible values: [{values}]"))
    }

    pub fn parse_json_pointer(s: &str) -> Result<String, String> {
        if s.is_empty() || s.starts_with('/') {
            Ok(s.to_string())
        } else {
            Err(format!("Invalid JSON pointer {s}. A pointer must be empty or start with '/'"))
        }
    }
}
