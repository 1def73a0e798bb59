//! CLI interface for the transcript ranker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "transcript-ranker")]
#[command(about = "Rank academic transcripts against recruiter filters")]
#[command(
    long_about = "Extract candidate fields from transcript documents and rank eligible candidates by a weighted suitability score"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank transcript documents against a filter
    Rank {
        /// Transcript files to process (DOCX, TXT)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Subject whose grade is evaluated (exact, case-sensitive)
        #[arg(short, long)]
        subject: String,

        /// Minimum semester a candidate must have reached
        #[arg(short = 'm', long, default_value_t = 0)]
        min_semester: u32,

        /// Required career or program (case-insensitive)
        #[arg(short, long)]
        career: String,

        /// Minimum acceptable grade in the subject
        #[arg(short = 'g', long)]
        min_grade: f64,

        /// Output format: console, json (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("JSON").is_ok());
        assert!(parse_output_format("xml").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let docx = PathBuf::from("cv.docx");
        let pdf = PathBuf::from("cv.pdf");

        assert!(validate_file_extension(&docx, &["docx", "txt"]).is_ok());
        assert!(validate_file_extension(&pdf, &["docx", "txt"]).is_err());
    }
}
