//! Transcript ranker: rank academic transcripts against recruiter filters

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;
use transcript_ranker::cli::{self, Cli, Commands, ConfigAction};
use transcript_ranker::config::{Config, OutputFormat};
use transcript_ranker::error::{Result, TranscriptRankerError};
use transcript_ranker::input::InputManager;
use transcript_ranker::output::{ConsoleFormatter, JsonFormatter, OutputFormatter, RankingReport};
use transcript_ranker::processing::{FilterConfig, RankingPipeline};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            files,
            subject,
            min_semester,
            career,
            min_grade,
            output,
            save,
        } => {
            info!("Starting transcript ranking");

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format)
                    .map_err(TranscriptRankerError::InvalidInput)?,
                None => config.output.format.clone(),
            };

            let filter = FilterConfig {
                subject,
                min_semester,
                career,
                min_grade,
            };

            let (texts, skipped) = collect_document_texts(&files, &config).await;
            let processed = texts.len();

            let pipeline = RankingPipeline::new(&config);
            let results = pipeline.rank(&texts, &filter);
            info!(
                "{} of {} documents produced eligible candidates",
                results.len(),
                processed
            );

            let report = RankingReport::new(filter, results, processed, skipped);
            let rendered = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(config.output.color_output).format_report(&report)?
                }
                OutputFormat::Json => JsonFormatter::new(true).format_report(&report)?,
            };

            match save {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    println!("Saved results to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    TranscriptRankerError::Configuration(format!(
                        "Failed to serialize config: {}",
                        e
                    ))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::reset()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

/// Extract text from every supported document, skipping files that are
/// unsupported or unreadable. One bad file never aborts the batch.
async fn collect_document_texts(files: &[PathBuf], config: &Config) -> (Vec<String>, usize) {
    let mut input_manager = InputManager::new().with_cache(config.extraction.enable_caching);
    let mut texts = Vec::new();
    let mut skipped = 0;

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for path in files {
        progress.set_message(path.display().to_string());

        if cli::validate_file_extension(path, &["docx", "txt"]).is_err() {
            warn!("Skipping unsupported file: {}", path.display());
            skipped += 1;
            progress.inc(1);
            continue;
        }

        match input_manager.extract_text(path).await {
            Ok(text) => texts.push(text),
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                skipped += 1;
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    (texts, skipped)
}
