//! Result presentation

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter, RankingReport};
