//! Output formatters for ranked results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::record::{FilterConfig, RankedResult};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Everything a formatter needs to present one batch run.
#[derive(Debug, Clone)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub filter: FilterConfig,
    pub results: Vec<RankedResult>,
    pub documents_processed: usize,
    pub documents_skipped: usize,
}

impl RankingReport {
    pub fn new(
        filter: FilterConfig,
        results: Vec<RankedResult>,
        documents_processed: usize,
        documents_skipped: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            filter,
            results,
            documents_processed,
            documents_skipped,
        }
    }
}

pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, bold: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        if bold {
            text.bold().to_string()
        } else {
            text.cyan().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.paint("Candidate ranking", true));
        out.push('\n');
        out.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!(
            "Filter: career '{}', semester >= {}, '{}' >= {:.1}\n",
            report.filter.career,
            report.filter.min_semester,
            report.filter.subject,
            report.filter.min_grade
        ));
        out.push_str(&format!(
            "Documents: {} processed, {} skipped\n\n",
            report.documents_processed, report.documents_skipped
        ));

        if report.results.is_empty() {
            out.push_str("No eligible candidates.\n");
            return Ok(out);
        }

        for (rank, result) in report.results.iter().enumerate() {
            let line = format!(
                "{:>3}. {:<30} score {:>3}  semester {:>2}  grade {:.1}",
                rank + 1,
                result.name,
                result.score,
                result.semester,
                result.grade_in_subject
            );
            out.push_str(&self.paint(&line, false));
            out.push('\n');
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter emitting the flat result list
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&report.results)?
        } else {
            serde_json::to_string(&report.results)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RankingReport {
        RankingReport::new(
            FilterConfig {
                subject: "Cálculo I".to_string(),
                min_semester: 5,
                career: "Ingeniería".to_string(),
                min_grade: 4.0,
            },
            vec![RankedResult {
                name: "Ana Pérez".to_string(),
                score: 100,
                semester: 6,
                grade_in_subject: 4.7,
            }],
            3,
            1,
        )
    }

    #[test]
    fn test_json_is_a_flat_list() {
        let formatter = JsonFormatter::new(false);
        let json = formatter.format_report(&report()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "Ana Pérez");
        assert_eq!(entries[0]["score"], 100);
        assert_eq!(entries[0]["semester"], 6);
        assert_eq!(entries[0]["grade_in_subject"], 4.7);
    }

    #[test]
    fn test_json_empty_results() {
        let formatter = JsonFormatter::new(false);
        let mut empty = report();
        empty.results.clear();

        assert_eq!(formatter.format_report(&empty).unwrap(), "[]");
    }

    #[test]
    fn test_console_lists_candidates() {
        let formatter = ConsoleFormatter::new(false);
        let text = formatter.format_report(&report()).unwrap();

        assert!(text.contains("Ana Pérez"));
        assert!(text.contains("score 100"));
        assert!(text.contains("3 processed, 1 skipped"));
    }
}
