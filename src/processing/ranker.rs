//! Batch orchestration: extract, gate, score, and sort

use crate::config::Config;
use crate::processing::extractor::{FieldExtractor, RegexFieldExtractor};
use crate::processing::record::{FilterConfig, RankedResult};
use crate::processing::scorer::Scorer;
use log::debug;

/// Runs the extraction and scoring pipeline over a batch of document
/// texts sharing one filter. Documents are processed strictly in input
/// order, one at a time; each produces an independent record.
pub struct RankingPipeline<E = RegexFieldExtractor> {
    extractor: E,
    scorer: Scorer,
}

impl RankingPipeline<RegexFieldExtractor> {
    pub fn new(config: &Config) -> Self {
        Self {
            extractor: RegexFieldExtractor::with_config(&config.extraction),
            scorer: Scorer::new(config.scoring.clone()),
        }
    }
}

impl<E: FieldExtractor> RankingPipeline<E> {
    /// Build a pipeline around a custom extraction strategy.
    pub fn with_extractor(extractor: E, scorer: Scorer) -> Self {
        Self { extractor, scorer }
    }

    /// Evaluate a single document. Returns `None` when the candidate
    /// fails the eligibility gate, regardless of its score.
    pub fn evaluate(&self, text: &str, filter: &FilterConfig) -> Option<RankedResult> {
        let record = self.extractor.extract(text);
        let score = self.scorer.score(&record, filter);

        if !self.scorer.is_eligible(&record, filter) {
            debug!("Candidate '{}' failed the eligibility gate", record.name);
            return None;
        }

        // The gate guarantees the subject key exists.
        let grade_in_subject = *record.grades.get(&filter.subject)?;

        Some(RankedResult {
            name: record.name,
            score,
            semester: record.semester,
            grade_in_subject,
        })
    }

    /// Rank a batch of document texts. Eligible candidates come back
    /// sorted by score descending; ties keep their input order.
    pub fn rank(&self, texts: &[String], filter: &FilterConfig) -> Vec<RankedResult> {
        let mut results: Vec<RankedResult> = texts
            .iter()
            .filter_map(|text| self.evaluate(text, filter))
            .collect();

        // sort_by is stable, which preserves input order on ties
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}
