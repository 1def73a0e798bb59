//! Data types shared across the extraction and scoring pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured fields recovered from one transcript document.
///
/// Every field degrades to a sentinel default when the document does not
/// carry a recognizable label, so a record always exists for a document
/// even if nothing useful was found in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub career: String,
    pub semester: u32,
    /// Subject name to grade. Grades are always within the valid grade
    /// range; out-of-range numeric matches are dropped at extraction.
    pub grades: HashMap<String, f64>,
}

/// Recruiter-supplied criteria, shared by every document in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Exact subject key to look up (case-sensitive).
    pub subject: String,
    pub min_semester: u32,
    /// Required career, compared case-insensitively.
    pub career: String,
    pub min_grade: f64,
}

/// One entry of the ranked output list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    pub score: u32,
    pub semester: u32,
    pub grade_in_subject: f64,
}
