//! Heuristic field extraction from transcript text

use crate::config::ExtractionConfig;
use crate::processing::record::CandidateRecord;
use regex::Regex;
use std::collections::HashMap;

/// Strategy interface for turning raw document text into a candidate
/// record. Implementations must never fail: unrecognized or malformed
/// fields degrade to defaults instead of producing errors, so a stricter
/// or format-specific extractor can be swapped in without touching the
/// scoring side.
pub trait FieldExtractor {
    fn extract(&self, text: &str) -> CandidateRecord;
}

/// Pattern-based extractor for the free-text transcript layout.
///
/// Labeled single-value fields (name, career, semester) appear once per
/// document, so they use anchored label-to-delimiter captures where the
/// first match wins. Subject/grade pairs can appear anywhere and in any
/// number, so they use an unanchored repeating scan; the grade-range
/// check is the only thing separating real grades from other numeric
/// content such as phone numbers, which is an accepted limitation of
/// the heuristic.
pub struct RegexFieldExtractor {
    name_pattern: Regex,
    career_pattern: Regex,
    semester_pattern: Regex,
    grade_pattern: Regex,
    unknown_name: String,
    min_valid_grade: f64,
    max_valid_grade: f64,
}

impl RegexFieldExtractor {
    pub fn new() -> Self {
        Self::with_config(&crate::config::Config::default().extraction)
    }

    pub fn with_config(config: &ExtractionConfig) -> Self {
        let name_pattern =
            Regex::new(r"(?i)nombre[:\s]*([^\n,;]+)").expect("Invalid name regex");

        let career_pattern = Regex::new(r"(?i)(?:carrera|programa)[:\s]*([^\n,;]+)")
            .expect("Invalid career regex");

        let semester_pattern =
            Regex::new(r"(?i)semestre[:\s]*(\d+)").expect("Invalid semester regex");

        // Word sequences may carry Spanish accented vowels and ñ.
        let grade_pattern = Regex::new(r"([A-Za-zÁÉÍÓÚáéíóúÑñ\s]{3,})[:\s]*(\d+\.?\d*)")
            .expect("Invalid grade regex");

        Self {
            name_pattern,
            career_pattern,
            semester_pattern,
            grade_pattern,
            unknown_name: config.unknown_name.clone(),
            min_valid_grade: config.min_valid_grade,
            max_valid_grade: config.max_valid_grade,
        }
    }

    fn extract_name(&self, text: &str) -> String {
        self.name_pattern
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| self.unknown_name.clone())
    }

    fn extract_career(&self, text: &str) -> String {
        self.career_pattern
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }

    fn extract_semester(&self, text: &str) -> u32 {
        self.semester_pattern
            .captures(text)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }

    fn extract_grades(&self, text: &str) -> HashMap<String, f64> {
        let mut grades = HashMap::new();

        for cap in self.grade_pattern.captures_iter(text) {
            let subject = cap[1].trim().to_string();

            // Malformed numeric tokens are skipped, the scan continues.
            let grade: f64 = match cap[2].parse() {
                Ok(value) => value,
                Err(_) => continue,
            };

            if grade >= self.min_valid_grade && grade <= self.max_valid_grade {
                grades.insert(subject, grade);
            }
        }

        grades
    }
}

impl FieldExtractor for RegexFieldExtractor {
    fn extract(&self, text: &str) -> CandidateRecord {
        CandidateRecord {
            name: self.extract_name(text),
            career: self.extract_career(text),
            semester: self.extract_semester(text),
            grades: self.extract_grades(text),
        }
    }
}

impl Default for RegexFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
