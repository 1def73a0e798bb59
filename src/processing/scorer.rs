//! Suitability scoring and the eligibility gate

use crate::config::ScoringConfig;
use crate::processing::record::{CandidateRecord, FilterConfig};

/// Computes the weighted suitability score and the pass/fail eligibility
/// decision for a candidate record. Both functions are pure: all inputs
/// arrive as parameters and nothing is mutated.
pub struct Scorer {
    weights: ScoringConfig,
}

impl Scorer {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    /// Additive score over independent criteria. The conditions are not
    /// mutually exclusive; each contributes its points whenever it
    /// holds. With default weights the maximum is 100.
    pub fn score(&self, record: &CandidateRecord, filter: &FilterConfig) -> u32 {
        let mut score = 0;

        if record.career.to_lowercase() == filter.career.to_lowercase() {
            score += self.weights.career_points;
        }

        if record.semester >= filter.min_semester {
            score += self.weights.semester_points;
        }

        if let Some(&grade) = record.grades.get(&filter.subject) {
            if grade >= filter.min_grade {
                score += self.weights.grade_points;
                if grade >= self.weights.excellence_threshold {
                    score += self.weights.excellence_bonus;
                }
            }
        }

        score
    }

    /// Hard gate applied before a candidate may appear in output. All
    /// conditions must hold; a high score never compensates for a
    /// failed condition. The subject/grade check intentionally repeats
    /// the scoring criterion.
    pub fn is_eligible(&self, record: &CandidateRecord, filter: &FilterConfig) -> bool {
        record.career.to_lowercase() == filter.career.to_lowercase()
            && record.semester >= filter.min_semester
            && record
                .grades
                .get(&filter.subject)
                .is_some_and(|&grade| grade >= filter.min_grade)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(crate::config::Config::default().scoring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(career: &str, semester: u32, grades: &[(&str, f64)]) -> CandidateRecord {
        CandidateRecord {
            name: "Ana Pérez".to_string(),
            career: career.to_string(),
            semester,
            grades: grades
                .iter()
                .map(|(s, g)| (s.to_string(), *g))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn filter() -> FilterConfig {
        FilterConfig {
            subject: "Cálculo I".to_string(),
            min_semester: 5,
            career: "Ingeniería".to_string(),
            min_grade: 4.0,
        }
    }

    #[test]
    fn test_full_score() {
        let scorer = Scorer::default();
        let record = record("Ingeniería", 6, &[("Cálculo I", 4.7)]);

        assert_eq!(scorer.score(&record, &filter()), 100);
        assert!(scorer.is_eligible(&record, &filter()));
    }

    #[test]
    fn test_career_comparison_ignores_case() {
        let scorer = Scorer::default();
        let record = record("INGENIERÍA", 6, &[("Cálculo I", 4.7)]);

        assert_eq!(scorer.score(&record, &filter()), 100);
        assert!(scorer.is_eligible(&record, &filter()));
    }

    #[test]
    fn test_qualifying_grade_below_excellence_threshold() {
        let scorer = Scorer::default();
        let record = record("Ingeniería", 6, &[("Cálculo I", 4.2)]);

        // 30 career + 20 semester + 40 grade, no excellence bonus
        assert_eq!(scorer.score(&record, &filter()), 90);
    }

    #[test]
    fn test_excellence_bonus_at_threshold() {
        let scorer = Scorer::default();
        let record = record("Ingeniería", 6, &[("Cálculo I", 4.5)]);

        assert_eq!(scorer.score(&record, &filter()), 100);
    }

    #[test]
    fn test_grade_below_minimum_scores_nothing_for_subject() {
        let scorer = Scorer::default();
        let record = record("Ingeniería", 6, &[("Cálculo I", 3.9)]);

        assert_eq!(scorer.score(&record, &filter()), 50);
        assert!(!scorer.is_eligible(&record, &filter()));
    }

    #[test]
    fn test_subject_lookup_is_case_sensitive() {
        let scorer = Scorer::default();
        let record = record("Ingeniería", 6, &[("cálculo i", 4.7)]);

        assert_eq!(scorer.score(&record, &filter()), 50);
        assert!(!scorer.is_eligible(&record, &filter()));
    }

    #[test]
    fn test_criteria_are_independent() {
        let scorer = Scorer::default();

        // Only the semester criterion holds.
        let semester_only = record("Medicina", 8, &[]);
        assert_eq!(scorer.score(&semester_only, &filter()), 20);

        // Only the career criterion holds.
        let career_only = record("Ingeniería", 2, &[]);
        assert_eq!(scorer.score(&career_only, &filter()), 30);
    }

    #[test]
    fn test_score_is_monotonic_in_semester() {
        let scorer = Scorer::default();
        let below = record("Ingeniería", 4, &[("Cálculo I", 4.7)]);
        let at = record("Ingeniería", 5, &[("Cálculo I", 4.7)]);

        assert!(scorer.score(&at, &filter()) >= scorer.score(&below, &filter()));
    }

    #[test]
    fn test_eligibility_requires_every_condition() {
        let scorer = Scorer::default();
        let f = filter();

        let wrong_career = record("Medicina", 6, &[("Cálculo I", 4.7)]);
        let low_semester = record("Ingeniería", 4, &[("Cálculo I", 4.7)]);
        let missing_subject = record("Ingeniería", 6, &[("Física", 4.7)]);
        let low_grade = record("Ingeniería", 6, &[("Cálculo I", 3.0)]);

        assert!(!scorer.is_eligible(&wrong_career, &f));
        assert!(!scorer.is_eligible(&low_semester, &f));
        assert!(!scorer.is_eligible(&missing_subject, &f));
        assert!(!scorer.is_eligible(&low_grade, &f));
    }
}
