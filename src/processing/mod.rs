//! Core pipeline: field extraction, scoring, and ranking

pub mod extractor;
pub mod ranker;
pub mod record;
pub mod scorer;

pub use extractor::{FieldExtractor, RegexFieldExtractor};
pub use ranker::RankingPipeline;
pub use record::{CandidateRecord, FilterConfig, RankedResult};
pub use scorer::Scorer;
