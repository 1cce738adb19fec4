// Core algorithm exports
pub mod filters;
pub mod keywords;
pub mod matcher;
pub mod scoring;

pub use filters::{is_recommendable, select_top_picks};
pub use keywords::{KeywordExtractor, KeywordSet, DEFAULT_MIN_KEYWORD_LENGTH, DEFAULT_STOP_WORDS};
pub use matcher::{Matcher, RankResult};
pub use scoring::{calculate_similarity, coverage, jaccard, ScoreFn, ScoringStrategy};
