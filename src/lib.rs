//! Provics Match - skill-based opportunity recommendations for the Provics platform
//!
//! This library ranks industrial visits, internships and mentorships for a
//! student by how much of each opportunity's vocabulary the student's skill
//! profile covers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{KeywordExtractor, Matcher, RankResult, ScoringStrategy};
pub use self::models::{Opportunity, ScoredOpportunity, StudentProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let (score, _) = Matcher::default().similarity(Some("rust"), Some("rust systems"));
        assert_eq!(score, 50.0);
    }
}
