use crate::core::{
    keywords::KeywordExtractor,
    scoring::{calculate_similarity, score_keywords, ScoreFn, ScoringStrategy},
};
use crate::models::{Opportunity, ScoredOpportunity};

/// Result of ranking a batch of opportunities
#[derive(Debug)]
pub struct RankResult {
    pub recommendations: Vec<ScoredOpportunity>,
    pub total_candidates: usize,
}

/// Recommendation ranker - scores every opportunity against a skills profile
///
/// # Pipeline Stages
/// 1. Keyword extraction for the profile (once per call)
/// 2. Keyword extraction for each opportunity's text bundle
/// 3. Scoring with the configured strategy
/// 4. Stable sort by score, highest first
///
/// Nothing is filtered out; every input opportunity comes back with a score.
#[derive(Clone)]
pub struct Matcher {
    extractor: KeywordExtractor,
    score_fn: ScoreFn,
}

impl Matcher {
    pub fn new(extractor: KeywordExtractor, strategy: ScoringStrategy) -> Self {
        Self::with_score_fn(extractor, strategy.score_fn())
    }

    /// Build a matcher around an arbitrary similarity measure
    pub fn with_score_fn(extractor: KeywordExtractor, score_fn: ScoreFn) -> Self {
        Self { extractor, score_fn }
    }

    pub fn with_defaults() -> Self {
        Self::new(KeywordExtractor::default(), ScoringStrategy::default())
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Score a single profile text against a single opportunity text
    pub fn similarity(
        &self,
        profile_text: Option<&str>,
        opportunity_text: Option<&str>,
    ) -> (f64, Vec<String>) {
        calculate_similarity(
            profile_text,
            opportunity_text,
            &self.extractor,
            self.score_fn,
        )
    }

    /// Rank opportunities for a profile
    ///
    /// # Arguments
    /// * `profile_text` - The student's free-text skills, if any
    /// * `opportunities` - All candidate opportunities
    ///
    /// # Returns
    /// RankResult with every opportunity, sorted by score descending. Equal
    /// scores keep their input order.
    pub fn rank(&self, profile_text: Option<&str>, opportunities: Vec<Opportunity>) -> RankResult {
        let total_candidates = opportunities.len();
        let profile = self.extractor.extract_opt(profile_text);

        let mut recommendations: Vec<ScoredOpportunity> = opportunities
            .into_iter()
            .map(|opportunity| {
                let keywords = self.extractor.extract(&opportunity.match_text());
                let (match_score, matched_keywords) =
                    score_keywords(&profile, &keywords, self.score_fn);

                ScoredOpportunity {
                    opportunity,
                    match_score,
                    matched_keywords,
                }
            })
            .collect();

        // sort_by is stable
        recommendations.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::trace!(
            "Ranked {} opportunities (profile keywords: {})",
            total_candidates,
            profile.len()
        );

        RankResult {
            recommendations,
            total_candidates,
        }
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("extractor", &self.extractor)
            .finish_non_exhaustive()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
