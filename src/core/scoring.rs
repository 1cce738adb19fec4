use serde::Deserialize;

use crate::core::keywords::{sorted_keywords, KeywordExtractor, KeywordSet};

/// Similarity measure over two keyword sets
///
/// Takes the profile keywords first and the opportunity keywords second and
/// returns a ratio in `[0, 1]`.
pub type ScoreFn = fn(&KeywordSet, &KeywordSet) -> f64;

/// Fraction of the opportunity's keywords that the profile also mentions
///
/// Extra profile keywords never lower the score.
pub fn coverage(profile: &KeywordSet, opportunity: &KeywordSet) -> f64 {
    if opportunity.is_empty() {
        return 0.0;
    }

    let common = profile.intersection(opportunity).count();
    common as f64 / opportunity.len() as f64
}

/// Symmetric Jaccard index of the two sets
pub fn jaccard(profile: &KeywordSet, opportunity: &KeywordSet) -> f64 {
    let common = profile.intersection(opportunity).count();
    let union = profile.len() + opportunity.len() - common;

    if union == 0 {
        return 0.0;
    }

    common as f64 / union as f64
}

/// Named scoring strategies selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    #[default]
    Coverage,
    Jaccard,
}

impl ScoringStrategy {
    pub fn score_fn(self) -> ScoreFn {
        match self {
            ScoringStrategy::Coverage => coverage,
            ScoringStrategy::Jaccard => jaccard,
        }
    }
}

/// Convert a `[0, 1]` ratio into a percentage rounded to one decimal place
///
/// Rounding works on the exact decimal expansion of the percentage, with
/// exact halves going to even, so `0.05` (stored slightly above a half)
/// becomes `0.1` while an exact `6.25` becomes `6.2`.
pub fn to_percentage(ratio: f64) -> f64 {
    let percentage = ratio * 100.0;
    let rounded = format!("{:.1}", percentage)
        .parse::<f64>()
        .unwrap_or(percentage);

    rounded.clamp(0.0, 100.0)
}

/// Score two pre-extracted keyword sets
///
/// Returns the percentage score and the shared keywords in sorted order.
pub fn score_keywords(
    profile: &KeywordSet,
    opportunity: &KeywordSet,
    score_fn: ScoreFn,
) -> (f64, Vec<String>) {
    if profile.is_empty() || opportunity.is_empty() {
        return (0.0, Vec::new());
    }

    let shared: KeywordSet = profile.intersection(opportunity).cloned().collect();
    let score = to_percentage(score_fn(profile, opportunity));

    (score, sorted_keywords(&shared))
}

/// Calculate the similarity (0-100) of a profile text against an opportunity text
///
/// Absent or empty text on either side scores 0.0, as does an opportunity
/// with no keywords left after filtering.
pub fn calculate_similarity(
    profile_text: Option<&str>,
    opportunity_text: Option<&str>,
    extractor: &KeywordExtractor,
    score_fn: ScoreFn,
) -> (f64, Vec<String>) {
    let (Some(profile_text), Some(opportunity_text)) = (profile_text, opportunity_text) else {
        return (0.0, Vec::new());
    };

    if profile_text.is_empty() || opportunity_text.is_empty() {
        return (0.0, Vec::new());
    }

    let profile = extractor.extract(profile_text);
    let opportunity = extractor.extract(opportunity_text);

    score_keywords(&profile, &opportunity, score_fn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similarity(profile: &str, text: &str) -> f64 {
        calculate_similarity(
            Some(profile),
            Some(text),
            &KeywordExtractor::default(),
            coverage,
        )
        .0
    }

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap() {
        let (score, shared) = calculate_similarity(
            Some("Python Flask Backend Development"),
            Some("Backend Development Internship using Python and Flask"),
            &KeywordExtractor::default(),
            coverage,
        );

        assert_eq!(score, 66.7);
        assert_eq!(shared, vec!["backend", "development", "flask", "python"]);
    }

    #[test]
    fn test_short_words_never_match() {
        assert_eq!(similarity("Python, Flask, AI", "AI Research Internship at DataCorp"), 0.0);
    }

    #[test]
    fn test_absent_inputs() {
        let extractor = KeywordExtractor::default();

        assert_eq!(calculate_similarity(None, Some("Rust"), &extractor, coverage).0, 0.0);
        assert_eq!(calculate_similarity(Some("Rust"), None, &extractor, coverage).0, 0.0);
        assert_eq!(similarity("", "Rust internship"), 0.0);
        assert_eq!(similarity("Rust", ""), 0.0);
    }

    #[test]
    fn test_opportunity_without_keywords() {
        assert_eq!(similarity("python flask", "the and of AI"), 0.0);
    }

    #[test]
    fn test_full_coverage() {
        assert_eq!(similarity("Embedded Rust firmware", "Rust firmware"), 100.0);
    }

    #[test]
    fn test_extra_profile_keywords_do_not_lower_score() {
        let narrow = similarity("python", "Python Django internship");
        let broad = similarity("python java kotlin swift", "Python Django internship");

        assert_eq!(narrow, broad);
        assert_eq!(narrow, 33.3);
    }

    #[test]
    fn test_asymmetric() {
        let forward = similarity("python", "python django");
        let backward = similarity("python django", "python");

        assert_eq!(forward, 50.0);
        assert_eq!(backward, 100.0);
    }

    #[test]
    fn test_short_description_outscores_long() {
        let short = similarity("python flask", "python flask internship");
        let long = similarity(
            "python flask",
            "python flask internship backend cloud deployment",
        );

        assert!(short > long);
    }

    #[test]
    fn test_jaccard_strategy() {
        let profile = set(&["python", "flask", "docker"]);
        let opportunity = set(&["python", "flask", "internship"]);

        assert_eq!(jaccard(&profile, &opportunity), 0.5);
        assert_eq!(jaccard(&KeywordSet::new(), &KeywordSet::new()), 0.0);

        let (score, _) = score_keywords(&profile, &opportunity, ScoringStrategy::Jaccard.score_fn());
        assert_eq!(score, 50.0);
    }

    #[test]
    fn test_to_percentage_rounding() {
        assert_eq!(to_percentage(2.0 / 3.0), 66.7);
        assert_eq!(to_percentage(1.0 / 3.0), 33.3);
        assert_eq!(to_percentage(1.0 / 16.0), 6.2);
        assert_eq!(to_percentage(0.0), 0.0);
        assert_eq!(to_percentage(1.0), 100.0);
    }

    #[test]
    fn test_to_percentage_uses_exact_value() {
        // 1 / 2000 * 100 is stored just above 0.05
        assert_eq!(to_percentage(1.0 / 2000.0), 0.1);
        assert_eq!(to_percentage(1.0 / 8.0), 12.5);
        assert_eq!(to_percentage(3.0 / 16.0), 18.8);
    }

    #[test]
    fn test_default_strategy_is_coverage() {
        assert_eq!(ScoringStrategy::default(), ScoringStrategy::Coverage);
    }
}
