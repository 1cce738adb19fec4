use std::collections::HashSet;

use crate::models::ScoredOpportunity;

/// Check whether a ranked opportunity may be shown as a recommendation
///
/// Opportunities the student already applied to, and those with no keyword
/// overlap at all, are left out.
#[inline]
pub fn is_recommendable(scored: &ScoredOpportunity, applied_ids: &HashSet<i64>) -> bool {
    if applied_ids.contains(&scored.opportunity.id) {
        return false;
    }

    scored.match_score > 0.0
}

/// Select the top picks for display from an already ranked list
///
/// Ranking order is preserved; at most `limit` entries are returned.
pub fn select_top_picks(
    ranked: Vec<ScoredOpportunity>,
    applied_ids: &HashSet<i64>,
    limit: usize,
) -> Vec<ScoredOpportunity> {
    ranked
        .into_iter()
        .filter(|scored| is_recommendable(scored, applied_ids))
        .take(limit)
        .collect()
}
