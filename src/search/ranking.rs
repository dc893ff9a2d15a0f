//! Ranking policy and result ordering

use std::cmp::Ordering;

/// Policy constants for ranking and truncation, carried as configuration
/// rather than inline constants.
#[derive(Debug, Clone)]
pub struct RankingPolicy {
    /// Candidates scoring at or below this are dropped, even when the
    /// requested limit is not filled
    pub score_floor: f64,
    /// Result limit applied when the caller does not supply one
    pub default_limit: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            score_floor: 30.0,
            default_limit: 3,
        }
    }
}

/// A corpus index paired with its composite score for one query
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f64,
}

/// Order candidates best-first, truncate to `limit`, then drop everything at
/// or below the confidence floor.
///
/// `scored` must be in corpus order: the sort is stable, so exact score ties
/// keep earlier-loaded records first. The floor is applied after truncation,
/// so the result may be shorter than `limit`, including empty.
pub fn rank(mut scored: Vec<ScoredCandidate>, limit: usize, floor: f64) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored.retain(|c| c.score > floor);
    scored
}
