use serde::Serialize;

use crate::models::Candidate;
use crate::roster::selection::Selection;

/// Returns a new vector ordered by descending aggregate score.
///
/// The input is left untouched. `sort_by` is stable, so candidates with equal
/// scores keep their roster order.
pub fn rank(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| b.total_score().total_cmp(&a.total_score()));
    ranked
}

/// A ranked candidate as the list view shows it.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub candidate: Candidate,
    pub selected: bool,
    /// Within the top `recommended_count`.
    pub recommended: bool,
}

/// Decorates an already-ranked list with position, selection and
/// recommendation flags.
pub fn ranked_entries(
    ranked: &[Candidate],
    selection: &Selection,
    recommended_count: usize,
) -> Vec<RankedEntry> {
    ranked
        .iter()
        .enumerate()
        .map(|(idx, candidate)| RankedEntry {
            rank: idx + 1,
            candidate: candidate.clone(),
            selected: selection.contains(candidate.id()),
            recommended: idx < recommended_count,
        })
        .collect()
}

/// Index at which the "recommendations are based on..." note goes, i.e. the
/// first non-recommended entry. `None` when every candidate is recommended.
pub fn recommendation_break(total: usize, recommended_count: usize) -> Option<usize> {
    (total > recommended_count).then_some(recommended_count)
}
