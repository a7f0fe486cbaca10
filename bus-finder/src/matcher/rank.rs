//! Ranking for search results.
//!
//! The search itself keeps snapshot order. Callers that want the most
//! useful vehicles first sort downstream with [`rank_matches`].

use std::cmp::Ordering;

use super::search::MatchResult;

/// Order two matches by preference.
///
/// 1. Match strength (exact trip, then route, then nearby)
/// 2. Arrival estimate (sooner is better; NaN sorts last)
pub fn compare_matches(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| eta_key(a).total_cmp(&eta_key(b)))
}

fn eta_key(m: &MatchResult) -> f64 {
    let minutes = m.eta.minutes();
    if minutes.is_nan() {
        f64::INFINITY
    } else {
        minutes
    }
}

/// Rank matches best-first. Ties keep their snapshot order.
pub fn rank_matches(mut matches: Vec<MatchResult>) -> Vec<MatchResult> {
    matches.sort_by(compare_matches);
    matches
}
