//! Combination ranking
//!
//! TURF looks for the combination with the largest unduplicated reach.

use crate::domain::result::CombinationResult;

/// Sort results by total reach, highest first
///
/// Ties keep generation order.
pub fn rank_by_total_reach(results: &[CombinationResult]) -> Vec<&CombinationResult> {
    let mut ranked: Vec<&CombinationResult> = results.iter().collect();
    ranked.sort_by(|a, b| b.total_reach.total_cmp(&a.total_reach));
    ranked
}

/// Combination with the highest total reach (first one on ties)
pub fn best_combination(results: &[CombinationResult]) -> Option<&CombinationResult> {
    rank_by_total_reach(results).into_iter().next()
}
