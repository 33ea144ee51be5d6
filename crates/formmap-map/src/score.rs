//! Similarity scoring between a logical name and a physical candidate.

use crate::normalize::{normalize, tokenize};

/// Scores a logical field name against one physical candidate.
///
/// First matching rule wins, with no blending:
///
/// 1. If either normalized name contains the other, the score is the length
///    of the normalized **logical** name. Scoring by the logical side in
///    both containment directions biases specific logical names over short
///    generic ones; this asymmetric choice is deliberate.
/// 2. Otherwise the score is the number of tokens the two names share.
/// 3. A logical name that is empty after normalization scores 0 against
///    every candidate.
#[must_use]
pub fn score(logical: &str, candidate: &str) -> usize {
    let logical_norm = normalize(logical);
    if logical_norm.is_empty() {
        return 0;
    }
    let candidate_norm = normalize(candidate);
    if candidate_norm.contains(&logical_norm) || logical_norm.contains(&candidate_norm) {
        return logical_norm.len();
    }
    tokenize(logical)
        .intersection(&tokenize(candidate))
        .count()
}
