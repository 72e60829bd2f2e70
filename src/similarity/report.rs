// ComparisonReport — the structured result of one document comparison.
//
// The percentage score is what gets written to the answer file; the rest
// is context for the terminal display and the `--json` output.

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyVector;

/// Full result of comparing an original document against a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Cosine similarity as a percentage, rounded to two decimals.
    pub percent: f64,
    /// Raw cosine similarity in [0, 1], unrounded.
    pub cosine: f64,
    /// Auxiliary token-set Jaccard similarity in [0, 1].
    pub jaccard: f64,
    /// Total token count of the original document.
    pub original_tokens: usize,
    /// Total token count of the candidate document.
    pub candidate_tokens: usize,
    /// Distinct-token count of the original document.
    pub original_vocabulary: usize,
    /// Distinct-token count of the candidate document.
    pub candidate_vocabulary: usize,
    /// Tokens present in both documents, strongest matches first.
    pub shared_terms: Vec<SharedTerm>,
}

/// A token that appears in both documents, with its per-side counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedTerm {
    pub term: String,
    pub original_count: u32,
    pub candidate_count: u32,
}

/// How many shared terms the report carries.
const MAX_SHARED_TERMS: usize = 10;

/// Collect the top shared tokens, ranked by the smaller of the two counts
/// (the contribution floor), ties broken alphabetically for stable output.
pub fn top_shared_terms(original: &FrequencyVector, candidate: &FrequencyVector) -> Vec<SharedTerm> {
    let mut shared: Vec<SharedTerm> = original
        .iter()
        .filter(|(token, _)| candidate.contains(token))
        .map(|(token, count)| SharedTerm {
            term: token.to_string(),
            original_count: count,
            candidate_count: candidate.count(token),
        })
        .collect();

    shared.sort_by(|a, b| {
        let min_a = a.original_count.min(a.candidate_count);
        let min_b = b.original_count.min(b.candidate_count);
        min_b.cmp(&min_a).then_with(|| a.term.cmp(&b.term))
    });
    shared.truncate(MAX_SHARED_TERMS);
    shared
}
