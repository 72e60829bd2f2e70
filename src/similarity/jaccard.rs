// Jaccard similarity — auxiliary set-overlap metric.
//
// Unlike cosine, Jaccard ignores counts entirely: it is the size of the
// shared vocabulary over the size of the combined vocabulary. Reported
// alongside the cosine score as a sanity signal (a high cosine with a low
// Jaccard means a few repeated tokens dominate the match).

use super::frequency::FrequencyVector;

/// Token-set Jaccard similarity in [0.0, 1.0].
///
/// Both-empty inputs score 0.0, matching the engine-wide zero-vector
/// policy for degenerate documents.
pub fn jaccard_similarity(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.tokens().filter(|t| large.contains(t)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
