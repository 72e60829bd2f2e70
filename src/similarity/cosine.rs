// Cosine similarity over frequency vectors.
//
// The normalized dot product measures directional closeness regardless of
// document length: a document and its double-length concatenation score
// 1.0. The zero-vector policy is the one numeric edge case — an empty or
// tokenless document has magnitude zero, and dividing by it is defined
// away as similarity 0.0 rather than an error.

use super::frequency::FrequencyVector;

/// Cosine similarity in [0.0, 1.0]. Zero if either vector is empty.
pub fn cosine_similarity(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    let magnitude = a.magnitude() * b.magnitude();
    if magnitude == 0.0 {
        return 0.0;
    }
    // Counts are non-negative so the true value is already in [0, 1];
    // the clamp only absorbs floating-point drift at the top end.
    (a.dot(b) / magnitude).clamp(0.0, 1.0)
}

/// Convert a [0, 1] similarity to a percentage rounded to two decimals.
pub fn to_percent(similarity: f64) -> f64 {
    (similarity * 10_000.0).round() / 100.0
}
