// Similarity engine — frequency vectors, cosine and Jaccard scoring.
//
// Pure functions over in-memory strings: no I/O, no shared state, safe to
// call from any number of threads at once.

pub mod cosine;
pub mod frequency;
pub mod jaccard;
pub mod report;

use crate::text::tokenize::Tokenizer;
use frequency::FrequencyVector;
use report::ComparisonReport;

/// Compare two documents with the given tokenizer and produce the full
/// report: cosine percentage, auxiliary Jaccard, and shared-term context.
pub fn compare(original: &str, candidate: &str, tokenizer: &Tokenizer) -> ComparisonReport {
    let original_tokens = tokenizer.tokenize(original);
    let candidate_tokens = tokenizer.tokenize(candidate);

    let original_vector = FrequencyVector::from_tokens(&original_tokens);
    let candidate_vector = FrequencyVector::from_tokens(&candidate_tokens);

    let cosine = cosine::cosine_similarity(&original_vector, &candidate_vector);

    ComparisonReport {
        percent: cosine::to_percent(cosine),
        cosine,
        jaccard: jaccard::jaccard_similarity(&original_vector, &candidate_vector),
        original_tokens: original_tokens.len(),
        candidate_tokens: candidate_tokens.len(),
        original_vocabulary: original_vector.len(),
        candidate_vocabulary: candidate_vector.len(),
        shared_terms: report::top_shared_terms(&original_vector, &candidate_vector),
    }
}

/// Similarity percentage between two documents under the default
/// tokenizer (CJK bigrams, no stop word filtering), rounded to two
/// decimals. Identical documents score 100.00; if either document
/// produces no tokens the score is 0.00.
pub fn compute_similarity(original: &str, candidate: &str) -> f64 {
    compare(original, candidate, &Tokenizer::default()).percent
}
