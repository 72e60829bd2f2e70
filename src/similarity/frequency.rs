// Token frequency vectors — the bag-of-words representation both
// similarity metrics operate on.

use std::collections::HashMap;

/// A document's token counts.
///
/// Tokens absent from the map have an implicit count of zero, so the dot
/// product only has to walk the smaller vector's keys — materializing the
/// union vocabulary with explicit zeros would change nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyVector {
    counts: HashMap<String, u32>,
}

impl FrequencyVector {
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct tokens (vocabulary size).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrence count for a token; zero if absent.
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Euclidean norm: sqrt of the sum of squared counts.
    pub fn magnitude(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| {
                let c = f64::from(c);
                c * c
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product over the shared vocabulary. Tokens unique to one
    /// document contribute zero, so only the smaller map is walked.
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(token, &count)| f64::from(count) * f64::from(large.count(token)))
            .sum()
    }
}
