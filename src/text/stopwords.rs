// Stop word lists for both input scripts.
//
// Uses the `stop-words` crate (ISO lists) rather than a hand-maintained
// set. English and Chinese are combined because documents routinely mix
// both scripts.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Build the combined English + Chinese stop word set.
///
/// Called once per tokenizer construction, not per document — the lists
/// total a few thousand entries.
pub fn combined_set() -> HashSet<String> {
    let mut set: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
    set.extend(get(LANGUAGE::Chinese));
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_both_languages() {
        let set = combined_set();
        assert!(set.contains("the"));
        assert!(set.contains("的"));
    }

    #[test]
    fn content_words_are_not_stop_words() {
        let set = combined_set();
        assert!(!set.contains("plagiarism"));
        assert!(!set.contains("电影"));
    }
}
