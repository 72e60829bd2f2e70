// Script classification for mixed Chinese/English text.
//
// The tokenizer only needs one distinction: is a character a CJK ideograph
// (segmented into bigrams, since Chinese has no word boundaries) or not
// (grouped into whitespace/punctuation-delimited word runs).

/// Whether a character is a CJK ideograph.
///
/// Covers the CJK Unified Ideographs block (U+4E00–U+9FFF) plus
/// Extension A (U+3400–U+4DBF). Kana, Hangul, and fullwidth punctuation
/// are deliberately excluded — they either carry their own word
/// boundaries or act as separators.
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_hanzi_are_cjk() {
        for c in "今天气晴电影".chars() {
            assert!(is_cjk(c), "{c} should classify as CJK");
        }
    }

    #[test]
    fn latin_digits_punctuation_are_not_cjk() {
        for c in "hello42，。！ 、".chars() {
            assert!(!is_cjk(c), "{c} should not classify as CJK");
        }
    }

    #[test]
    fn extension_a_is_cjk() {
        assert!(is_cjk('\u{3400}'));
        assert!(is_cjk('\u{4dbf}'));
    }
}
