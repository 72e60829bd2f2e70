// Composition tests — the full pipeline chained together:
//   read_document -> tokenize -> compare -> write_result
// using real temp files, including a GBK-encoded input, with no network
// and no state outside the temp directory.

use std::fs;
use std::io::Write;

use mimeo::input::read_document;
use mimeo::output::write_result;
use mimeo::similarity::{compare, compute_similarity};
use mimeo::text::tokenize::{CjkSegmentation, Tokenizer, TokenizerOptions};

fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create test file");
    file.write_all(bytes).expect("write test file");
    path
}

#[test]
fn end_to_end_answer_file_contains_bare_percentage() {
    let dir = tempfile::tempdir().unwrap();
    let orig_path = write_file(
        &dir,
        "orig.txt",
        "今天是星期天，天气晴，今天晚上我要去看电影。".as_bytes(),
    );
    let cand_path = write_file(
        &dir,
        "copy.txt",
        "今天是周天，天气晴朗，我晚上要去看电影。".as_bytes(),
    );
    let answer_path = dir.path().join("result.txt");

    let original = read_document(&orig_path).unwrap();
    let candidate = read_document(&cand_path).unwrap();
    let score = compute_similarity(&original, &candidate);
    write_result(&answer_path, score).unwrap();

    let answer = fs::read_to_string(&answer_path).unwrap();
    // Bare two-decimal number, no newline
    let parsed: f64 = answer.parse().expect("answer file should hold a number");
    assert!(parsed > 60.0 && parsed < 90.0, "got {answer}");
    assert_eq!(answer, format!("{parsed:.2}"));
}

#[test]
fn gbk_and_utf8_copies_of_the_same_text_match_exactly() {
    let dir = tempfile::tempdir().unwrap();
    // "今天天气晴" in GBK
    let gbk_path = write_file(
        &dir,
        "legacy.txt",
        &[0xbd, 0xf1, 0xcc, 0xec, 0xcc, 0xec, 0xc6, 0xf8, 0xc7, 0xe7],
    );
    let utf8_path = write_file(&dir, "modern.txt", "今天天气晴".as_bytes());

    let legacy = read_document(&gbk_path).unwrap();
    let modern = read_document(&utf8_path).unwrap();
    assert_eq!(compute_similarity(&legacy, &modern), 100.0);
}

#[test]
fn report_round_trips_through_json() {
    let tokenizer = Tokenizer::default();
    let report = compare("hello 世界 hello", "hello world", &tokenizer);

    let json = serde_json::to_string(&report).unwrap();
    let back: mimeo::similarity::report::ComparisonReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.percent, report.percent);
    assert_eq!(back.shared_terms.len(), report.shared_terms.len());
    assert_eq!(back.shared_terms[0].term, "hello");
    assert_eq!(back.original_tokens, 3);
}

#[test]
fn character_mode_scores_rewording_higher_than_bigrams() {
    let original = "今天是星期天，天气晴，今天晚上我要去看电影。";
    let candidate = "今天是周天，天气晴朗，我晚上要去看电影。";

    let bigram = Tokenizer::new(TokenizerOptions {
        cjk: CjkSegmentation::Bigram,
        filter_stopwords: false,
    });
    let character = Tokenizer::new(TokenizerOptions {
        cjk: CjkSegmentation::Character,
        filter_stopwords: false,
    });

    let bigram_score = compare(original, candidate, &bigram).percent;
    let char_score = compare(original, candidate, &character).percent;
    assert!(
        char_score > bigram_score,
        "character unigrams ({char_score}) should be more forgiving than bigrams ({bigram_score})"
    );
}

#[test]
fn stop_word_filtering_changes_the_vocabulary_not_the_identity() {
    let tokenizer = Tokenizer::new(TokenizerOptions {
        cjk: CjkSegmentation::Bigram,
        filter_stopwords: true,
    });
    let doc = "the experiment measured cosine similarity across documents";

    let filtered = compare(doc, doc, &tokenizer);
    let unfiltered = compare(doc, doc, &Tokenizer::default());

    assert_eq!(filtered.percent, 100.0);
    assert!(
        filtered.original_vocabulary < unfiltered.original_vocabulary,
        "filtering should shrink the vocabulary"
    );
}
