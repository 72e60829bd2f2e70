use std::env;

use anyhow::Result;

use crate::text::tokenize::{CjkSegmentation, TokenizerOptions};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Env vars
/// supply defaults; CLI flags override them per invocation.
pub struct Config {
    /// CJK segmentation mode (MIMEO_CJK_MODE: "bigram" or "char")
    pub cjk: CjkSegmentation,
    /// Stop word filtering default (MIMEO_FILTER_STOPWORDS: 1/true/yes)
    pub filter_stopwords: bool,
}

impl Config {
    /// Load configuration from environment variables. Unset or
    /// unrecognized values fall back to the defaults (bigram, no
    /// filtering) rather than erroring.
    pub fn load() -> Result<Self> {
        let cjk = match env::var("MIMEO_CJK_MODE").as_deref() {
            Ok("char") | Ok("character") => CjkSegmentation::Character,
            // "bigram" or unset both default to bigrams
            _ => CjkSegmentation::Bigram,
        };

        let filter_stopwords = matches!(
            env::var("MIMEO_FILTER_STOPWORDS").as_deref(),
            Ok("1") | Ok("true") | Ok("yes")
        );

        Ok(Self {
            cjk,
            filter_stopwords,
        })
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            cjk: self.cjk,
            filter_stopwords: self.filter_stopwords,
        }
    }
}
