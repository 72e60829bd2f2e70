// Text preprocessing — script classification, stop words, and tokenization.

pub mod script;
pub mod stopwords;
pub mod tokenize;
