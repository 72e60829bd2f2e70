// Mimeo: plagiarism similarity scoring for text documents
//
// This is the library root. Each module corresponds to a stage of the
// comparison pipeline: decode input files, tokenize the text, score the
// frequency vectors, format the result.

pub mod config;
pub mod input;
pub mod output;
pub mod similarity;
pub mod text;
