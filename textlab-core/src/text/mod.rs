//! Text preprocessing.
//!
//! - Word and character tokenization (`tokenizer`)
//! - Contiguous n-gram windows over word tokens (`ngram`)

/// Word-level and character-level tokenizers.
///
/// The word tokenizer is the shared leaf used by n-gram extraction
/// and perplexity estimation.
pub mod tokenizer;

/// N-gram order selection and window generation.
pub mod ngram;
