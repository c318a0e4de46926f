//! Small, self-contained text-analysis algorithms.
//!
//! This crate provides:
//! - Word and character tokenization
//! - Word n-gram extraction (unigram, bigram, trigram)
//! - Bigram language model perplexity with add-one smoothing
//! - Levenshtein edit distance
//! - Morphological analysis delegated to subword/stemming/lemmatizing capabilities
//!
//! The [`analysis`] module exposes each operation as a transport-agnostic
//! request/response pair; the lower-level modules hold the algorithms.
//!
//! The default `morph` feature pulls in the `tokenizers` and `rust-stemmers`
//! backends. Clients that only need the report types can disable it.

/// Error taxonomy shared by every operation.
pub mod error;

/// Tokenizers and n-gram generation.
pub mod text;

/// Bigram language model and edit distance.
pub mod model;

/// Morphological analysis capabilities and their process-wide loader.
pub mod morph;

/// Request-level operations and serializable report types.
pub mod analysis;

pub use error::{ErrorKind, TextLabError};
