//! Statistical and dynamic-programming models over token and character sequences.
//!
//! - Word bigram language model with add-one smoothing (`BigramModel`)
//! - Levenshtein edit distance (`edit_distance`, `DistanceMatrix`)

/// Bigram language model and perplexity scoring.
///
/// Counts unigrams and adjacent pairs over a training sequence,
/// then scores a test sequence with Laplace smoothing.
pub mod bigram_model;

/// Levenshtein edit distance over Unicode code points.
///
/// Provides a rolling-row distance and an inspectable full table.
pub mod edit_distance;
