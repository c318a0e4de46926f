use serde::{Deserialize, Serialize};

use crate::error::TextLabError;
use crate::model::bigram_model::BigramModel;
use crate::model::edit_distance::{self as levenshtein, DistanceMatrix, MAX_MATRIX_SIDE};
#[cfg(feature = "morph")]
use crate::morph::{MorphAnalysis, MorphCapability};
use crate::text::ngram::{generate_ngrams, NGramOrder};
use crate::text::tokenizer::{char_tokenize, word_tokenize};

/// Default upper bound on the length of any text field, in chars.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Body returned by a successful perplexity estimation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PerplexityReport {
	/// Perplexity rounded to 4 decimals.
	pub perplexity: f64,
	/// Number of scored bigram transitions.
	pub evaluated_count: usize,
	pub details: String,
}

/// Body returned by an edit distance computation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EditDistanceReport {
	pub distance: usize,
	/// Trimmed source, as compared.
	pub source: String,
	/// Trimmed target, as compared.
	pub target: String,
	/// Full table, only when requested and both inputs are short enough.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub matrix: Option<Vec<Vec<usize>>>,
}

/// Body returned by the health check.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HealthReport {
	pub status: String,
	pub message: String,
}

impl HealthReport {
	pub fn healthy() -> Self {
		Self { status: "healthy".to_owned(), message: "Backend is running!".to_owned() }
	}
}

/// Body returned for every failed request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorBody {
	pub error: String,
}

impl From<&TextLabError> for ErrorBody {
	fn from(e: &TextLabError) -> Self {
		Self { error: e.to_string() }
	}
}

/// Per-field size limit applied before any computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputLimits {
	pub max_chars: usize,
}

impl Default for InputLimits {
	fn default() -> Self {
		Self { max_chars: DEFAULT_MAX_INPUT_CHARS }
	}
}

impl InputLimits {
	/// # Errors
	/// Returns [`TextLabError::InputTooLarge`] if `text` has more than `max_chars` chars.
	pub fn check(&self, field: &str, text: &str) -> Result<(), TextLabError> {
		let actual = text.chars().count();
		if actual > self.max_chars {
			return Err(TextLabError::InputTooLarge {
				field: field.to_owned(),
				limit: self.max_chars,
				actual,
			});
		}
		Ok(())
	}
}

/// Word n-grams of `text`. Empty text yields an empty sequence.
pub fn analyze(text: &str, order: NGramOrder) -> Vec<String> {
	generate_ngrams(&word_tokenize(text), order)
}

/// Trains a bigram model on `training_text` and scores `test_text`.
///
/// # Errors
/// - [`TextLabError::MissingInput`] if either text is empty
/// - [`TextLabError::EmptyTrainingData`] if the training text has no word
/// - [`TextLabError::InsufficientTestData`] if the test text has fewer than 2 words
pub fn perplexity(training_text: &str, test_text: &str) -> Result<PerplexityReport, TextLabError> {
	if training_text.trim().is_empty() || test_text.trim().is_empty() {
		return Err(TextLabError::MissingInput(
			"Both training text and test text are required.".to_owned(),
		));
	}

	let model = BigramModel::train(&word_tokenize(training_text))?;
	let result = model.perplexity(&word_tokenize(test_text))?;

	Ok(PerplexityReport {
		perplexity: result.rounded(),
		evaluated_count: result.evaluated,
		details: format!("Calculated on {} bigram transitions.", result.evaluated),
	})
}

/// Levenshtein distance between the trimmed `source` and `target`.
///
/// Surrounding whitespace is not significant at this level; the
/// algorithm itself compares its inputs verbatim.
pub fn edit_distance(source: &str, target: &str, with_matrix: bool) -> EditDistanceReport {
	let source = source.trim();
	let target = target.trim();

	let small = source.chars().count() <= MAX_MATRIX_SIDE && target.chars().count() <= MAX_MATRIX_SIDE;
	let (distance, matrix) = if with_matrix && small {
		let matrix = DistanceMatrix::build(source, target);
		(matrix.distance(), Some(matrix.rows()))
	} else {
		(levenshtein::edit_distance(source, target), None)
	};

	EditDistanceReport { distance, source: source.to_owned(), target: target.to_owned(), matrix }
}

/// One token per character of `text`, whitespace included.
pub fn tokenize(text: &str) -> Vec<String> {
	char_tokenize(text)
}

/// Morphological analysis of the trimmed `word`.
///
/// # Errors
/// - [`TextLabError::MissingInput`] if the word is empty
/// - [`TextLabError::CapabilityUnavailable`] if the analyzer is not loaded or fails
#[cfg(feature = "morph")]
pub fn morph_analysis(capability: &MorphCapability, word: &str) -> Result<MorphAnalysis, TextLabError> {
	let word = word.trim();
	if word.is_empty() {
		return Err(TextLabError::MissingInput("Word is required".to_owned()));
	}
	capability.get()?.analyze(word)
}
