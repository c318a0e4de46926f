use thiserror::Error;

/// Coarse error buckets reported to callers.
///
/// Several [`TextLabError`] variants share a bucket: an empty training set and a
/// too-short test sequence are both `InsufficientData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	MissingInput,
	InvalidArgument,
	InsufficientData,
	InputTooLarge,
	ExternalCapabilityUnavailable,
}

/// Errors produced by the text-analysis operations.
///
/// # Variants
/// - `MissingInput`: a required field is absent or empty.
/// - `InvalidArgument`: a field has a value outside its closed set (ex. an unknown n-gram type).
/// - `EmptyTrainingData`: the training text produced no word token.
/// - `InsufficientTestData`: the test text produced fewer than two word tokens.
/// - `InputTooLarge`: a text field exceeds the configured character limit.
/// - `CapabilityUnavailable`: the morphological capability failed to load or failed during use.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextLabError {
	#[error("{0}")]
	MissingInput(String),

	#[error("{0}")]
	InvalidArgument(String),

	#[error("Training text is empty.")]
	EmptyTrainingData,

	#[error("Test text must have at least 2 words for bigram perplexity (got {found}).")]
	InsufficientTestData { found: usize },

	#[error("Field '{field}' is too long: {actual} characters (limit is {limit}).")]
	InputTooLarge { field: String, limit: usize, actual: usize },

	#[error("{0}")]
	CapabilityUnavailable(String),
}

impl TextLabError {
	/// Returns the taxonomy bucket of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			TextLabError::MissingInput(_) => ErrorKind::MissingInput,
			TextLabError::InvalidArgument(_) => ErrorKind::InvalidArgument,
			TextLabError::EmptyTrainingData | TextLabError::InsufficientTestData { .. } => {
				ErrorKind::InsufficientData
			}
			TextLabError::InputTooLarge { .. } => ErrorKind::InputTooLarge,
			TextLabError::CapabilityUnavailable(_) => ErrorKind::ExternalCapabilityUnavailable,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insufficient_data_variants_share_a_kind() {
		assert_eq!(TextLabError::EmptyTrainingData.kind(), ErrorKind::InsufficientData);
		assert_eq!(
			TextLabError::InsufficientTestData { found: 1 }.kind(),
			ErrorKind::InsufficientData
		);
	}

	#[test]
	fn messages_are_human_readable() {
		let e = TextLabError::InputTooLarge { field: "source".into(), limit: 10, actual: 12 };
		let msg = e.to_string();
		assert!(msg.contains("source"));
		assert!(msg.contains("12"));
		assert!(msg.contains("10"));
		assert_eq!(
			TextLabError::MissingInput("Word is required".into()).to_string(),
			"Word is required"
		);
	}
}
