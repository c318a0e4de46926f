use std::path::Path;

use tokenizers::Tokenizer;

use super::SubwordTokenizer;
use crate::error::TextLabError;

/// Subword tokenizer backed by a Hugging Face `tokenizer.json`
/// (ex. the `bert-base-uncased` WordPiece vocabulary).
pub struct HfSubwordTokenizer {
	inner: Tokenizer,
}

impl HfSubwordTokenizer {
	/// Loads a serialized tokenizer.
	///
	/// # Errors
	/// Returns [`TextLabError::CapabilityUnavailable`] if the file is missing or malformed.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextLabError> {
		let inner = Tokenizer::from_file(path.as_ref()).map_err(|e| {
			TextLabError::CapabilityUnavailable(format!(
				"cannot load tokenizer {}: {e}",
				path.as_ref().display()
			))
		})?;
		Ok(Self { inner })
	}
}

impl SubwordTokenizer for HfSubwordTokenizer {
	fn tokenize(&self, word: &str) -> Result<Vec<String>, TextLabError> {
		let encoding = self
			.inner
			.encode(word, false)
			.map_err(|e| TextLabError::CapabilityUnavailable(format!("Model error: {e}")))?;
		Ok(encoding.get_tokens().to_vec())
	}
}
