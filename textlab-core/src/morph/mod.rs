//! Morphological analysis of a single word.
//!
//! The actual work is delegated to three capabilities, each behind a trait:
//! - [`SubwordTokenizer`]: splits a word into subword units (WordPiece style)
//! - [`Stemmer`]: reduces a word to its stem
//! - [`Lemmatizer`]: maps a word to its dictionary form
//!
//! [`MorphCapability`] loads the default implementations once per process
//! and hands out a read-only [`MorphAnalyzer`], or the reason it is unavailable.
//! It needs the `morph` feature (on by default); without it only the traits,
//! the report type and the lemmatizer are built.

mod lemmatizer;
#[cfg(feature = "morph")]
mod stemmer;
#[cfg(feature = "morph")]
mod subword;

#[cfg(feature = "morph")]
use std::path::{Path, PathBuf};
#[cfg(feature = "morph")]
use std::sync::OnceLock;

#[cfg(feature = "morph")]
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::TextLabError;

pub use lemmatizer::VerbLemmatizer;
#[cfg(feature = "morph")]
pub use stemmer::SnowballStemmer;
#[cfg(feature = "morph")]
pub use subword::HfSubwordTokenizer;

/// Marker prefixed to WordPiece continuation pieces.
const CONTINUATION_MARKER: &str = "##";

/// Splits a word into subword tokens.
pub trait SubwordTokenizer: Send + Sync {
	/// # Errors
	/// Returns [`TextLabError::CapabilityUnavailable`] if the underlying model fails.
	fn tokenize(&self, word: &str) -> Result<Vec<String>, TextLabError>;
}

/// Reduces a word to its stem.
pub trait Stemmer: Send + Sync {
	fn stem(&self, word: &str) -> String;
}

/// Maps a word to its lemma.
pub trait Lemmatizer: Send + Sync {
	fn lemmatize(&self, word: &str) -> String;
}

/// Result of analyzing one word.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MorphAnalysis {
	pub original: String,
	/// First subword token, or empty if the tokenizer produced none.
	pub root: String,
	/// Remaining subword tokens joined by `", "`, continuation marker rendered as `-`.
	pub suffix: String,
	/// Raw subword tokens.
	pub tokens: Vec<String>,
	pub stem: String,
	pub lemma: String,
}

/// Combines the three capabilities into a single analysis.
pub struct MorphAnalyzer {
	subword: Box<dyn SubwordTokenizer>,
	stemmer: Box<dyn Stemmer>,
	lemmatizer: Box<dyn Lemmatizer>,
}

impl MorphAnalyzer {
	pub fn new(
		subword: Box<dyn SubwordTokenizer>,
		stemmer: Box<dyn Stemmer>,
		lemmatizer: Box<dyn Lemmatizer>,
	) -> Self {
		Self { subword, stemmer, lemmatizer }
	}

	/// Default analyzer: Hugging Face tokenizer file, Snowball English stemmer,
	/// rule-based verb lemmatizer.
	///
	/// # Errors
	/// Returns [`TextLabError::CapabilityUnavailable`] if the tokenizer file cannot be loaded.
	#[cfg(feature = "morph")]
	pub fn from_tokenizer_file<P: AsRef<Path>>(path: P) -> Result<Self, TextLabError> {
		let subword = HfSubwordTokenizer::from_file(path)?;
		Ok(Self::new(
			Box::new(subword),
			Box::new(SnowballStemmer::english()),
			Box::new(VerbLemmatizer),
		))
	}

	/// Analyzes a single word.
	///
	/// # Errors
	/// Propagates subword tokenizer failures.
	pub fn analyze(&self, word: &str) -> Result<MorphAnalysis, TextLabError> {
		let tokens = self.subword.tokenize(word)?;
		let root = tokens.first().cloned().unwrap_or_default();
		let suffix = tokens
			.iter()
			.skip(1)
			.map(|t| t.replace(CONTINUATION_MARKER, "-"))
			.collect::<Vec<_>>()
			.join(", ");

		Ok(MorphAnalysis {
			original: word.to_owned(),
			root,
			suffix,
			tokens,
			stem: self.stemmer.stem(word),
			lemma: self.lemmatizer.lemmatize(word),
		})
	}
}

/// Process-wide, lazily loaded morphological analyzer.
///
/// Loading happens at most once, on the first [`get`](MorphCapability::get).
/// A failed load is remembered: every later call reports the same error
/// instead of retrying.
#[cfg(feature = "morph")]
pub struct MorphCapability {
	tokenizer_path: Option<PathBuf>,
	analyzer: OnceLock<Result<MorphAnalyzer, String>>,
}

#[cfg(feature = "morph")]
impl MorphCapability {
	/// Capability that will load its tokenizer from `tokenizer_path` on first use.
	///
	/// With `None`, the capability is permanently unavailable.
	pub fn new(tokenizer_path: Option<PathBuf>) -> Self {
		Self { tokenizer_path, analyzer: OnceLock::new() }
	}

	/// Capability wrapping an already built analyzer.
	pub fn with_analyzer(analyzer: MorphAnalyzer) -> Self {
		Self { tokenizer_path: None, analyzer: OnceLock::from(Ok(analyzer)) }
	}

	fn load(&self) -> Result<MorphAnalyzer, String> {
		let Some(path) = &self.tokenizer_path else {
			return Err("Tokenizer model not loaded.".to_owned());
		};
		info!("loading subword tokenizer from {}", path.display());
		match MorphAnalyzer::from_tokenizer_file(path) {
			Ok(analyzer) => {
				info!("subword tokenizer loaded successfully");
				Ok(analyzer)
			}
			Err(e) => {
				warn!("failed to load subword tokenizer: {e}");
				Err(format!("Tokenizer model not loaded: {e}"))
			}
		}
	}

	/// Returns the analyzer, loading it on first call.
	///
	/// # Errors
	/// Returns [`TextLabError::CapabilityUnavailable`] if loading failed.
	pub fn get(&self) -> Result<&MorphAnalyzer, TextLabError> {
		self.analyzer
			.get_or_init(|| self.load())
			.as_ref()
			.map_err(|e| TextLabError::CapabilityUnavailable(e.clone()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Splits after the first three characters, WordPiece style.
	struct PrefixSplitter;

	impl SubwordTokenizer for PrefixSplitter {
		fn tokenize(&self, word: &str) -> Result<Vec<String>, TextLabError> {
			let chars: Vec<char> = word.to_lowercase().chars().collect();
			if chars.len() <= 3 {
				return Ok(vec![chars.into_iter().collect()]);
			}
			let (head, tail) = chars.split_at(3);
			Ok(vec![head.iter().collect(), format!("##{}", tail.iter().collect::<String>())])
		}
	}

	/// Keeps the first three characters.
	struct Truncate;

	impl Stemmer for Truncate {
		fn stem(&self, word: &str) -> String {
			word.to_lowercase().chars().take(3).collect()
		}
	}

	struct Broken;

	impl SubwordTokenizer for Broken {
		fn tokenize(&self, _: &str) -> Result<Vec<String>, TextLabError> {
			Err(TextLabError::CapabilityUnavailable("Model error: boom".into()))
		}
	}

	fn analyzer(subword: Box<dyn SubwordTokenizer>) -> MorphAnalyzer {
		MorphAnalyzer::new(subword, Box::new(Truncate), Box::new(VerbLemmatizer))
	}

	#[test]
	fn analysis_splits_root_and_suffix() {
		let result = analyzer(Box::new(PrefixSplitter)).analyze("running").unwrap();
		assert_eq!(result.original, "running");
		assert_eq!(result.tokens, vec!["run", "##ning"]);
		assert_eq!(result.root, "run");
		assert_eq!(result.suffix, "-ning");
		assert_eq!(result.stem, "run");
		assert_eq!(result.lemma, "run");
	}

	#[test]
	fn single_token_has_empty_suffix() {
		let result = analyzer(Box::new(PrefixSplitter)).analyze("go").unwrap();
		assert_eq!(result.root, "go");
		assert_eq!(result.suffix, "");
	}

	#[test]
	fn tokenizer_failure_is_propagated() {
		let err = analyzer(Box::new(Broken)).analyze("word").unwrap_err();
		assert!(matches!(err, TextLabError::CapabilityUnavailable(_)));
	}

	#[cfg(feature = "morph")]
	#[test]
	fn capability_without_path_is_unavailable() {
		let capability = MorphCapability::new(None);
		let err = capability.get().err().unwrap();
		assert!(matches!(err, TextLabError::CapabilityUnavailable(_)));
		assert_eq!(err.to_string(), "Tokenizer model not loaded.");
	}

	#[cfg(feature = "morph")]
	#[test]
	fn capability_with_missing_file_reports_error_every_time() {
		let capability = MorphCapability::new(Some(PathBuf::from("./does/not/exist/tokenizer.json")));
		assert!(capability.get().is_err());
		assert!(capability.get().is_err());
	}

	#[cfg(feature = "morph")]
	#[test]
	fn preloaded_capability_is_available() {
		let capability = MorphCapability::with_analyzer(analyzer(Box::new(PrefixSplitter)));
		let result = capability.get().unwrap().analyze("walked").unwrap();
		assert_eq!(result.lemma, "walk");
	}
}
