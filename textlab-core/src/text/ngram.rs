use std::fmt;
use std::str::FromStr;

use crate::error::TextLabError;

/// Size of the n-gram windows to extract.
///
/// Parsed from the tags `"unigram"`, `"bigram"` and `"trigram"`.
/// Any other tag is rejected with [`TextLabError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NGramOrder {
	#[default]
	Unigram,
	Bigram,
	Trigram,
}

impl NGramOrder {
	/// Number of tokens in one window.
	pub fn size(self) -> usize {
		match self {
			NGramOrder::Unigram => 1,
			NGramOrder::Bigram => 2,
			NGramOrder::Trigram => 3,
		}
	}

	/// Tag used on the wire.
	pub fn tag(self) -> &'static str {
		match self {
			NGramOrder::Unigram => "unigram",
			NGramOrder::Bigram => "bigram",
			NGramOrder::Trigram => "trigram",
		}
	}
}

impl FromStr for NGramOrder {
	type Err = TextLabError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"unigram" => Ok(NGramOrder::Unigram),
			"bigram" => Ok(NGramOrder::Bigram),
			"trigram" => Ok(NGramOrder::Trigram),
			_ => Err(TextLabError::InvalidArgument(format!(
				"Invalid n-gram type {s:?}: expected 'unigram', 'bigram' or 'trigram'"
			))),
		}
	}
}

impl fmt::Display for NGramOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

/// Generates the contiguous n-grams of `tokens`.
///
/// Each window of `order.size()` consecutive tokens is rendered as a
/// space-joined string, in input order. For a unigram order this is the
/// token sequence itself.
///
/// Returns an empty sequence when there are fewer tokens than the order.
pub fn generate_ngrams<S: AsRef<str>>(tokens: &[S], order: NGramOrder) -> Vec<String> {
	let n = order.size();
	if tokens.len() < n {
		return Vec::new();
	}

	tokens
		.windows(n)
		.map(|window| {
			window
				.iter()
				.map(AsRef::as_ref)
				.collect::<Vec<&str>>()
				.join(" ")
		})
		.collect()
}
