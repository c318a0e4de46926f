use rust_stemmers::{Algorithm, Stemmer as Snowball};

use super::Stemmer;

/// Snowball stemmer (Porter2 for English).
pub struct SnowballStemmer {
	inner: Snowball,
}

impl SnowballStemmer {
	pub fn english() -> Self {
		Self { inner: Snowball::create(Algorithm::English) }
	}
}

impl Stemmer for SnowballStemmer {
	/// Lowercases before stemming, the algorithm expects lowercase input.
	fn stem(&self, word: &str) -> String {
		self.inner.stem(&word.to_lowercase()).into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn english_stems() {
		let stemmer = SnowballStemmer::english();
		assert_eq!(stemmer.stem("running"), "run");
		assert_eq!(stemmer.stem("Connections"), "connect");
		assert_eq!(stemmer.stem("happiness"), "happi");
	}
}
