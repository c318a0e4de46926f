use std::collections::HashMap;

use log::debug;

use crate::error::TextLabError;

/// Result of scoring a test sequence against a [`BigramModel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perplexity {
	/// Perplexity at full `f64` precision.
	pub value: f64,
	/// Number of bigram transitions that were scored (`N - 1`).
	pub evaluated: usize,
}

impl Perplexity {
	/// Perplexity rounded to 4 decimal digits, for reporting.
	pub fn rounded(&self) -> f64 {
		(self.value * 10_000.0).round() / 10_000.0
	}
}

/// Word-level bigram language model with Laplace (add-one) smoothing.
///
/// Built once from a training token sequence, then read-only.
///
/// # Invariants
/// - `vocabulary_size` is the number of distinct training tokens, always >= 1
/// - Every stored count is >= 1
#[derive(Clone, Debug)]
pub struct BigramModel {
	/// Occurrences of each training token.
	unigram_counts: HashMap<String, usize>,

	/// Occurrences of each ordered adjacent pair `(previous, current)`.
	bigram_counts: HashMap<(String, String), usize>,

	/// Number of distinct tokens (V).
	vocabulary_size: usize,
}

impl BigramModel {
	/// Builds the model from a training token sequence.
	///
	/// # Errors
	/// Returns [`TextLabError::EmptyTrainingData`] if `tokens` is empty.
	pub fn train<S: AsRef<str>>(tokens: &[S]) -> Result<Self, TextLabError> {
		if tokens.is_empty() {
			return Err(TextLabError::EmptyTrainingData);
		}

		let mut unigram_counts: HashMap<String, usize> = HashMap::new();
		for token in tokens {
			*unigram_counts.entry(token.as_ref().to_owned()).or_insert(0) += 1;
		}

		let mut bigram_counts: HashMap<(String, String), usize> = HashMap::new();
		for pair in tokens.windows(2) {
			let key = (pair[0].as_ref().to_owned(), pair[1].as_ref().to_owned());
			*bigram_counts.entry(key).or_insert(0) += 1;
		}

		let vocabulary_size = unigram_counts.len();
		debug!(
			"bigram model trained: {} tokens, vocabulary {}, {} distinct bigrams",
			tokens.len(),
			vocabulary_size,
			bigram_counts.len()
		);

		Ok(Self { unigram_counts, bigram_counts, vocabulary_size })
	}

	/// Number of distinct training tokens (V).
	pub fn vocabulary_size(&self) -> usize {
		self.vocabulary_size
	}

	/// Training occurrences of `token` (0 if unseen).
	pub fn unigram_count(&self, token: &str) -> usize {
		self.unigram_counts.get(token).copied().unwrap_or(0)
	}

	/// Training occurrences of the ordered pair `(previous, current)` (0 if unseen).
	pub fn bigram_count(&self, previous: &str, current: &str) -> usize {
		self.bigram_counts
			.get(&(previous.to_owned(), current.to_owned()))
			.copied()
			.unwrap_or(0)
	}

	/// Smoothed conditional probability `P(current | previous)`.
	///
	/// `(count(previous, current) + 1) / (count(previous) + V)`.
	/// Always in `(0, 1]`, even for unseen pairs or an unseen context.
	pub fn probability(&self, previous: &str, current: &str) -> f64 {
		let numerator = self.bigram_count(previous, current) + 1;
		let denominator = self.unigram_count(previous) + self.vocabulary_size;
		numerator as f64 / denominator as f64
	}

	/// Scores a test sequence.
	///
	/// Averages `ln P(w_i | w_{i-1})` over the `N - 1` adjacent pairs and
	/// returns `exp(-average)`.
	///
	/// # Errors
	/// Returns [`TextLabError::InsufficientTestData`] if `tokens` has fewer than 2 items.
	pub fn perplexity<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Perplexity, TextLabError> {
		if tokens.len() < 2 {
			return Err(TextLabError::InsufficientTestData { found: tokens.len() });
		}

		let mut log_prob_sum = 0.0;
		let mut evaluated = 0;
		for pair in tokens.windows(2) {
			log_prob_sum += self.probability(pair[0].as_ref(), pair[1].as_ref()).ln();
			evaluated += 1;
		}

		let average = log_prob_sum / evaluated as f64;
		Ok(Perplexity { value: (-average).exp(), evaluated })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(s: &str) -> Vec<&str> {
		s.split_whitespace().collect()
	}

	#[test]
	fn counts_and_vocabulary() {
		let model = BigramModel::train(&tokens("the cat sat on the mat")).unwrap();
		assert_eq!(model.vocabulary_size(), 5);
		assert_eq!(model.unigram_count("the"), 2);
		assert_eq!(model.unigram_count("dog"), 0);
		assert_eq!(model.bigram_count("the", "cat"), 1);
		assert_eq!(model.bigram_count("cat", "the"), 0);
	}

	#[test]
	fn single_transition_perplexity() {
		let model = BigramModel::train(&tokens("the cat sat")).unwrap();
		let p = model.perplexity(&tokens("the cat")).unwrap();
		assert_eq!(p.evaluated, 1);
		assert!((p.value - 2.0).abs() < 1e-12);
		assert_eq!(p.rounded(), 2.0);
	}

	#[test]
	fn unseen_context_falls_back_to_vocabulary() {
		let model = BigramModel::train(&tokens("a b c")).unwrap();
		assert!((model.probability("zebra", "a") - 1.0 / 3.0).abs() < 1e-12);
	}

	#[test]
	fn probabilities_are_positive_and_bounded() {
		let model = BigramModel::train(&tokens("x")).unwrap();
		let p = model.probability("x", "x");
		assert!(p > 0.0 && p <= 1.0);
	}

	#[test]
	fn multi_transition_matches_hand_computation() {
		// V = 3, count(a) = 2, count(b) = 1, count(a,b) = 1, count(b,a) = 1
		let model = BigramModel::train(&tokens("a b a c")).unwrap();
		let p = model.perplexity(&tokens("a b a")).unwrap();
		let expected = {
			let p1: f64 = (1.0 + 1.0) / (2.0 + 3.0);
			let p2: f64 = (1.0 + 1.0) / (1.0 + 3.0);
			(-(p1.ln() + p2.ln()) / 2.0).exp()
		};
		assert_eq!(p.evaluated, 2);
		assert!((p.value - expected).abs() < 1e-12);
	}

	#[test]
	fn rounding_keeps_four_decimals() {
		let p = Perplexity { value: 3.141_592_6, evaluated: 3 };
		assert_eq!(p.rounded(), 3.1416);
	}

	#[test]
	fn empty_training_is_rejected() {
		let empty: Vec<&str> = Vec::new();
		assert_eq!(BigramModel::train(&empty).unwrap_err(), TextLabError::EmptyTrainingData);
	}

	#[test]
	fn short_test_sequence_is_rejected() {
		let model = BigramModel::train(&tokens("a b")).unwrap();
		assert_eq!(
			model.perplexity(&tokens("a")).unwrap_err(),
			TextLabError::InsufficientTestData { found: 1 }
		);
		let empty: Vec<&str> = Vec::new();
		assert_eq!(
			model.perplexity(&empty).unwrap_err(),
			TextLabError::InsufficientTestData { found: 0 }
		);
	}
}
