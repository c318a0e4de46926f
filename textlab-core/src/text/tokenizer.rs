/// Splits raw text into normalized word tokens.
///
/// - Removes every ASCII punctuation character (no replacement, so `"don't"` → `"dont"`)
/// - Lowercases the remainder (Unicode aware)
/// - Splits on runs of whitespace and drops empty fragments
///
/// Never fails: empty or punctuation-only input yields an empty sequence.
pub fn word_tokenize(text: &str) -> Vec<String> {
	let clean: String = text
		.chars()
		.filter(|c| !c.is_ascii_punctuation())
		.flat_map(char::to_lowercase)
		.collect();

	clean.split_whitespace().map(str::to_owned).collect()
}

/// Splits raw text into one token per Unicode code point.
///
/// No normalization is applied: whitespace and punctuation are kept
/// and the input order is preserved.
pub fn char_tokenize(text: &str) -> Vec<String> {
	text.chars().map(String::from).collect()
}
