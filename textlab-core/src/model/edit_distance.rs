/// Largest source/target length (in chars) for which the full table is materialized.
pub const MAX_MATRIX_SIDE: usize = 64;

/// Computes the Levenshtein distance between two strings.
///
/// Operates on Unicode code points. Only the previous row of the
/// dynamic-programming table is kept, so memory is `O(target length)`.
///
/// Inputs are compared as given; trimming is the caller's policy.
pub fn edit_distance(source: &str, target: &str) -> usize {
	let source: Vec<char> = source.chars().collect();
	let target: Vec<char> = target.chars().collect();
	let n = target.len();

	// Row 0: pure insertions
	let mut previous: Vec<usize> = (0..=n).collect();
	let mut current = vec![0usize; n + 1];

	for i in 1..=source.len() {
		// Column 0: pure deletions
		current[0] = i;
		for j in 1..=n {
			let cost = if source[i - 1] == target[j - 1] { 0 } else { 1 };
			current[j] = (previous[j] + 1) // deletion
				.min(current[j - 1] + 1) // insertion
				.min(previous[j - 1] + cost); // substitution
		}
		std::mem::swap(&mut previous, &mut current);
	}

	previous[n]
}

/// Full `(m + 1) x (n + 1)` Levenshtein table.
///
/// Cell `(i, j)` is the distance between the first `i` chars of the
/// source and the first `j` chars of the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
	/// Row-major cells.
	cells: Vec<usize>,
	rows: usize,
	columns: usize,
}

impl DistanceMatrix {
	/// Fills the table in row-major order.
	pub fn build(source: &str, target: &str) -> Self {
		let source: Vec<char> = source.chars().collect();
		let target: Vec<char> = target.chars().collect();
		let rows = source.len() + 1;
		let columns = target.len() + 1;

		let mut matrix = Self { cells: vec![0; rows * columns], rows, columns };

		for i in 0..rows {
			matrix.set(i, 0, i);
		}
		for j in 0..columns {
			matrix.set(0, j, j);
		}

		for i in 1..rows {
			for j in 1..columns {
				let cost = if source[i - 1] == target[j - 1] { 0 } else { 1 };
				let value = (matrix.get(i - 1, j) + 1)
					.min(matrix.get(i, j - 1) + 1)
					.min(matrix.get(i - 1, j - 1) + cost);
				matrix.set(i, j, value);
			}
		}

		matrix
	}

	/// Cell `(i, j)`.
	///
	/// # Panics
	/// Panics if `i > m` or `j > n`.
	pub fn get(&self, i: usize, j: usize) -> usize {
		self.cells[i * self.columns + j]
	}

	fn set(&mut self, i: usize, j: usize, value: usize) {
		self.cells[i * self.columns + j] = value;
	}

	/// Distance between the full source and target (bottom-right corner).
	pub fn distance(&self) -> usize {
		self.get(self.rows - 1, self.columns - 1)
	}

	/// Table as nested rows, for display.
	pub fn rows(&self) -> Vec<Vec<usize>> {
		self.cells.chunks(self.columns).map(<[usize]>::to_vec).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;

	fn random_string(rng: &mut impl Rng) -> String {
		let alphabet = ['a', 'b', 'c', 'é', ' '];
		let len = rng.random_range(0..8);
		(0..len).map(|_| alphabet[rng.random_range(0..alphabet.len())]).collect()
	}

	#[test]
	fn known_distances() {
		assert_eq!(edit_distance("kitten", "sitting"), 3);
		assert_eq!(edit_distance("flaw", "lawn"), 2);
		assert_eq!(edit_distance("", "abc"), 3);
		assert_eq!(edit_distance("abc", ""), 3);
		assert_eq!(edit_distance("", ""), 0);
	}

	#[test]
	fn counts_chars_not_bytes() {
		assert_eq!(edit_distance("café", "cafe"), 1);
		assert_eq!(edit_distance("日本", "日本語"), 1);
	}

	#[test]
	fn whitespace_is_significant_to_the_algorithm() {
		assert_eq!(edit_distance(" edit", "edit"), 1);
	}

	#[test]
	fn identity_symmetry_and_triangle_inequality() {
		let mut rng = rand::rng();
		for _ in 0..200 {
			let a = random_string(&mut rng);
			let b = random_string(&mut rng);
			let c = random_string(&mut rng);
			assert_eq!(edit_distance(&a, &a), 0);
			assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
			assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
		}
	}

	#[test]
	fn matrix_agrees_with_rolling_rows() {
		let mut rng = rand::rng();
		for _ in 0..100 {
			let a = random_string(&mut rng);
			let b = random_string(&mut rng);
			assert_eq!(DistanceMatrix::build(&a, &b).distance(), edit_distance(&a, &b));
		}
	}

	#[test]
	fn matrix_borders_are_identity_costs() {
		let m = DistanceMatrix::build("flaw", "lawn");
		let rows = m.rows();
		assert_eq!(rows.len(), 5);
		assert_eq!(rows[0], vec![0, 1, 2, 3, 4]);
		assert_eq!(rows.iter().map(|r| r[0]).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
		assert_eq!(m.get(1, 1), 1);
		assert_eq!(m.distance(), 2);
	}

	#[test]
	fn matrix_of_empty_strings() {
		let m = DistanceMatrix::build("", "");
		assert_eq!(m.rows(), vec![vec![0]]);
		assert_eq!(m.distance(), 0);
	}
}
