use std::collections::HashMap;

use rand::prelude::IteratorRandom;
use rand::seq::IndexedRandom;

use super::bigram;

/// Bigram-keyed Markov transition model over a word-token corpus.
///
/// Each distinct pair of adjacent corpus tokens becomes one key, in its
/// canonical string form (the two words joined by a single space). A key's
/// successors are all distinct keys whose first word equals the key's
/// second word, each listed exactly once. The model is unweighted: a
/// transition seen a hundred times in the corpus samples no more often
/// than one seen once.
///
/// # Invariants
/// - Keys are deduplicated; the key count is at most `words.len() - 1`
/// - Successor lists contain no duplicates and may be empty
/// - Self-loops are allowed (a bigram whose second word equals its first)
/// - The model is never mutated after construction
#[derive(Clone, Debug)]
pub struct BigramModel {
	/// The corpus tokens, in order.
	words: Vec<String>,

	/// Mapping from a bigram key to its distinct successor keys.
	chain: HashMap<String, Vec<String>>,
}

impl BigramModel {
	/// Builds the transition model from an ordered token sequence.
	///
	/// A corpus of fewer than two tokens yields an empty model.
	pub fn from_words(words: Vec<String>) -> Self {
		let mut chain: HashMap<String, Vec<String>> = HashMap::new();

		// Every adjacent pair becomes a key; duplicates collapse to one.
		for pair in words.windows(2) {
			chain.entry(bigram::join(&pair[0], &pair[1])).or_default();
		}

		// A first-word index keeps successor construction O(k) average
		// instead of comparing every key against every other. Successor
		// sets are identical to the all-pairs scan: every distinct key
		// whose first word matches, exactly once.
		let keys: Vec<String> = chain.keys().cloned().collect();
		let mut by_first: HashMap<&str, Vec<&String>> = HashMap::new();
		for key in &keys {
			by_first.entry(bigram::first_word(key)).or_default().push(key);
		}

		for key in &keys {
			if let Some(matches) = by_first.get(bigram::second_word(key)) {
				let successors: Vec<String> = matches.iter().map(|k| (*k).clone()).collect();
				if let Some(entry) = chain.get_mut(key) {
					*entry = successors;
				}
			}
		}

		log::debug!("built transition model: {} keys from {} words", chain.len(), words.len());
		Self { words, chain }
	}

	/// The corpus tokens, in order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Number of tokens in the corpus.
	pub fn word_count(&self) -> usize {
		self.words.len()
	}

	/// Number of distinct bigram keys.
	pub fn key_count(&self) -> usize {
		self.chain.len()
	}

	/// Iterates over the distinct bigram keys, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.chain.keys()
	}

	/// The distinct successors of a key, or `None` for an unknown key.
	pub fn successors(&self, key: &str) -> Option<&[String]> {
		self.chain.get(key).map(Vec::as_slice)
	}

	/// Returns a uniformly random bigram key.
	///
	/// Returns `None` if the model has no keys.
	pub fn random_key(&self) -> Option<&String> {
		self.chain.keys().choose(&mut rand::rng())
	}

	/// Advances one random-walk step from `current`.
	///
	/// Picks a uniformly random successor of `current`; if `current` has
	/// no successors (or is not a key), restarts at a uniformly random key
	/// of the whole model. Returns `None` only when the model is empty.
	pub fn step(&self, current: &str) -> Option<&String> {
		match self.chain.get(current) {
			Some(successors) if !successors.is_empty() => successors.choose(&mut rand::rng()),
			_ => self.random_key(),
		}
	}

	/// All keys admissible as sentence starts, in no particular order.
	///
	/// Each qualifying key appears exactly once.
	pub fn sentence_starts(&self) -> Vec<&String> {
		self.chain.keys().filter(|key| bigram::is_sentence_start(key)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(corpus: &str) -> Vec<String> {
		corpus.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn example_corpus_keys() {
		let model = BigramModel::from_words(words("The cat sat. The dog ran."));

		let mut keys: Vec<&str> = model.keys().map(String::as_str).collect();
		keys.sort_unstable();
		assert_eq!(keys, vec!["The cat", "The dog", "cat sat.", "dog ran.", "sat. The"]);
	}

	#[test]
	fn empty_corpus_yields_empty_model() {
		let model = BigramModel::from_words(Vec::new());
		assert_eq!(model.key_count(), 0);
		assert!(model.random_key().is_none());
		assert!(model.step("The cat").is_none());
	}

	#[test]
	fn one_word_corpus_has_no_keys() {
		let model = BigramModel::from_words(words("Hello"));
		assert_eq!(model.word_count(), 1);
		assert_eq!(model.key_count(), 0);
	}

	#[test]
	fn successors_link_on_matching_words() {
		let model = BigramModel::from_words(words("The cat sat. The dog ran."));

		// "The cat" -> keys starting with "cat"
		assert_eq!(model.successors("The cat").unwrap(), ["cat sat.".to_owned()]);
		// "sat. The" -> keys starting with "The", in some order
		let mut succ: Vec<&str> =
			model.successors("sat. The").unwrap().iter().map(String::as_str).collect();
		succ.sort_unstable();
		assert_eq!(succ, vec!["The cat", "The dog"]);
		// "dog ran." -> nothing starts with "ran."
		assert!(model.successors("dog ran.").unwrap().is_empty());
	}

	#[test]
	fn successor_invariants_hold() {
		let model = BigramModel::from_words(words(
			"One fish two fish red fish blue fish. One fish again.",
		));

		assert!(model.key_count() <= model.word_count() - 1);
		for key in model.keys() {
			let successors = model.successors(key).unwrap();
			for successor in successors {
				assert_eq!(
					super::bigram::first_word(successor),
					super::bigram::second_word(key),
				);
			}
			let mut unique: Vec<&String> = successors.iter().collect();
			unique.sort_unstable();
			unique.dedup();
			assert_eq!(unique.len(), successors.len(), "duplicate successor under {key:?}");
		}
	}

	#[test]
	fn repeated_bigrams_collapse_to_one_key() {
		let model = BigramModel::from_words(words("go stop go stop go"));
		assert_eq!(model.key_count(), 2);
	}

	#[test]
	fn self_loop_is_allowed_once() {
		let model = BigramModel::from_words(words("a a a"));
		assert_eq!(model.key_count(), 1);
		assert_eq!(model.successors("a a").unwrap(), ["a a".to_owned()]);
	}

	#[test]
	fn construction_is_idempotent() {
		let corpus = words("The cat sat. The dog ran. The cat ran away.");
		let first = BigramModel::from_words(corpus.clone());
		let second = BigramModel::from_words(corpus);

		let mut first_keys: Vec<&String> = first.keys().collect();
		let mut second_keys: Vec<&String> = second.keys().collect();
		first_keys.sort_unstable();
		second_keys.sort_unstable();
		assert_eq!(first_keys, second_keys);

		for key in first.keys() {
			let mut a: Vec<&String> = first.successors(key).unwrap().iter().collect();
			let mut b: Vec<&String> = second.successors(key).unwrap().iter().collect();
			a.sort_unstable();
			b.sort_unstable();
			assert_eq!(a, b, "successor mismatch under {key:?}");
		}
	}

	#[test]
	fn step_restarts_from_a_dead_end() {
		let model = BigramModel::from_words(words("The cat sat. The dog ran."));

		// "dog ran." has no successors, so a step restarts somewhere in
		// the model.
		let next = model.step("dog ran.").unwrap();
		assert!(model.successors(next).is_some());
	}

	#[test]
	fn step_follows_a_successor_when_one_exists() {
		let model = BigramModel::from_words(words("The cat sat. The dog ran."));
		assert_eq!(model.step("The cat").unwrap(), "cat sat.");
	}

	#[test]
	fn sentence_starts_are_capitalized_keys() {
		let model = BigramModel::from_words(words("The cat sat. The dog ran."));

		let mut starts: Vec<&str> = model.sentence_starts().into_iter().map(String::as_str).collect();
		starts.sort_unstable();
		assert_eq!(starts, vec!["The cat", "The dog"]);
	}

	#[test]
	fn no_sentence_starts_in_lowercase_corpus() {
		let model = BigramModel::from_words(words("the cat sat. the dog ran."));
		assert!(model.sentence_starts().is_empty());
	}
}
