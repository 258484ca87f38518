use std::fmt;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::CorpusError;
use crate::io;
use super::bigram;
use super::bigram_model::BigramModel;

/// Diagnostic returned when no valid sentence can be generated.
///
/// Sentence generation failure is a normal, reportable outcome: callers
/// inspect the returned string rather than catch an error.
pub const SENTENCE_FAILURE: &str =
	"This text file does not allow a valid sentence to be generated.";

/// High-level bigram Markov chain text generator.
///
/// # Responsibilities
/// - Load and tokenize a corpus file, building the transition model once
/// - Generate arbitrary-length word sequences (`generate_text`)
/// - Generate single punctuation-bounded sentences (`generate_sentence`)
/// - Stream the words of one fresh sentence (`sentence_words`)
///
/// All generation is a read-only walk over the model; a generator can be
/// shared freely once constructed.
#[derive(Clone, Debug)]
pub struct MarkovGenerator {
	model: BigramModel,
	source: String,
}

impl MarkovGenerator {
	/// Creates a generator from a UTF-8 corpus file.
	///
	/// Reads the whole file, strips a leading byte-order marker, splits on
	/// whitespace and builds the transition model.
	///
	/// # Errors
	/// Returns an error if the file cannot be read or decoded.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, CorpusError> {
		let path = filepath.as_ref();
		let words = io::read_corpus(path).map_err(|source| CorpusError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self::from_words(words, path.to_string_lossy()))
	}

	/// Creates a generator from an already tokenized corpus.
	///
	/// `source` is the human-readable label reported by `source()` and the
	/// `Display` implementation.
	pub fn from_words(words: Vec<String>, source: impl Into<String>) -> Self {
		Self {
			model: BigramModel::from_words(words),
			source: source.into(),
		}
	}

	/// Human-readable label of the input resource.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// The underlying transition model.
	pub fn model(&self) -> &BigramModel {
		&self.model
	}

	/// Randomly generates text of exactly `length` space-joined words.
	///
	/// Degenerate corpora reduce rather than fail:
	/// - empty corpus or `length == 0`: empty string
	/// - `length == 1`: one word drawn from a random model entry
	/// - one-word corpus: that word repeated `length` times
	/// - two-word corpus: one of the two words repeated `length` times
	///
	/// Otherwise the model is walked from a random starting bigram; each
	/// step emits the second word of the new current bigram, so the
	/// starting bigram itself is never emitted.
	pub fn generate_text(&self, length: usize) -> String {
		let words = self.model.words();
		if words.is_empty() || length == 0 {
			return String::new();
		}

		if length == 1 {
			// One random constituent word of one random key. On a one-word
			// corpus the model has no keys; the only word is the answer.
			return match self.model.random_key() {
				Some(key) => constituent_word(key).to_owned(),
				None => words[0].clone(),
			};
		}

		if words.len() == 1 {
			return vec![words[0].as_str(); length].join(" ");
		}

		if words.len() == 2 {
			// A two-word corpus has exactly one key; repeat one of its
			// two words.
			let Some(key) = self.model.random_key() else {
				return String::new();
			};
			return vec![constituent_word(key); length].join(" ");
		}

		let Some(mut current) = self.model.random_key().cloned() else {
			return String::new();
		};

		let mut text = Vec::with_capacity(length);
		for _ in 0..length {
			let Some(next) = self.model.step(&current) else { break };
			current = next.clone();
			text.push(bigram::second_word(&current).to_owned());
		}
		text.join(" ")
	}

	/// Randomly generates one properly terminated sentence.
	///
	/// A sentence starts from a random capitalized bigram and ends once
	/// the accumulated text contains `.`, `?` or `!`. Matching quotation
	/// marks are not balanced.
	///
	/// Returns [`SENTENCE_FAILURE`] when no capitalized starting bigram
	/// exists, or when no terminator is observed within `word_count()`
	/// walk steps — the walk never runs longer than the corpus itself.
	pub fn generate_sentence(&self) -> String {
		let starts = self.model.sentence_starts();
		let Some(&seed) = starts.choose(&mut rand::rng()) else {
			return SENTENCE_FAILURE.to_owned();
		};

		// The seed may already be a complete sentence; only its first
		// word belongs to the output then.
		if bigram::has_terminator(seed) {
			return bigram::first_word(seed).to_owned();
		}

		let mut current = seed.clone();
		let mut text = current.clone();
		for _ in 0..self.model.word_count() {
			if bigram::has_terminator(&text) {
				break;
			}
			let Some(next) = self.model.step(&current) else { break };
			current = next.clone();
			text.push(' ');
			text.push_str(bigram::second_word(&current));
		}

		if bigram::has_terminator(&text) {
			text
		} else {
			SENTENCE_FAILURE.to_owned()
		}
	}

	/// Generates one fresh sentence and returns a word-by-word view of it.
	///
	/// Every call is an independent random draw. The full sentence stays
	/// available through [`SentenceStream::sentence`] during and after
	/// iteration; when generation fails the stream carries the diagnostic
	/// string instead.
	pub fn sentence_words(&self) -> SentenceStream {
		SentenceStream::new(self.generate_sentence())
	}
}

impl fmt::Display for MarkovGenerator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Markov Chain Text Generator of file: {}.", self.source)
	}
}

/// Picks one of the two words of a bigram key, uniformly.
fn constituent_word(key: &str) -> &str {
	if rand::rng().random_bool(0.5) {
		bigram::first_word(key)
	} else {
		bigram::second_word(key)
	}
}

/// Finite, single-pass view over the words of one generated sentence.
///
/// Produced by [`MarkovGenerator::sentence_words`]. The sentence is
/// computed eagerly, once; iteration then yields its words lazily and the
/// complete string remains accessible at any point.
#[derive(Debug)]
pub struct SentenceStream {
	words: std::vec::IntoIter<String>,
	sentence: String,
}

impl SentenceStream {
	fn new(sentence: String) -> Self {
		let words: Vec<String> = sentence.split_whitespace().map(str::to_owned).collect();
		Self {
			words: words.into_iter(),
			sentence,
		}
	}

	/// The complete generated sentence.
	pub fn sentence(&self) -> &str {
		&self.sentence
	}
}

impl Iterator for SentenceStream {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		self.words.next()
	}
}
