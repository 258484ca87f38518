//! Bigram Markov chain text generation library.
//!
//! This crate builds a second-order (bigram-keyed) Markov transition model
//! over the word tokens of a plain-text corpus and generates new text by
//! randomly walking that model:
//! - Arbitrary-length word sequences (`generate_text`)
//! - Single punctuation-bounded sentences (`generate_sentence`)
//! - A lazy word-by-word view over one freshly generated sentence
//!
//! The model is unweighted: every distinct eligible transition has equal
//! sampling probability, however often it occurs in the corpus.

/// Core transition model and generation logic.
pub mod model;

/// Errors raised while constructing a generator from a corpus file.
pub mod error;

/// I/O utilities (corpus loading, directory listing).
///
/// Exposed for the server crate's corpus discovery endpoint.
pub mod io;
