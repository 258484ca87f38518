//! Top-level module for the bigram Markov chain system.
//!
//! This module provides:
//! - Bigram string helpers (`bigram`)
//! - The bigram transition model (`BigramModel`)
//! - The high-level generation interface (`MarkovGenerator`)

/// High-level interface for generating text and sentences from a corpus.
///
/// Exposes corpus loading, arbitrary-length text generation, bounded
/// sentence generation, and a word-by-word sentence stream.
pub mod generator;

/// Bigram-keyed transition model.
///
/// Maps each distinct bigram of the corpus to its set of distinct
/// successor bigrams and supports uniform random walks over them.
pub mod bigram_model;

/// Helpers for the canonical bigram string form (two words joined by a
/// single space). Not exposed publicly.
mod bigram;
