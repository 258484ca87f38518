use std::path::PathBuf;

use thiserror::Error;

/// Failure to construct a generator from an input resource.
///
/// Only construction can fail: the corpus file may be unreadable or not
/// valid UTF-8. Corpus insufficiency during sentence generation is not an
/// error; it is reported through a sentinel string return value.
#[derive(Debug, Error)]
pub enum CorpusError {
	#[error("failed to read corpus file {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
