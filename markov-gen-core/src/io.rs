use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Reads a corpus file and returns its whitespace-delimited word tokens.
///
/// - Reads the entire file into memory as UTF-8
/// - Strips a leading byte-order marker if present
/// - Splits on any run of whitespace; empty tokens are discarded
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;

	// A UTF-8 BOM survives read_to_string; drop it before tokenizing.
	let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

	Ok(contents.split_whitespace().map(str::to_owned).collect())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths).
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			if path.extension() == Some(std::ffi::OsStr::new(extension)) {
				if let Some(name) = path.file_name() {
					files.push(name.to_string_lossy().to_string());
				}
			}
		}
	}

	Ok(files)
}
