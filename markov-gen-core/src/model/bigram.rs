/// Characters that end a sentence.
pub(crate) const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Joins two adjacent tokens into the canonical bigram string.
pub(crate) fn join(first: &str, second: &str) -> String {
	format!("{} {}", first, second)
}

/// Returns the first word of a bigram string.
pub(crate) fn first_word(bigram: &str) -> &str {
	bigram.split_once(' ').map_or(bigram, |(first, _)| first)
}

/// Returns the second word of a bigram string.
pub(crate) fn second_word(bigram: &str) -> &str {
	bigram.split_once(' ').map_or(bigram, |(_, second)| second)
}

/// True if the text contains any sentence terminator (`.`, `?`, `!`).
pub(crate) fn has_terminator(text: &str) -> bool {
	text.contains(TERMINATORS)
}

/// True if a bigram key is an admissible sentence start.
///
/// Two shapes qualify:
/// - the key opens with a quotation mark followed by an uppercase letter
/// - the key opens with an uppercase letter not followed by a quotation mark
///
/// The heuristic is corpus-format-specific (straight double quotes only)
/// and deliberately not generalized further.
pub(crate) fn is_sentence_start(key: &str) -> bool {
	let mut chars = key.chars();
	let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
		return false;
	};
	(first == '"' && second.is_uppercase()) || (first.is_uppercase() && second != '"')
}
