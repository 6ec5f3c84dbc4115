/* src/record/tags.rs */

use std::collections::HashSet;

/// Splits a comma-separated tag list, trimming each entry and dropping empty ones.
///
/// Order is preserved and repeats are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
	input
		.split(',')
		.map(str::trim)
		.filter(|tag| !tag.is_empty())
		.map(str::to_string)
		.collect()
}

/// Removes repeated tags, keeping the first occurrence of each.
pub fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	tags.into_iter().filter(|tag| seen.insert(tag.clone())).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_tags_trims_and_drops_empty() {
		assert_eq!(parse_tags("a, b ,a"), vec!["a", "b", "a"]);
		assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
		assert_eq!(parse_tags(""), Vec::<String>::new());
		assert_eq!(parse_tags("night sky,  neon "), vec!["night sky", "neon"]);
	}

	#[test]
	fn test_dedupe_keeps_first() {
		assert_eq!(dedupe_tags(parse_tags("a, b ,a")), vec!["a", "b"]);
		// Case-sensitive: "A" and "a" are different tags.
		assert_eq!(dedupe_tags(parse_tags("A,a,A")), vec!["A", "a"]);
	}
}
