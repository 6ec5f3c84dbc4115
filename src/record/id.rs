/* src/record/id.rs */

use rand::Rng;
use rand::distributions::Alphanumeric;

const SUFFIX_LEN: usize = 6;

/// Builds an upload identifier of the form `<millis>-<suffix>`.
///
/// The suffix is lowercase alphanumeric. Uniqueness against an existing
/// collection is the caller's job.
pub fn generate_id(created_at: i64) -> String {
	let suffix: String = rand::thread_rng()
		.sample_iter(&Alphanumeric)
		.take(SUFFIX_LEN)
		.map(|b| char::from(b).to_ascii_lowercase())
		.collect();
	format!("{created_at}-{suffix}")
}

/// Returns true if `id` has the shape produced by [`generate_id`].
pub fn is_generated_id(id: &str) -> bool {
	let Some((millis, suffix)) = id.split_once('-') else {
		return false;
	};
	millis.parse::<i64>().is_ok()
		&& suffix.len() == SUFFIX_LEN
		&& suffix
			.chars()
			.all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}
