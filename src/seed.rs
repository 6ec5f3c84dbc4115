/* src/seed.rs */

//!
//! Built-in wallpapers present in every gallery.

use crate::record::WallpaperRecord;

/// The stock wallpapers, shipped as public assets.
///
/// Seeds predate every upload, so their timestamps are small constants and they
/// sort after anything uploaded.
pub fn default_seeds() -> Vec<WallpaperRecord> {
	vec![
		seed(
			"seed-sunset",
			"/wallpapers/sunset.jpg",
			"Sunset Overdrive",
			"A breathtaking sunset view over the ocean horizon.",
			&["sunset", "ocean"],
			2,
		),
		seed(
			"seed-mountain",
			"/wallpapers/mountain.jpg",
			"Mountain Dreams",
			"A scenic mountain range under a starry night sky.",
			&["mountain", "night"],
			1,
		),
	]
}

fn seed(
	id: &str,
	src: &str,
	title: &str,
	description: &str,
	tags: &[&str],
	created_at: i64,
) -> WallpaperRecord {
	WallpaperRecord {
		id: id.to_string(),
		src: src.to_string(),
		title: title.to_string(),
		description: description.to_string(),
		tags: tags.iter().map(|t| t.to_string()).collect(),
		created_at,
	}
}
