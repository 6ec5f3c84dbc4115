/* src/record/mod.rs */

//!
//! The wallpaper record shared by seeds, uploads and the persisted store.

mod id;
mod tags;

pub use id::{generate_id, is_generated_id};
pub use tags::{dedupe_tags, parse_tags};

use serde::{Deserialize, Serialize};

/// A single wallpaper entry.
///
/// The serialized shape is the persisted one: `createdAt` is camel-cased and
/// `description`/`tags` may be omitted by older writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperRecord {
	/// Unique, opaque identifier.
	pub id: String,
	/// Static asset path for seeds, data URL for uploads.
	pub src: String,
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub tags: Vec<String>,
	/// Milliseconds since the Unix epoch. Only used for ordering.
	pub created_at: i64,
}

impl WallpaperRecord {
	/// Case-insensitive substring match against title, description and each tag.
	///
	/// `needle` must already be lowercased.
	pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
		self.title.to_lowercase().contains(needle)
			|| self.description.to_lowercase().contains(needle)
			|| self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record() -> WallpaperRecord {
		WallpaperRecord {
			id: "s1".to_string(),
			src: "/wallpapers/sunset.jpg".to_string(),
			title: "Sunset Overdrive".to_string(),
			description: "Ocean horizon".to_string(),
			tags: vec!["Warm".to_string(), "sky".to_string()],
			created_at: 100,
		}
	}

	#[test]
	fn test_matches_each_field() {
		let r = record();
		assert!(r.matches_lowercase("overdrive"));
		assert!(r.matches_lowercase("horizon"));
		assert!(r.matches_lowercase("warm"));
		assert!(!r.matches_lowercase("mountain"));
	}

	#[test]
	fn test_no_match_across_field_boundaries() {
		// "overdriveocean" only exists if fields were glued together.
		assert!(!record().matches_lowercase("overdriveocean"));
	}

	#[test]
	fn test_persisted_shape() {
		let json = serde_json::to_value(record()).unwrap();
		assert_eq!(json["createdAt"], 100);
		assert!(json.get("created_at").is_none());

		let sparse: WallpaperRecord =
			serde_json::from_str(r#"{"id":"x","src":"/a.jpg","title":"A","createdAt":5}"#).unwrap();
		assert_eq!(sparse.description, "");
		assert!(sparse.tags.is_empty());
	}
}
