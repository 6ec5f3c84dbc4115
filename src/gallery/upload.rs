/* src/gallery/upload.rs */

use crate::encode::Blob;

/// Everything the submission form hands to [`Gallery::add`](super::Gallery::add).
pub struct Upload {
	pub blob: Box<dyn Blob>,
	/// Falls back to the blob name when blank.
	pub title: String,
	pub description: String,
	/// Comma-separated tags, e.g. `"night, neon"`.
	pub tags_text: String,
}

impl Upload {
	pub fn new(blob: impl Blob + 'static) -> Self {
		Self {
			blob: Box::new(blob),
			title: String::new(),
			description: String::new(),
			tags_text: String::new(),
		}
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn tags(mut self, tags_text: impl Into<String>) -> Self {
		self.tags_text = tags_text.into();
		self
	}
}

impl std::fmt::Debug for Upload {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Upload")
			.field("blob", &self.blob.name())
			.field("title", &self.title)
			.field("description", &self.description)
			.field("tags_text", &self.tags_text)
			.finish()
	}
}
