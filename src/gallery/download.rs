/* src/gallery/download.rs */

use super::{Gallery, GalleryError};
use crate::encode::data_url::extension_for;
use crate::encode::{self, ImageSource};

/// What the "Download Wallpaper" action should serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Download {
	/// A seed image; the host serves the asset at `path`.
	Asset { path: String },
	/// An uploaded image decoded back to its bytes.
	File {
		file_name: String,
		mime: String,
		bytes: Vec<u8>,
	},
}

impl Gallery {
	/// Resolves the image behind record `id` for downloading.
	pub fn download(&self, id: &str) -> Result<Download, GalleryError> {
		let record = self.get(id).ok_or_else(|| GalleryError::NotFound {
			id: id.to_string(),
		})?;

		match encode::decode(&record.src)? {
			ImageSource::Asset(path) => Ok(Download::Asset { path }),
			ImageSource::Embedded { mime, bytes } => {
				let stem = file_stem(&record.title).unwrap_or_else(|| record.id.clone());
				Ok(Download::File {
					file_name: format!("{stem}.{}", extension_for(&mime)),
					mime,
					bytes,
				})
			}
		}
	}
}

/// A file-system friendly version of `title`, or `None` if nothing usable remains.
fn file_stem(title: &str) -> Option<String> {
	let stem: String = title
		.trim()
		.chars()
		.map(|c| {
			if c.is_alphanumeric() || matches!(c, '-' | '_' | ' ') {
				c
			} else {
				'_'
			}
		})
		.collect();
	let stem = stem.trim_matches(|c| c == '_' || c == ' ');
	(!stem.is_empty()).then(|| stem.to_string())
}

#[cfg(test)]
mod tests {
	use super::file_stem;

	#[test]
	fn test_file_stem() {
		assert_eq!(file_stem("Neon City"), Some("Neon City".to_string()));
		assert_eq!(file_stem("a/b:c"), Some("a_b_c".to_string()));
		assert_eq!(file_stem(" ../ "), None);
		assert_eq!(file_stem(""), None);
	}
}
