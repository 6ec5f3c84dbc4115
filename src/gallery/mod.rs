/* src/gallery/mod.rs */

//!
//! The wallpaper collection: seeds plus uploads, searchable and persisted.
//!
//! A [`Gallery`] is opened once per session and owned by whoever renders it.
//! Uploads go to memory first and to the store second; if the store write
//! fails the upload stays visible until the next reload.

mod builder;
mod download;
mod error;
mod search;
mod upload;

pub use builder::GalleryBuilder;
pub use download::Download;
pub use error::GalleryError;
pub use upload::Upload;

use std::collections::HashSet;

use crate::clock::Clock;
use crate::encode;
use crate::record::{WallpaperRecord, dedupe_tags, generate_id, parse_tags};
use crate::store::RecordStore;

/// In-memory wallpaper collection backed by a [`RecordStore`].
pub struct Gallery {
	/// Seeds first, then persisted uploads in stored order, then new uploads.
	records: Vec<WallpaperRecord>,
	ids: HashSet<String>,
	seed_count: usize,
	/// Timestamp of the newest upload, so a clock stepping back cannot reorder uploads.
	last_upload_at: i64,
	store: RecordStore,
	clock: Box<dyn Clock>,
	dedupe_tags: bool,
}

impl Gallery {
	pub fn builder() -> GalleryBuilder {
		GalleryBuilder::new()
	}

	/// Encodes and stores a new upload, returning the created record.
	///
	/// On an encode failure nothing changes. On a store failure the record has
	/// already been added in memory and stays there; the error only reports
	/// that it will be missing after a reload.
	pub async fn add(&mut self, upload: Upload) -> Result<WallpaperRecord, GalleryError> {
		let src = encode::encode(upload.blob.as_ref()).await?;

		let title = if upload.title.trim().is_empty() {
			upload.blob.name().to_string()
		} else {
			upload.title
		};

		let mut tags = parse_tags(&upload.tags_text);
		if self.dedupe_tags {
			tags = dedupe_tags(tags);
		}

		let created_at = self.clock.now_millis().max(self.last_upload_at);
		let record = WallpaperRecord {
			id: self.fresh_id(created_at),
			src,
			title,
			description: upload.description,
			tags,
			created_at,
		};

		self.last_upload_at = created_at;
		self.push_unique(record.clone());

		if let Err(e) = self.store.append(&record).await {
			#[cfg(feature = "logging")]
			log::error!(
				"Wallpaper '{}' is shown but was not persisted: {}",
				record.id,
				e
			);
			return Err(e.into());
		}

		#[cfg(feature = "logging")]
		log::debug!("Stored wallpaper '{}' ({})", record.id, record.title);

		Ok(record)
	}

	/// Records whose title, description or a tag contains `query`, ignoring
	/// case, newest first. A blank query returns everything.
	pub fn search(&self, query: &str) -> Vec<&WallpaperRecord> {
		search::search(&self.records, query)
	}

	/// All records, newest first.
	pub fn list(&self) -> Vec<&WallpaperRecord> {
		self.search("")
	}

	pub fn get(&self, id: &str) -> Option<&WallpaperRecord> {
		self.records.iter().find(|record| record.id == id)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn seed_len(&self) -> usize {
		self.seed_count
	}

	/// Number of uploaded records, persisted or not.
	pub fn uploaded_len(&self) -> usize {
		self.records.len() - self.seed_count
	}

	pub fn store(&self) -> &RecordStore {
		&self.store
	}

	/// Adds `record` unless its id is taken. Returns whether it was added.
	fn push_unique(&mut self, record: WallpaperRecord) -> bool {
		if !self.ids.insert(record.id.clone()) {
			#[cfg(feature = "logging")]
			log::warn!("Skipping wallpaper with duplicate id '{}'", record.id);
			return false;
		}
		self.records.push(record);
		true
	}

	fn fresh_id(&self, created_at: i64) -> String {
		loop {
			let id = generate_id(created_at);
			if !self.ids.contains(&id) {
				return id;
			}
		}
	}
}

impl std::fmt::Debug for Gallery {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Gallery")
			.field("store", &self.store)
			.field("seeds", &self.seed_count)
			.field("uploads", &self.uploaded_len())
			.field("dedupe_tags", &self.dedupe_tags)
			.finish_non_exhaustive()
	}
}
