/* src/gallery/builder.rs */

use std::collections::HashSet;

use validator::Validate;

use super::{Gallery, GalleryError};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, GalleryConfig};
use crate::record::WallpaperRecord;
use crate::seed::default_seeds;
use crate::store::{KeyValue, RecordStore};

/// Builder for [`Gallery`].
pub struct GalleryBuilder {
	backend: Option<Box<dyn KeyValue>>,
	seeds: Option<Vec<WallpaperRecord>>,
	clock: Option<Box<dyn Clock>>,
	config: GalleryConfig,
}

impl GalleryBuilder {
	pub fn new() -> Self {
		Self {
			backend: None,
			seeds: None,
			clock: None,
			config: GalleryConfig::default(),
		}
	}

	pub fn backend(mut self, backend: impl KeyValue + 'static) -> Self {
		self.backend = Some(Box::new(backend));
		self
	}

	/// Replaces the built-in seeds. Takes precedence over `config.seeds`.
	pub fn seeds(mut self, seeds: Vec<WallpaperRecord>) -> Self {
		self.seeds = Some(seeds);
		self
	}

	pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
		self.clock = Some(Box::new(clock));
		self
	}

	pub fn config(mut self, config: GalleryConfig) -> Self {
		self.config = config;
		self
	}

	/// Validates the settings and loads the persisted records once.
	pub async fn open(self) -> Result<Gallery, GalleryError> {
		self.config.validate().map_err(ConfigError::from)?;
		let backend = self
			.backend
			.ok_or_else(|| GalleryError::Builder("backend is required".to_string()))?;

		let seeds = match self.seeds {
			Some(seeds) => seeds,
			None if self.config.seeds => default_seeds(),
			None => Vec::new(),
		};

		let store = RecordStore::from_boxed(backend, self.config.namespace.clone());
		let persisted = store.load().await;

		let mut gallery = Gallery {
			records: Vec::with_capacity(seeds.len() + persisted.len()),
			ids: HashSet::new(),
			seed_count: 0,
			last_upload_at: i64::MIN,
			store,
			clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
			dedupe_tags: self.config.dedupe_tags,
		};

		for record in seeds {
			if gallery.push_unique(record) {
				gallery.seed_count += 1;
			}
		}
		for record in persisted {
			let created_at = record.created_at;
			if gallery.push_unique(record) {
				gallery.last_upload_at = gallery.last_upload_at.max(created_at);
			}
		}

		#[cfg(feature = "logging")]
		log::info!(
			"Opened gallery '{}' with {} seed and {} uploaded wallpapers",
			gallery.store.namespace(),
			gallery.seed_count,
			gallery.uploaded_len()
		);

		Ok(gallery)
	}
}

impl Default for GalleryBuilder {
	fn default() -> Self {
		Self::new()
	}
}
