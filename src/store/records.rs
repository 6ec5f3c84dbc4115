/* src/store/records.rs */

use super::{KeyValue, LoadResult, StoreError};
use crate::record::WallpaperRecord;

/// Key used when no namespace is configured.
pub const DEFAULT_NAMESPACE: &str = "style-thread.wallpapers";

/// Stores the uploaded record list as one JSON array under a single key.
///
/// Appends are read-modify-write without isolation. Two stores writing the
/// same key concurrently can lose records.
pub struct RecordStore {
	backend: Box<dyn KeyValue>,
	namespace: String,
}

impl RecordStore {
	pub fn new(backend: impl KeyValue + 'static, namespace: impl Into<String>) -> Self {
		Self {
			backend: Box::new(backend),
			namespace: namespace.into(),
		}
	}

	pub fn from_boxed(backend: Box<dyn KeyValue>, namespace: impl Into<String>) -> Self {
		Self {
			backend,
			namespace: namespace.into(),
		}
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Loads the persisted records.
	///
	/// A missing entry, an unreadable entry and an unparseable entry all load
	/// as an empty list. Never fails.
	pub async fn load(&self) -> Vec<WallpaperRecord> {
		match self.read().await {
			LoadResult::Ok(records) => records,
			LoadResult::NotFound => Vec::new(),
			LoadResult::Invalid(_e) => {
				#[cfg(feature = "logging")]
				log::warn!(
					"Ignoring unreadable wallpaper list under '{}': {}",
					self.namespace,
					_e
				);
				Vec::new()
			}
		}
	}

	/// Appends `record` to the persisted list and writes the whole list back.
	pub async fn append(&self, record: &WallpaperRecord) -> Result<(), StoreError> {
		let mut records = self.load().await;
		records.push(record.clone());
		let raw =
			serde_json::to_string(&records).map_err(|e| StoreError::Serialize(e.to_string()))?;
		self.backend.set(&self.namespace, raw).await
	}

	/// Reads and parses the namespaced entry without swallowing anything.
	pub async fn read(&self) -> LoadResult<Vec<WallpaperRecord>> {
		let raw = match self.backend.get(&self.namespace).await {
			Ok(Some(raw)) => raw,
			Ok(None) => return LoadResult::NotFound,
			Err(e) => return LoadResult::Invalid(e),
		};

		match serde_json::from_str(&raw) {
			Ok(records) => LoadResult::Ok(records),
			Err(e) => LoadResult::Invalid(StoreError::Parse(e.to_string())),
		}
	}
}

impl std::fmt::Debug for RecordStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RecordStore")
			.field("namespace", &self.namespace)
			.finish_non_exhaustive()
	}
}
