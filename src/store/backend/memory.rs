/* src/store/backend/memory.rs */

use super::super::{KeyValue, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An in-process key-value store.
///
/// Clones share the same map, so a second gallery opened on a clone sees
/// everything the first one wrote. An optional quota caps the total number
/// of key and value bytes, mimicking browser storage limits.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
	data: Arc<Mutex<BTreeMap<String, String>>>,
	quota: Option<usize>,
}

impl MemoryKv {
	/// Creates a new empty store without a quota.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a new empty store that rejects writes past `quota` bytes.
	pub fn with_quota(quota: usize) -> Self {
		Self {
			data: Arc::default(),
			quota: Some(quota),
		}
	}

	/// Inserts a raw value, bypassing the quota.
	pub fn insert(&self, key: &str, value: impl Into<String>) {
		self.lock().insert(key.to_string(), value.into());
	}

	/// Returns the raw value stored under `key`.
	pub fn raw(&self, key: &str) -> Option<String> {
		self.lock().get(key).cloned()
	}

	/// Total bytes currently held, keys included.
	pub fn used_bytes(&self) -> usize {
		usage(&self.lock())
	}

	fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
		// No invariant spans a panic here, so a poisoned map is still usable.
		self.data.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

fn usage(map: &BTreeMap<String, String>) -> usize {
	map.iter().map(|(k, v)| k.len() + v.len()).sum()
}

#[async_trait]
impl KeyValue for MemoryKv {
	async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.lock().get(key).cloned())
	}

	async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
		let mut map = self.lock();
		if let Some(quota) = self.quota {
			let previous = map.get(key).map_or(0, |v| key.len() + v.len());
			let needed = usage(&map) - previous + key.len() + value.len();
			if needed > quota {
				return Err(StoreError::QuotaExceeded { needed, quota });
			}
		}
		map.insert(key.to_string(), value);
		Ok(())
	}

	async fn remove(&self, key: &str) -> Result<(), StoreError> {
		self.lock().remove(key);
		Ok(())
	}
}
