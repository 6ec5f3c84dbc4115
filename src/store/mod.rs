/* src/store/mod.rs */

//!
//! Persistence of uploaded records in a namespaced key-value store.

pub mod backend;
pub mod error;
mod records;

pub use backend::MemoryKv;
pub use error::StoreError;
pub use records::{DEFAULT_NAMESPACE, RecordStore};

#[cfg(feature = "fs")]
pub use backend::FileKv;

use async_trait::async_trait;

/// Result of reading one namespaced entry.
#[derive(Debug)]
pub enum LoadResult<T> {
	/// Successfully read and parsed.
	Ok(T),
	/// Nothing stored under the key.
	NotFound,
	/// Something is stored but it could not be read or parsed.
	Invalid(StoreError),
}

/// A durable, text-only key-value store.
#[async_trait]
pub trait KeyValue: Send + Sync {
	/// Read the value under `key`, `None` if absent.
	async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

	/// Replace the value under `key`.
	async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

	/// Delete the value under `key`. Deleting a missing key is not an error.
	async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
