/* src/store/error.rs */

/// Core error type for the persistent store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	/// IO error from a backend.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// The stored value could not be parsed as a record list.
	#[error("parse error: {0}")]
	Parse(String),

	/// The record list could not be serialized.
	#[error("serialize error: {0}")]
	Serialize(String),

	/// The backend refused the write because it would exceed its capacity.
	#[error("quota exceeded: {needed} bytes needed, {quota} allowed")]
	QuotaExceeded { needed: usize, quota: usize },

	/// The key cannot be mapped onto the backend safely.
	#[error("invalid key: {0}")]
	InvalidKey(String),
}
