/* src/gallery/error.rs */

use thiserror::Error;

use crate::config::ConfigError;
use crate::encode::EncodeError;
use crate::store::StoreError;

/// Errors surfaced by [`Gallery`](super::Gallery) operations.
#[derive(Debug, Error)]
pub enum GalleryError {
	/// The upload could not be read or encoded. Nothing was changed.
	#[error("Encode error: {0}")]
	Encode(#[from] EncodeError),

	/// The store rejected the write. The record is already in memory.
	#[error("Store error: {0}")]
	Store(#[from] StoreError),

	#[error("Config error: {0}")]
	Config(#[from] ConfigError),

	#[error("Wallpaper not found: {id}")]
	NotFound { id: String },

	#[error("Builder error: {0}")]
	Builder(String),
}
