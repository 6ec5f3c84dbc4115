/* src/encode/blob/file.rs */

use super::super::{Blob, EncodeError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// A blob backed by a file on disk, read with `tokio::fs`.
#[derive(Debug, Clone)]
pub struct FileBlob {
	path: PathBuf,
	name: String,
}

impl FileBlob {
	/// The blob name is the path's file name, or the whole path if it has none.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let name = path
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_else(|| path.to_string_lossy().into_owned());
		Self { path, name }
	}
}

#[async_trait]
impl Blob for FileBlob {
	fn name(&self) -> &str {
		&self.name
	}

	async fn read(&self) -> Result<Vec<u8>, EncodeError> {
		fs::read(&self.path).await.map_err(EncodeError::Io)
	}
}
