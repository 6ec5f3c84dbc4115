/* src/store/backend/file.rs */

use super::super::{KeyValue, StoreError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// A durable store keeping one file per key under a root directory.
///
/// Writes go to a sibling temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileKv {
	root: PathBuf,
}

impl FileKv {
	/// Create a new FileKv rooted at the given path. The directory is created on first write.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Maps a key to a file directly inside the root.
	fn resolve(&self, key: &str) -> Result<PathBuf, StoreError> {
		let mut components = Path::new(key).components();
		match (components.next(), components.next()) {
			(Some(Component::Normal(_)), None) if !key.contains(['/', '\\']) => {
				Ok(self.root.join(key))
			}
			_ => Err(StoreError::InvalidKey(key.to_string())),
		}
	}
}

#[async_trait]
impl KeyValue for FileKv {
	async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		let path = self.resolve(key)?;
		match fs::read_to_string(&path).await {
			Ok(value) => Ok(Some(value)),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
			Err(e) => Err(StoreError::Io(e)),
		}
	}

	async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
		let path = self.resolve(key)?;
		fs::create_dir_all(&self.root).await?;
		let tmp = self.root.join(format!(".{key}.tmp"));
		fs::write(&tmp, value).await?;
		fs::rename(&tmp, &path).await?;
		Ok(())
	}

	async fn remove(&self, key: &str) -> Result<(), StoreError> {
		let path = self.resolve(key)?;
		match fs::remove_file(&path).await {
			Ok(()) => Ok(()),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
			Err(e) => Err(StoreError::Io(e)),
		}
	}
}
