/* src/encode/blob/memory.rs */

use super::super::{Blob, EncodeError};
use async_trait::async_trait;

/// An in-memory blob, e.g. bytes already received from a form upload.
#[derive(Debug, Clone)]
pub struct MemoryBlob {
	name: String,
	bytes: Vec<u8>,
}

impl MemoryBlob {
	/// Creates a blob from a file name and its bytes.
	pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			name: name.into(),
			bytes: bytes.into(),
		}
	}
}

#[async_trait]
impl Blob for MemoryBlob {
	fn name(&self) -> &str {
		&self.name
	}

	async fn read(&self) -> Result<Vec<u8>, EncodeError> {
		Ok(self.bytes.clone())
	}
}
