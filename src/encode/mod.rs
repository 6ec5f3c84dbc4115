/* src/encode/mod.rs */

//!
//! Turns uploaded image blobs into self-describing data URLs and back.

pub mod blob;
pub mod data_url;
pub mod error;

pub use blob::MemoryBlob;
pub use error::EncodeError;

#[cfg(feature = "fs")]
pub use blob::FileBlob;

use async_trait::async_trait;

/// An uploaded file: a name plus bytes that may take I/O to produce.
#[async_trait]
pub trait Blob: Send + Sync {
	/// Original file name, used for the default title and MIME fallback.
	fn name(&self) -> &str;

	/// Read the full contents.
	async fn read(&self) -> Result<Vec<u8>, EncodeError>;
}

/// Where a record's image lives once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
	/// A path resolved by the hosting environment.
	Asset(String),
	/// Image bytes embedded in the record itself.
	Embedded { mime: String, bytes: Vec<u8> },
}

/// Reads `blob` and encodes it as `data:<mime>;base64,<payload>`.
///
/// Read failures are returned as-is. No size limit is applied.
pub async fn encode<B>(blob: &B) -> Result<String, EncodeError>
where
	B: Blob + ?Sized,
{
	let bytes = blob.read().await?;
	let mime = data_url::sniff_mime(blob.name(), &bytes);
	Ok(data_url::to_data_url(mime, &bytes))
}

/// Interprets a record `src`: data URLs are decoded, anything else is an asset path.
pub fn decode(src: &str) -> Result<ImageSource, EncodeError> {
	if !src.starts_with("data:") {
		return Ok(ImageSource::Asset(src.to_string()));
	}
	let (mime, bytes) = data_url::from_data_url(src)?;
	Ok(ImageSource::Embedded { mime, bytes })
}
