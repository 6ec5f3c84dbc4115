/* tests/encode_tests.rs */

use style_thread::encode::{self, EncodeError, ImageSource, MemoryBlob};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

#[tokio::test]
async fn test_encode_memory_blob() {
	let blob = MemoryBlob::new("neon.png", PNG_MAGIC);
	let src = encode::encode(&blob).await.unwrap();
	assert!(src.starts_with("data:image/png;base64,"));

	match encode::decode(&src).unwrap() {
		ImageSource::Embedded { mime, bytes } => {
			assert_eq!(mime, "image/png");
			assert_eq!(bytes, PNG_MAGIC);
		}
		other => panic!("Expected embedded image, got {other:?}"),
	}
}

#[tokio::test]
async fn test_encode_unknown_content_uses_name() {
	let blob = MemoryBlob::new("beach.jpeg", b"raw bytes".to_vec());
	let src = encode::encode(&blob).await.unwrap();
	assert!(src.starts_with("data:image/jpeg;base64,"));
}

#[tokio::test]
async fn test_encode_empty_blob() {
	let blob = MemoryBlob::new("empty", Vec::new());
	let src = encode::encode(&blob).await.unwrap();
	assert_eq!(src, "data:application/octet-stream;base64,");
}

#[test]
fn test_decode_asset_path() {
	assert_eq!(
		encode::decode("/wallpapers/sunset.jpg").unwrap(),
		ImageSource::Asset("/wallpapers/sunset.jpg".to_string())
	);
}

#[test]
fn test_decode_malformed() {
	assert!(matches!(
		encode::decode("data:image/png;base64"),
		Err(EncodeError::MalformedDataUrl(_))
	));
}

#[cfg(feature = "fs")]
mod file_blob {
	use super::*;
	use style_thread::encode::{Blob, FileBlob};

	#[tokio::test]
	async fn test_encode_file_blob() -> Result<(), Box<dyn std::error::Error>> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("city.png");
		tokio::fs::write(&path, PNG_MAGIC).await?;

		let blob = FileBlob::new(&path);
		assert_eq!(blob.name(), "city.png");
		let src = encode::encode(&blob).await?;
		assert!(src.starts_with("data:image/png;base64,"));
		Ok(())
	}

	#[tokio::test]
	async fn test_missing_file_fails() {
		let dir = tempfile::tempdir().unwrap();
		let blob = FileBlob::new(dir.path().join("gone.png"));
		let err = encode::encode(&blob).await.unwrap_err();
		assert!(matches!(err, EncodeError::Io(_)));
	}
}
