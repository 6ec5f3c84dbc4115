/* src/encode/error.rs */

/// Errors raised while turning blobs into data URLs and back.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
	/// The blob could not be read.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// The string looked like a data URL but did not follow `data:<mime>;base64,<payload>`.
	#[error("malformed data url: {0}")]
	MalformedDataUrl(&'static str),

	/// The payload was not valid base64.
	#[error("base64 error: {0}")]
	Base64(#[from] base64::DecodeError),
}
