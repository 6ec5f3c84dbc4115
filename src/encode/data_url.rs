/* src/encode/data_url.rs */

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

use super::EncodeError;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// MIME type used when neither the content nor the name identifies the image.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Picks a MIME type from magic bytes first, then the file name's extension.
pub fn sniff_mime(name: &str, bytes: &[u8]) -> &'static str {
	if let Ok(format) = image::guess_format(bytes) {
		return format.to_mime_type();
	}
	Path::new(name)
		.extension()
		.and_then(ImageFormat::from_extension)
		.map(|format| format.to_mime_type())
		.unwrap_or(FALLBACK_MIME)
}

/// Preferred file extension for a MIME type, without the dot.
pub fn extension_for(mime: &str) -> &'static str {
	ImageFormat::from_mime_type(mime)
		.and_then(|format| format.extensions_str().first().copied())
		.unwrap_or("bin")
}

pub(crate) fn to_data_url(mime: &str, bytes: &[u8]) -> String {
	format!("{SCHEME}{mime}{BASE64_MARKER},{}", STANDARD.encode(bytes))
}

/// Splits a data URL into its MIME type and decoded payload.
pub(crate) fn from_data_url(src: &str) -> Result<(String, Vec<u8>), EncodeError> {
	let rest = src
		.strip_prefix(SCHEME)
		.ok_or(EncodeError::MalformedDataUrl("missing data: scheme"))?;
	let (header, payload) = rest
		.split_once(',')
		.ok_or(EncodeError::MalformedDataUrl("missing ',' separator"))?;
	let mime = header
		.strip_suffix(BASE64_MARKER)
		.ok_or(EncodeError::MalformedDataUrl("payload is not base64"))?;
	let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
	let bytes = STANDARD.decode(payload)?;
	Ok((mime.to_string(), bytes))
}
