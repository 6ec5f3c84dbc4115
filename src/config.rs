/* src/config.rs */

//!
//! Gallery settings, parsed from JSON, TOML or YAML text and validated.

use serde::Deserialize;
use validator::Validate;

use crate::store::DEFAULT_NAMESPACE;

/// Errors raised while reading a [`GalleryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Parsing error from the format implementation.
	#[error("parse error: {0}")]
	Parse(String),

	/// The parsed settings are out of range.
	#[error("validation failed: {0}")]
	Validation(#[from] validator::ValidationErrors),
}

/// Settings for a [`Gallery`](crate::gallery::Gallery).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
	/// Key under which the uploaded records are stored.
	#[validate(length(min = 1))]
	pub namespace: String,
	/// Drop repeated tags on upload, keeping the first occurrence.
	pub dedupe_tags: bool,
	/// Include the built-in seed wallpapers.
	pub seeds: bool,
}

impl Default for GalleryConfig {
	fn default() -> Self {
		Self {
			namespace: DEFAULT_NAMESPACE.to_string(),
			dedupe_tags: false,
			seeds: true,
		}
	}
}

/// Text formats a config can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Json,
	Toml,
	Yaml,
}

impl ConfigFormat {
	/// List of supported extensions.
	pub fn extensions(&self) -> &'static [&'static str] {
		match self {
			Self::Json => &["json"],
			Self::Toml => &["toml"],
			Self::Yaml => &["yaml", "yml"],
		}
	}

	/// Picks a format from a file extension, without the dot.
	pub fn from_extension(ext: &str) -> Option<Self> {
		[Self::Json, Self::Toml, Self::Yaml]
			.into_iter()
			.find(|format| format.extensions().iter().any(|e| *e == ext))
	}

	fn parse<T: serde::de::DeserializeOwned>(&self, input: &str) -> Result<T, ConfigError> {
		match self {
			Self::Json => serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string())),
			Self::Toml => toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string())),
			Self::Yaml => serde_yaml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string())),
		}
	}
}

impl GalleryConfig {
	/// Parses and validates a config written in `format`.
	pub fn parse(input: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
		let config: Self = format.parse(input)?;
		config.validate()?;
		Ok(config)
	}
}
