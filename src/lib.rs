/* src/lib.rs */

//!
//! Wallpaper collection manager for the Style Thread gallery.
//!
//! This crate integrates four components:
//!
//! - **encode**: Turns uploaded image blobs into data URLs and back.
//! - **store**: Persists uploads as one JSON list under a namespaced key.
//! - **gallery**: Merges seeds with uploads, searches them and keeps the store in step (`Gallery`).
//! - **config**: Gallery settings from JSON, TOML or YAML.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `fs`: File-backed store (`FileKv`) and file blobs (`FileBlob`) via `tokio::fs`.
//! - `logging`: Emits diagnostics through the `log` facade.
//!
//! ## Basic Usage
//!
//! See `demos/gallery.rs` for a complete example.

pub mod clock;
pub mod config;
pub mod encode;
pub mod gallery;
pub mod record;
pub mod seed;
pub mod store;

pub use config::GalleryConfig;
pub use gallery::{Download, Gallery, GalleryBuilder, GalleryError, Upload};
pub use record::WallpaperRecord;
