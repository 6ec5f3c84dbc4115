/* demos/gallery.rs */

use style_thread::encode::FileBlob;
use style_thread::store::FileKv;
use style_thread::{Download, Gallery, Upload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a scratch directory with one "uploaded" image
	let dir = std::env::temp_dir().join("style-thread-demo");
	tokio::fs::create_dir_all(&dir).await?;
	let image_path = dir.join("neon.png");
	tokio::fs::write(&image_path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").await?;
	println!("Created {}", image_path.display());

	// 1. Open the gallery on a file-backed store
	let mut gallery = Gallery::builder()
		.backend(FileKv::new(dir.join("storage")))
		.open()
		.await?;
	println!(
		"Opened with {} seeds and {} uploads",
		gallery.seed_len(),
		gallery.uploaded_len()
	);

	// 2. Upload
	let record = gallery
		.add(
			Upload::new(FileBlob::new(&image_path))
				.description("City lights after rain")
				.tags("neon, night, city"),
		)
		.await?;
	println!("Added '{}' as {}", record.title, record.id);

	// 3. Search
	for hit in gallery.search("night") {
		println!("  {:>15}  {}", hit.created_at, hit.title);
	}

	// 4. Download
	match gallery.download(&record.id)? {
		Download::File {
			file_name, bytes, ..
		} => println!("Download {} ({} bytes)", file_name, bytes.len()),
		Download::Asset { path } => println!("Download asset {}", path),
	}

	// Cleanup
	tokio::fs::remove_dir_all(&dir).await?;
	println!("Done.");
	Ok(())
}
