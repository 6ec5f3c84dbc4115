/* tests/store_tests.rs */

use style_thread::WallpaperRecord;
use style_thread::store::{KeyValue, LoadResult, MemoryKv, RecordStore, StoreError};

const NS: &str = "style-thread.wallpapers";

fn record(id: &str, created_at: i64) -> WallpaperRecord {
	WallpaperRecord {
		id: id.to_string(),
		src: "data:image/png;base64,AAAA".to_string(),
		title: format!("Title {id}"),
		description: "desc".to_string(),
		tags: vec!["a".to_string()],
		created_at,
	}
}

#[tokio::test]
async fn test_load_missing_is_empty() {
	let store = RecordStore::new(MemoryKv::new(), NS);
	assert!(store.load().await.is_empty());
	assert!(matches!(store.read().await, LoadResult::NotFound));
}

#[tokio::test]
async fn test_append_then_load() {
	let kv = MemoryKv::new();
	let store = RecordStore::new(kv.clone(), NS);

	store.append(&record("u1", 10)).await.unwrap();
	store.append(&record("u2", 20)).await.unwrap();

	let loaded = store.load().await;
	assert_eq!(loaded, vec![record("u1", 10), record("u2", 20)]);

	// One JSON array under the namespace key.
	let raw: serde_json::Value = serde_json::from_str(&kv.raw(NS).unwrap()).unwrap();
	assert_eq!(raw.as_array().unwrap().len(), 2);
	assert_eq!(raw[1]["createdAt"], 20);
}

#[tokio::test]
async fn test_load_is_idempotent() {
	let store = RecordStore::new(MemoryKv::new(), NS);
	store.append(&record("u1", 10)).await.unwrap();
	store.append(&record("u2", 10)).await.unwrap();

	assert_eq!(store.load().await, store.load().await);
}

#[tokio::test]
async fn test_corrupt_entry_loads_empty() {
	let kv = MemoryKv::new();
	kv.insert(NS, "{not json");
	let store = RecordStore::new(kv.clone(), NS);

	assert!(store.load().await.is_empty());
	assert!(matches!(
		store.read().await,
		LoadResult::Invalid(StoreError::Parse(_))
	));

	// Appending over a corrupt entry starts a fresh list.
	store.append(&record("u1", 10)).await.unwrap();
	assert_eq!(store.load().await, vec![record("u1", 10)]);
}

#[tokio::test]
async fn test_wrong_shape_loads_empty() {
	let kv = MemoryKv::new();
	kv.insert(NS, r#"{"id": "not-a-list"}"#);
	let store = RecordStore::new(kv, NS);
	assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn test_namespaces_are_isolated() {
	let kv = MemoryKv::new();
	let a = RecordStore::new(kv.clone(), "a");
	let b = RecordStore::new(kv.clone(), "b");

	a.append(&record("u1", 1)).await.unwrap();
	assert_eq!(a.load().await.len(), 1);
	assert!(b.load().await.is_empty());
}

#[tokio::test]
async fn test_quota_rejects_write() {
	let kv = MemoryKv::with_quota(64);
	let store = RecordStore::new(kv.clone(), NS);

	let err = store.append(&record("u1", 1)).await.unwrap_err();
	match err {
		StoreError::QuotaExceeded { needed, quota } => {
			assert_eq!(quota, 64);
			assert!(needed > 64);
		}
		other => panic!("Expected QuotaExceeded, got {other:?}"),
	}
	assert!(kv.raw(NS).is_none());
	assert_eq!(kv.used_bytes(), 0);
}

#[tokio::test]
async fn test_memory_kv_remove() {
	let kv = MemoryKv::new();
	kv.set("k", "v".to_string()).await.unwrap();
	assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("v"));
	kv.remove("k").await.unwrap();
	kv.remove("k").await.unwrap();
	assert_eq!(kv.get("k").await.unwrap(), None);
}

#[cfg(feature = "fs")]
mod file_kv {
	use super::*;
	use style_thread::store::FileKv;

	#[tokio::test]
	async fn test_file_kv_round_trip() -> Result<(), Box<dyn std::error::Error>> {
		let dir = tempfile::tempdir()?;
		let kv = FileKv::new(dir.path().join("nested"));

		assert_eq!(kv.get("missing").await?, None);
		kv.set("k", "v1".to_string()).await?;
		kv.set("k", "v2".to_string()).await?;
		assert_eq!(kv.get("k").await?.as_deref(), Some("v2"));

		kv.remove("k").await?;
		kv.remove("k").await?;
		assert_eq!(kv.get("k").await?, None);
		Ok(())
	}

	#[tokio::test]
	async fn test_file_kv_rejects_traversal() {
		let dir = tempfile::tempdir().unwrap();
		let kv = FileKv::new(dir.path());

		for key in ["../escape", "a/b", "..", ".", ""] {
			assert!(
				matches!(kv.get(key).await, Err(StoreError::InvalidKey(_))),
				"key {key:?} should be rejected"
			);
		}
	}

	#[tokio::test]
	async fn test_record_store_on_disk() -> Result<(), Box<dyn std::error::Error>> {
		let dir = tempfile::tempdir()?;

		let store = RecordStore::new(FileKv::new(dir.path()), NS);
		store.append(&record("u1", 10)).await?;

		// A second handle on the same directory sees the write.
		let reopened = RecordStore::new(FileKv::new(dir.path()), NS);
		assert_eq!(reopened.load().await, vec![record("u1", 10)]);

		tokio::fs::write(dir.path().join(NS), b"\xff\xfe garbage").await?;
		assert!(reopened.load().await.is_empty());
		Ok(())
	}
}
