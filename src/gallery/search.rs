/* src/gallery/search.rs */

use std::cmp::Reverse;

use crate::record::WallpaperRecord;

/// Filters `records` by `query` and orders the hits newest first.
///
/// A blank query keeps everything. The sort is stable, so records sharing a
/// timestamp keep their collection order.
pub(crate) fn search<'a>(records: &'a [WallpaperRecord], query: &str) -> Vec<&'a WallpaperRecord> {
	let mut hits: Vec<&WallpaperRecord> = if query.trim().is_empty() {
		records.iter().collect()
	} else {
		let needle = query.to_lowercase();
		records
			.iter()
			.filter(|record| record.matches_lowercase(&needle))
			.collect()
	};
	hits.sort_by_key(|record| Reverse(record.created_at));
	hits
}
