/* src/clock.rs */

//!
//! Wall-clock abstraction used to stamp uploads.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of `createdAt` timestamps in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
	fn now_millis(&self) -> i64;
}

/// The system clock, read through `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_millis(&self) -> i64 {
		chrono::Utc::now().timestamp_millis()
	}
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
	now: Arc<AtomicI64>,
}

impl ManualClock {
	pub fn new(start: i64) -> Self {
		Self {
			now: Arc::new(AtomicI64::new(start)),
		}
	}

	pub fn set(&self, millis: i64) {
		self.now.store(millis, Ordering::SeqCst);
	}

	pub fn advance(&self, millis: i64) {
		self.now.fetch_add(millis, Ordering::SeqCst);
	}
}

impl Clock for ManualClock {
	fn now_millis(&self) -> i64 {
		self.now.load(Ordering::SeqCst)
	}
}
