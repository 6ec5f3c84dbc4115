/* src/store/backend/mod.rs */

mod memory;
pub use memory::MemoryKv;

#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "fs")]
pub use file::FileKv;
