/* src/encode/blob/mod.rs */

mod memory;
pub use memory::MemoryBlob;

#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "fs")]
pub use file::FileBlob;
