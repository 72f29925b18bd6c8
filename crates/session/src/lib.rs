//! Session stores for the book club client.
//!
//! The file store is what the CLI uses; the memory store backs tests and
//! embedders that do not want anything on disk.

mod file_store;
mod memory_store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
