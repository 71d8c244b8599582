//! Implementations of [`VocabStore`](super::VocabStore).
//!
//! One file per implementation: [`memory`] keeps the serialized vocabulary in process,
//! [`file`] writes it to a JSON file.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
