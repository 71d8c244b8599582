//! Implementations of [`CorpusLoader`](super::CorpusLoader).
//!
//! One file per implementation: e.g. [`path`] for loading from a file path.

mod path;

pub use path::{load_corpus, PathLoader};
