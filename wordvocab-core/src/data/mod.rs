//! Training corpus loading (e.g. one text per line of a file).
//!
//! This module defines the **trait** ([`CorpusLoader`]), the **model** ([`Corpus`]) and the **error** ([`DataError`]).
//! Implementations (e.g. [`PathLoader`] for file paths) are in the `impls` submodule.

mod error;
mod impls;
mod types;

pub use error::DataError;
pub use impls::{load_corpus, PathLoader};
pub use types::Corpus;

/// Trait for loading training texts.
pub trait CorpusLoader {
    /// Loads a corpus. Returns [`Corpus`] or a [`DataError`].
    fn load(&self) -> Result<Corpus, DataError>;
}
