//! Vocabulary persistence.
//!
//! This module defines the **trait** ([`VocabStore`]) and **error** ([`StoreError`]).
//! Implementations live in the `impls` submodule: [`MemoryStore`] for tests and embedding,
//! [`FileStore`] for a JSON file on disk. Only the forward `{ token: id }` mapping is stored;
//! the inverse and the next id are derived on load.

mod error;
mod impls;

pub use error::StoreError;
pub use impls::{FileStore, MemoryStore};

use crate::tokenizer::Vocab;

/// Load/save contract between a tokenizer and whatever keeps its vocabulary across sessions.
///
/// The tokenizer calls [`load`](VocabStore::load) once at construction and
/// [`save`](VocabStore::save) after every vocabulary mutation. [`clear`](VocabStore::clear)
/// is for the surrounding application's reset action.
pub trait VocabStore {
    /// Returns the stored vocabulary, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// [`StoreError::Malformed`] when stored data is not a valid mapping, [`StoreError::Io`]
    /// when the backing storage cannot be read.
    fn load(&self) -> Result<Option<Vocab>, StoreError>;

    /// Replaces the stored vocabulary.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the vocabulary could not be written.
    fn save(&mut self, vocab: &Vocab) -> Result<(), StoreError>;

    /// Removes the stored vocabulary. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if existing data could not be removed.
    fn clear(&mut self) -> Result<(), StoreError>;
}

impl<S: VocabStore + ?Sized> VocabStore for &mut S {
    fn load(&self) -> Result<Option<Vocab>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, vocab: &Vocab) -> Result<(), StoreError> {
        (**self).save(vocab)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
