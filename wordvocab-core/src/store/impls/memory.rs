//! In-process [`VocabStore`](super::super::VocabStore) holding the serialized vocabulary as a string.

use tracing::debug;

use super::super::{StoreError, VocabStore};
use crate::tokenizer::Vocab;

/// A single string slot, like one key of a browser's local storage.
///
/// The vocabulary is kept serialized so loads go through the same parsing (and the same
/// malformed-data handling) as durable stores.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    /// An empty store: `load` returns `None`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with arbitrary (possibly malformed) contents.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryStore {
            raw: Some(raw.into()),
        }
    }

    /// The stored JSON, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl VocabStore for MemoryStore {
    fn load(&self) -> Result<Option<Vocab>, StoreError> {
        self.raw
            .as_deref()
            .map(|raw| serde_json::from_str(raw).map_err(StoreError::malformed))
            .transpose()
    }

    fn save(&mut self, vocab: &Vocab) -> Result<(), StoreError> {
        let raw = serde_json::to_string(vocab).map_err(StoreError::Serialize)?;
        debug!(tokens = vocab.len(), bytes = raw.len(), "saved vocabulary in memory");
        self.raw = Some(raw);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.raw = None;
        Ok(())
    }
}
