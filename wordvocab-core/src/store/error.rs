//! Errors produced by vocabulary stores.

use thiserror::Error;

/// Errors produced by a [`VocabStore`](super::VocabStore).
///
/// # Variants
///
/// - **Io**: Reading, writing or removing the backing storage failed.
///   *When*: Any store operation on a file-backed store.
///   *Recovery*: Check the path and permissions. On `load` the tokenizer treats this as "nothing stored".
///
/// - **Malformed**: Stored data exists but is not a valid token → id mapping (bad JSON, non-integer
///   ids, gaps or duplicate ids).
///   *When*: During `load`.
///   *Recovery*: None needed; the tokenizer starts from a fresh vocabulary and overwrites the data on the next save.
///
/// - **Serialize**: The vocabulary could not be encoded as JSON.
///   *When*: During `save`.
///   *Recovery*: Should not happen for a string → integer map; report it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error on the backing storage.
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data could not be read back as a vocabulary.
    #[error("store: malformed vocabulary: {0}")]
    Malformed(String),

    /// The vocabulary could not be serialized.
    #[error("store: failed to serialize vocabulary: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    /// Wraps a JSON decoding failure as [`StoreError::Malformed`].
    pub(crate) fn malformed(e: serde_json::Error) -> Self {
        StoreError::Malformed(e.to_string())
    }
}
