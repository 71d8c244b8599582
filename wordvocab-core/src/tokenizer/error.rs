//! Errors produced when building, loading or training a tokenizer.
//!
//! Encode and decode never fail: unseen tokens and unassigned ids resolve to the unknown token.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Errors produced by the tokenizer module.
///
/// # Variants
///
/// - **Config**: The [`TokenizerConfig`](crate::config::TokenizerConfig) failed validation.
///   *When*: At construction.
///   *Recovery*: Fix the configuration; see [`ConfigError`] for the rule that failed.
///
/// - **Persist**: The store could not save the vocabulary.
///   *When*: After [`train`](super::WordTokenizer::train) mutated the vocabulary, or on [`reset`](super::WordTokenizer::reset) when clearing fails.
///   *Recovery*: The in-memory vocabulary keeps the new tokens; retry training (which saves again) once the store is writable.
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Invalid tokenizer configuration.
    #[error("tokenizer: {0}")]
    Config(#[from] ConfigError),

    /// The persistence adapter failed to write or clear the vocabulary.
    #[error("tokenizer: failed to persist vocabulary: {0}")]
    Persist(#[from] StoreError),
}

/// A token → id mapping that is not a dense bijection onto `0..len`.
///
/// # Variants
///
/// - **IdOutOfRange**: An id is `>= len`, which leaves a gap somewhere below it.
/// - **DuplicateId**: Two tokens share an id.
///
/// Both are reported while loading persisted state and are treated as "no vocabulary stored".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// An id does not fit in a dense vocabulary of this size.
    #[error("vocab: id {id} of {token:?} is out of range for {len} tokens")]
    IdOutOfRange {
        /// The offending token.
        token: String,
        /// Its id.
        id: usize,
        /// Number of tokens in the mapping.
        len: usize,
    },

    /// Two tokens map to the same id.
    #[error("vocab: id {0} is assigned to more than one token")]
    DuplicateId(usize),
}
