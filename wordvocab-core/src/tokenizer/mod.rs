//! Tokenization: encode text to token ids and decode back.
//!
//! This module defines the **trait** ([`Tokenizer`]), the vocabulary ([`Vocab`]) with its
//! reserved [`SpecialTokens`], and the **errors** ([`TokenizerError`], [`VocabError`]).
//! Implementations live in the `impls` submodule (e.g. [`WordTokenizer`] for whitespace-delimited words).
//! Training is a vocabulary concern: see [`train_vocab`].

mod encoding;
mod error;
mod impls;
mod pretokenize;
mod special;
mod trainer;
mod vocab;

pub use encoding::Encoding;
pub use error::{TokenizerError, VocabError};
pub use impls::WordTokenizer;
pub use pretokenize::split_tokens;
pub use special::{SpecialTokens, BOS_ID, EOS_ID, PAD_ID, UNK_ID};
pub use trainer::{distinct_tokens, train_vocab};
pub use vocab::Vocab;

/// Trait for tokenizers: encode text to ids and decode ids to text.
///
/// Neither direction fails. Tokens missing from the vocabulary encode to [`unk_id`](Tokenizer::unk_id)
/// and ids without a token decode to the unknown token.
pub trait Tokenizer {
    /// Splits `text` into tokens and looks up the id of each.
    fn encode(&self, text: &str) -> Encoding;

    /// Maps each id to its token and joins them with single spaces.
    ///
    /// Ids that are not yet assigned become the unknown token.
    fn decode(&self, ids: &[usize]) -> String;

    /// Vocabulary size (number of distinct tokens).
    fn vocab_size(&self) -> usize;

    /// Token id substituted for unseen tokens.
    fn unk_id(&self) -> usize;

    /// Token id used for beginning-of-sequence.
    fn bos_id(&self) -> usize;
}
