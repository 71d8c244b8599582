//! Reserved tokens that always sit at the bottom of the vocabulary.

use serde::{Deserialize, Serialize};

/// Id of the padding token.
pub const PAD_ID: usize = 0;
/// Id of the unknown token; encode and decode fall back to it.
pub const UNK_ID: usize = 1;
/// Id of the beginning-of-sequence token.
pub const BOS_ID: usize = 2;
/// Id of the end-of-sequence token.
pub const EOS_ID: usize = 3;

/// The four distinguished strings of a vocabulary, in id order.
///
/// Each token's id equals its position in [`SpecialTokens::iter`]: pad is `0`, unk `1`,
/// bos `2`, eos `3`. They are inserted first into every fresh vocabulary and never move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Padding token (id 0).
    pub pad_token: String,
    /// Unknown token (id 1).
    pub unk_token: String,
    /// Beginning-of-sequence token (id 2).
    pub bos_token: String,
    /// End-of-sequence token (id 3).
    pub eos_token: String,
}

impl SpecialTokens {
    /// Number of special tokens.
    pub const COUNT: usize = 4;

    /// Iterates over the tokens in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.pad_token.as_str(),
            self.unk_token.as_str(),
            self.bos_token.as_str(),
            self.eos_token.as_str(),
        ]
        .into_iter()
    }
}
