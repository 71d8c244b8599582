//! Tokenizer configuration: advisory vocabulary size and the special-token definition.
//!
//! Load from environment via [`from_env`] and validate with [`TokenizerConfig::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use serde::{Deserialize, Serialize};

use crate::tokenizer::SpecialTokens;
use constants::{
    DEFAULT_BOS_TOKEN, DEFAULT_EOS_TOKEN, DEFAULT_PAD_TOKEN, DEFAULT_UNK_TOKEN, DEFAULT_VOCAB_SIZE,
};

pub use builder::{env_key, env_parsed, env_string, from_env, store_path_from_env};
pub use error::ConfigError;

/// Read-only configuration of a tokenizer instance.
///
/// `vocab_size` is advisory: the vocabulary is allowed to grow past it and a warning is logged
/// when it does. The special tokens take ids `0..4` in the order pad, unk, bos, eos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Target vocabulary size (not enforced).
    pub vocab_size: usize,
    /// Reserved tokens that always occupy the lowest ids.
    pub special_tokens: SpecialTokens,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            pad_token: DEFAULT_PAD_TOKEN.to_string(),
            unk_token: DEFAULT_UNK_TOKEN.to_string(),
            bos_token: DEFAULT_BOS_TOKEN.to_string(),
            eos_token: DEFAULT_EOS_TOKEN.to_string(),
        }
    }
}

impl Default for TokenizerConfig {
    /// Returns default configuration: `vocab_size` 1000 and `[PAD] [UNK] [BOS] [EOS]`.
    fn default() -> Self {
        Self {
            vocab_size: DEFAULT_VOCAB_SIZE,
            special_tokens: SpecialTokens::default(),
        }
    }
}

impl TokenizerConfig {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    ///
    /// Ensures: `vocab_size` leaves room for the special tokens, every special token is
    /// non-empty and free of whitespace, and no two special tokens are equal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = SpecialTokens::COUNT;
        if self.vocab_size < count {
            return Err(ConfigError::Validation(format!(
                "vocab_size ({}) must be at least the number of special tokens ({count})",
                self.vocab_size
            )));
        }
        let tokens: Vec<&str> = self.special_tokens.iter().collect();
        for (i, token) in tokens.iter().enumerate() {
            if token.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "special token #{i} must not be empty"
                )));
            }
            if token.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "special token {token:?} must not contain whitespace"
                )));
            }
            if tokens[..i].contains(token) {
                return Err(ConfigError::Validation(format!(
                    "special token {token:?} is listed more than once"
                )));
            }
        }
        Ok(())
    }
}
