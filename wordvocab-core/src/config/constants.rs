//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.
//! Keeping them here avoids magic numbers and repeated string literals across the config module.

/// Environment variable prefix for wordvocab (e.g. `WORDVOCAB_VOCAB_SIZE`).
pub(crate) const ENV_PREFIX: &str = "WORDVOCAB_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_VOCAB_SIZE: &str = "VOCAB_SIZE";
pub(crate) const ENV_PAD_TOKEN: &str = "PAD_TOKEN";
pub(crate) const ENV_UNK_TOKEN: &str = "UNK_TOKEN";
pub(crate) const ENV_BOS_TOKEN: &str = "BOS_TOKEN";
pub(crate) const ENV_EOS_TOKEN: &str = "EOS_TOKEN";
pub(crate) const ENV_STORE_PATH: &str = "STORE_PATH";

// --- Default values ---

pub(crate) const DEFAULT_VOCAB_SIZE: usize = 1000;
pub(crate) const DEFAULT_PAD_TOKEN: &str = "[PAD]";
pub(crate) const DEFAULT_UNK_TOKEN: &str = "[UNK]";
pub(crate) const DEFAULT_BOS_TOKEN: &str = "[BOS]";
pub(crate) const DEFAULT_EOS_TOKEN: &str = "[EOS]";
pub(crate) const DEFAULT_STORE_PATH: &str = "wordvocab.json";
