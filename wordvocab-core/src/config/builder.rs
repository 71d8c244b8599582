//! Build [`TokenizerConfig`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single place for key names
//! (see [`crate::config::constants`]) and typed errors ([`ConfigError`]).

use std::path::PathBuf;

use super::constants::{
    DEFAULT_STORE_PATH, ENV_BOS_TOKEN, ENV_EOS_TOKEN, ENV_PAD_TOKEN, ENV_PREFIX, ENV_STORE_PATH,
    ENV_UNK_TOKEN, ENV_VOCAB_SIZE,
};
use super::ConfigError;
use super::TokenizerConfig;
use crate::tokenizer::SpecialTokens;

/// Returns the full environment variable key for a given suffix (e.g. `VOCAB_SIZE` → `WORDVOCAB_VOCAB_SIZE`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but invalid (e.g. not Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails (e.g. `VOCAB_SIZE=abc` for `usize`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`TokenizerConfig`] from environment variables, falling back to [`TokenizerConfig::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse (e.g. `WORDVOCAB_VOCAB_SIZE=abc`).
/// The result is not validated; call [`TokenizerConfig::validate`] before use.
pub fn from_env() -> Result<TokenizerConfig, ConfigError> {
    let default = TokenizerConfig::default();
    let specials = default.special_tokens;

    let vocab_size =
        env_parsed::<usize>(&env_key(ENV_VOCAB_SIZE))?.unwrap_or(default.vocab_size);
    let special_tokens = SpecialTokens {
        pad_token: env_string(&env_key(ENV_PAD_TOKEN))?.unwrap_or(specials.pad_token),
        unk_token: env_string(&env_key(ENV_UNK_TOKEN))?.unwrap_or(specials.unk_token),
        bos_token: env_string(&env_key(ENV_BOS_TOKEN))?.unwrap_or(specials.bos_token),
        eos_token: env_string(&env_key(ENV_EOS_TOKEN))?.unwrap_or(specials.eos_token),
    };

    Ok(TokenizerConfig {
        vocab_size,
        special_tokens,
    })
}

/// Path of the vocabulary file used by the command-line front end.
///
/// Reads `WORDVOCAB_STORE_PATH`, defaulting to `wordvocab.json` in the working directory.
pub fn store_path_from_env() -> Result<PathBuf, ConfigError> {
    Ok(env_string(&env_key(ENV_STORE_PATH))?
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)))
}
